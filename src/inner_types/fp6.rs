use super::*;
use crate::PairingError;
use core::{
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// `u^((p^k - 1) / 3)` for k = 1, 2, 3
const FROBENIUS_COEFF_C1: [Fp; 3] = [
    Fp::from_be_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000002"),
    Fp::from_be_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
    Fp::from_be_hex("01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000000"),
];

/// `u^(2(p^k - 1) / 3)` for k = 1, 2, 3
const FROBENIUS_COEFF_C2: [Fp; 3] = [
    Fp::from_be_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
    Fp::from_be_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e945779fffffffffffffffffffffff"),
    Fp::ONE,
];

/// Represents an element $c_0 + c_1 v + c_2 v^2$ of $\mathbb{F}_{p^6} = \mathbb{F}_{p^2} / v^3 - u$
#[derive(Copy, Clone, Default)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Debug for Fp6 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Fp6({:?} + {:?} * v + {:?} * v^2)",
            self.c0, self.c1, self.c2
        )
    }
}

extension_field_impl!(Fp6);

impl From<Fp> for Fp6 {
    fn from(f: Fp) -> Self {
        Self {
            c0: Fp2::from(f),
            c1: Fp2::ZERO,
            c2: Fp2::ZERO,
        }
    }
}

impl From<Fp2> for Fp6 {
    fn from(c0: Fp2) -> Self {
        Self {
            c0,
            c1: Fp2::ZERO,
            c2: Fp2::ZERO,
        }
    }
}

impl Fp6 {
    /// The size of the encoding in bytes
    pub const BYTES: usize = 3 * Fp2::BYTES;

    pub const ZERO: Self = Self {
        c0: Fp2::ZERO,
        c1: Fp2::ZERO,
        c2: Fp2::ZERO,
    };

    pub const ONE: Self = Self {
        c0: Fp2::ONE,
        c1: Fp2::ZERO,
        c2: Fp2::ZERO,
    };

    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Self {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// `c0 || c1 || c2`
    pub fn to_repr(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..Fp2::BYTES].copy_from_slice(&self.c0.to_repr());
        bytes[Fp2::BYTES..2 * Fp2::BYTES].copy_from_slice(&self.c1.to_repr());
        bytes[2 * Fp2::BYTES..].copy_from_slice(&self.c2.to_repr());
        bytes
    }

    pub fn from_repr(bytes: &[u8; Self::BYTES]) -> CtOption<Self> {
        let mut c0 = [0u8; Fp2::BYTES];
        let mut c1 = [0u8; Fp2::BYTES];
        let mut c2 = [0u8; Fp2::BYTES];
        c0.copy_from_slice(&bytes[..Fp2::BYTES]);
        c1.copy_from_slice(&bytes[Fp2::BYTES..2 * Fp2::BYTES]);
        c2.copy_from_slice(&bytes[2 * Fp2::BYTES..]);
        Fp2::from_repr(&c0).and_then(|c0| {
            Fp2::from_repr(&c1)
                .and_then(|c1| Fp2::from_repr(&c2).map(|c2| Self { c0, c1, c2 }))
        })
    }

    /// Multiplies by `c1 v`.
    pub fn mul_by_1(&self, c1: &Fp2) -> Self {
        Self {
            c0: (self.c2 * c1).mul_by_nonresidue(),
            c1: self.c0 * c1,
            c2: self.c1 * c1,
        }
    }

    /// Multiplies by `c2 v^2`.
    pub fn mul_by_2(&self, c2: &Fp2) -> Self {
        Self {
            c0: (self.c1 * c2).mul_by_nonresidue(),
            c1: (self.c2 * c2).mul_by_nonresidue(),
            c2: self.c0 * c2,
        }
    }

    /// Scales every coefficient by `rhs`.
    pub fn mul_by_fp2(&self, rhs: &Fp2) -> Self {
        Self {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
            c2: self.c2 * rhs,
        }
    }

    pub fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Self {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
            c2: self.c2 * rhs,
        }
    }

    /// Multiplies by `v`, rotating the coefficients and scaling the wrapped one by `u`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Raises this element to `p^power` for `power` in `1..=3`.
    pub(crate) fn frobenius_map(&self, power: usize) -> Self {
        debug_assert!((1..=3).contains(&power));
        Self {
            c0: self.c0.frobenius_map(power),
            c1: self.c1.frobenius_map(power) * FROBENIUS_COEFF_C1[power - 1],
            c2: self.c2.frobenius_map(power) * FROBENIUS_COEFF_C2[power - 1],
        }
    }

    pub fn frobenius(&self) -> Self {
        self.frobenius_map(1)
    }

    pub fn frobenius_square(&self) -> Self {
        self.frobenius_map(2)
    }

    pub fn frobenius_cube(&self) -> Self {
        self.frobenius_map(3)
    }

    pub fn addition(&self, other: &Self) -> Self {
        Self {
            c0: self.c0 + other.c0,
            c1: self.c1 + other.c1,
            c2: self.c2 + other.c2,
        }
    }

    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self {
            c0: self.c0 - other.c0,
            c1: self.c1 - other.c1,
            c2: self.c2 - other.c2,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        // Algorithm 13 from "High-Speed Software Implementation of the Optimal Ate Pairing over Barreto-Naehrig Curves"
        // by Jean-Luc Beuchat, Jorge E. González-Díaz, Shigeo Mitsunari, Eiji Okamoto, Francisco Rodríguez-Henríquez, and Tadanori Teruya

        let a_a = self.c0 * other.c0;
        let b_b = self.c1 * other.c1;
        let c_c = self.c2 * other.c2;

        let t0 = (self.c1 + self.c2) * (other.c1 + other.c2) - b_b - c_c;
        let t1 = (self.c0 + self.c1) * (other.c0 + other.c1) - a_a - b_b;
        let t2 = (self.c0 + self.c2) * (other.c0 + other.c2) - a_a - c_c;

        Self {
            c0: a_a + t0.mul_by_nonresidue(),
            c1: t1 + c_c.mul_by_nonresidue(),
            c2: t2 + b_b,
        }
    }

    pub fn square(&self) -> Self {
        // Algorithm 16 from "High-Speed Software Implementation of the Optimal Ate Pairing over Barreto-Naehrig Curves"
        // by Jean-Luc Beuchat, Jorge E. González-Díaz, Shigeo Mitsunari, Eiji Okamoto, Francisco Rodríguez-Henríquez, and Tadanori Teruya

        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        Self {
            c0: s0 + s3.mul_by_nonresidue(),
            c1: s1 + s4.mul_by_nonresidue(),
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        // Algorithm 17 from "High-Speed Software Implementation of the Optimal Ate Pairing over Barreto-Naehrig Curves"
        // by Jean-Luc Beuchat, Jorge E. González-Díaz, Shigeo Mitsunari, Eiji Okamoto, Francisco Rodríguez-Henríquez, and Tadanori Teruya

        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0 * self.c1;
        let t4 = self.c0 * self.c2;
        let t5 = self.c1 * self.c2;

        // c0 = t0 - ξ * t5
        let c0 = t0 - t5.mul_by_nonresidue();
        // c1 = ξ * t2 - t3
        let c1 = t2.mul_by_nonresidue() - t3;
        // c2 = t1 - t4
        let c2 = t1 - t4;

        let t6 = self.c0 * c0 + (self.c2 * c1 + self.c1 * c2).mul_by_nonresidue();

        t6.invert().map(|t6| Self { c0, c1, c2 }.mul_by_fp2(&t6))
    }

    /// Square and multiply over little-endian 64-bit limbs. Not constant time.
    pub fn pow_vartime<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::ONE;
        for e in exp.as_ref().iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}
