use super::*;
use crate::PairingError;
use core::{
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// `u^((p^k - 1) / 6)` for k = 1, 2, 3
const FROBENIUS_COEFF_C1: [Fp; 3] = [
    Fp::from_be_hex("009a9975399c019633c1e30682567f915c8a45e0f94ebc8ec681bf34a3aa559db57668e558eb0188e938a9d1104f2031"),
    Fp::from_be_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000002"),
    Fp::from_be_hex("01680a40796537cac0c534db1a79beb1400398f50ad1dec1bce649cf436b0f6299588459bff27d8e6e76d5ecf1391c63"),
];

/// Represents an element $c_0 + c_1 w$ of $\mathbb{F}_{p^{12}} = \mathbb{F}_{p^6} / w^2 - v$
#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl From<Fp> for Fp12 {
    fn from(f: Fp) -> Self {
        Self {
            c0: Fp6::from(f),
            c1: Fp6::ZERO,
        }
    }
}

impl From<Fp2> for Fp12 {
    fn from(f: Fp2) -> Self {
        Self {
            c0: Fp6::from(f),
            c1: Fp6::ZERO,
        }
    }
}

impl From<Fp6> for Fp12 {
    fn from(c0: Fp6) -> Self {
        Self { c0, c1: Fp6::ZERO }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Debug for Fp12 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Fp12({:?} + {:?} * w)", self.c0, self.c1)
    }
}

extension_field_impl!(Fp12);

impl Fp12 {
    /// Twelve base field elements
    pub const BYTES: usize = 2 * Fp6::BYTES;

    pub const ZERO: Self = Self {
        c0: Fp6::ZERO,
        c1: Fp6::ZERO,
    };

    pub const ONE: Self = Self {
        c0: Fp6::ONE,
        c1: Fp6::ZERO,
    };

    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Self {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// The base field coefficients in encoding order, `C0.B0.A0` first.
    pub fn coefficients(&self) -> [Fp; 12] {
        let mut out = [Fp::ZERO; 12];
        for (i, c6) in [self.c0, self.c1].iter().enumerate() {
            for (j, c2) in [c6.c0, c6.c1, c6.c2].iter().enumerate() {
                out[6 * i + 2 * j] = c2.c0;
                out[6 * i + 2 * j + 1] = c2.c1;
            }
        }
        out
    }

    pub fn from_coefficients(c: &[Fp; 12]) -> Self {
        Self {
            c0: Fp6 {
                c0: Fp2::new(c[0], c[1]),
                c1: Fp2::new(c[2], c[3]),
                c2: Fp2::new(c[4], c[5]),
            },
            c1: Fp6 {
                c0: Fp2::new(c[6], c[7]),
                c1: Fp2::new(c[8], c[9]),
                c2: Fp2::new(c[10], c[11]),
            },
        }
    }

    /// Parses twelve hex encoded base field elements in encoding order.
    pub fn from_str_coefficients(coefficients: [&str; 12]) -> Result<Self, PairingError> {
        let mut c = [Fp::ZERO; 12];
        for (out, s) in c.iter_mut().zip(coefficients.iter()) {
            *out = Fp::from_str(s)?;
        }
        Ok(Self::from_coefficients(&c))
    }

    /// Twelve big-endian base field elements, `C0.B0.A0` first.
    pub fn to_repr(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        for (chunk, c) in bytes
            .chunks_exact_mut(Fp::BYTES)
            .zip(self.coefficients().iter())
        {
            chunk.copy_from_slice(&c.to_repr());
        }
        bytes
    }

    pub fn from_repr(bytes: &[u8; Self::BYTES]) -> CtOption<Self> {
        let mut c = [Fp::ZERO; 12];
        let mut is_some = Choice::from(1u8);
        for (out, chunk) in c.iter_mut().zip(bytes.chunks_exact(Fp::BYTES)) {
            let mut repr = [0u8; Fp::BYTES];
            repr.copy_from_slice(chunk);
            let f = Fp::from_repr(&repr);
            is_some &= f.is_some();
            *out = f.unwrap_or(Fp::ZERO);
        }
        CtOption::new(Self::from_coefficients(&c), is_some)
    }

    /// Multiplies by the sparse element `s v`.
    pub fn mul_by_v(&self, s: &Fp2) -> Self {
        Self {
            c0: self.c0.mul_by_1(s),
            c1: self.c1.mul_by_1(s),
        }
    }

    /// Multiplies by the sparse element `s v w`.
    pub fn mul_by_vw(&self, s: &Fp2) -> Self {
        Self {
            c0: self.c1.mul_by_1(s).mul_by_nonresidue(),
            c1: self.c0.mul_by_1(s),
        }
    }

    /// Multiplies by the sparse element `s v^2 w`.
    pub fn mul_by_v2w(&self, s: &Fp2) -> Self {
        Self {
            c0: self.c1.mul_by_2(s).mul_by_nonresidue(),
            c1: self.c0.mul_by_2(s),
        }
    }

    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// The inverse of an element of norm one, which is its conjugate.
    pub fn unitary_inverse(&self) -> Self {
        self.conjugate()
    }

    /// Raises this element to `p^power` for `power` in `1..=3`.
    pub(crate) fn frobenius_map(&self, power: usize) -> Self {
        debug_assert!((1..=3).contains(&power));
        Self {
            c0: self.c0.frobenius_map(power),
            c1: self
                .c1
                .frobenius_map(power)
                .mul_by_fp(&FROBENIUS_COEFF_C1[power - 1]),
        }
    }

    /// Raises this element to p.
    pub fn frobenius(&self) -> Self {
        self.frobenius_map(1)
    }

    /// Raises this element to p^2.
    pub fn frobenius_square(&self) -> Self {
        self.frobenius_map(2)
    }

    /// Raises this element to p^3.
    pub fn frobenius_cube(&self) -> Self {
        self.frobenius_map(3)
    }

    pub fn square(&self) -> Self {
        let b0 = self.c0.square();
        let b1 = self.c1.square();
        Self {
            c0: b0 + b1.mul_by_nonresidue(),
            c1: (self.c0 * self.c1).double(),
        }
    }

    /// Squaring in the cyclotomic subgroup, only valid for elements of norm one.
    pub fn cyclotomic_square(&self) -> Self {
        #[must_use]
        fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
            let t0 = a.square();
            let t1 = b.square();
            let mut t2 = t1.mul_by_nonresidue();
            let c0 = t2 + t0;
            t2 = a + b;
            t2 = t2.square();
            t2 -= t0;
            let c1 = t2 - t1;

            (c0, c1)
        }
        // Adaptation of Algorithm 5.5.4, Guide to Pairing-Based Cryptography
        // Faster Squaring in the Cyclotomic Subgroup of Sixth Degree Extensions
        // https://eprint.iacr.org/2009/565.pdf
        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        let (t0, t1) = fp4_square(z0, z1);

        // For A
        z0 = t0 - z0;
        z0 = z0 + z0 + t0;

        z1 = t1 + z1;
        z1 = z1 + z1 + t1;

        let (mut t0, t1) = fp4_square(z2, z3);
        let (t2, t3) = fp4_square(z4, z5);

        // For C
        z4 = t0 - z4;
        z4 = z4 + z4 + t0;

        z5 = t1 + z5;
        z5 = z5 + z5 + t1;

        // For B
        t0 = t3.mul_by_nonresidue();
        z2 = t0 + z2;
        z2 = z2 + z2 + t0;

        z3 = t2 - z3;
        z3 = z3 + z3 + t2;

        Fp12 {
            c0: Fp6 {
                c0: z0,
                c1: z4,
                c2: z3,
            },
            c1: Fp6 {
                c0: z2,
                c1: z1,
                c2: z5,
            },
        }
    }

    pub fn addition(&self, other: &Self) -> Self {
        Self {
            c0: self.c0 + other.c0,
            c1: self.c1 + other.c1,
        }
    }

    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self {
            c0: self.c0 - other.c0,
            c1: self.c1 - other.c1,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let a_a = self.c0 * other.c0;
        let b_b = self.c1 * other.c1;
        let o = other.c1 + other.c0;
        let c1 = (self.c1 + self.c0) * o - a_a - b_b;
        let c0 = b_b.mul_by_nonresidue() + a_a;
        Self { c0, c1 }
    }

    /// Norm based inversion, a single `Fp6` inversion. `None` only for zero.
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Self {
                c0: self.c0 * t,
                c1: self.c1 * -t,
            })
    }

    /// Square and multiply over little-endian 64-bit limbs. Not constant time.
    pub fn pow_vartime<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        self.pow_vartime_with(exp, Self::square)
    }

    /// [`Fp12::pow_vartime`] using the cyclotomic square, only valid for
    /// elements of norm one.
    pub fn cyclotomic_pow_vartime<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        self.pow_vartime_with(exp, Self::cyclotomic_square)
    }

    fn pow_vartime_with<S: AsRef<[u64]>>(&self, exp: S, square: fn(&Self) -> Self) -> Self {
        let mut res = Self::ONE;
        for e in exp.as_ref().iter().rev() {
            for i in (0..64).rev() {
                res = square(&res);
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}
