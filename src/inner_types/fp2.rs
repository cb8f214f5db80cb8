use crate::inner_types::fp::Fp;
use crate::PairingError;

use core::{
    borrow::Borrow,
    fmt::{self, Debug, Formatter},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Represents an element $c_0 + c_1 u$ of $\mathbb{F}_{p^2} = \mathbb{F}_p / u^2 + 5$
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    /// The `a` portion
    pub c0: Fp,
    /// The `b` portion
    pub c1: Fp,
}

extension_field_impl!(Fp2);

impl MulAssign<Fp> for Fp2 {
    fn mul_assign(&mut self, rhs: Fp) {
        *self = self.mul_by_fp(&rhs);
    }
}

ops_impl!(Mul, mul, *, MulAssign, mul_assign, *= , LHS = Fp2, RHS = Fp, OUTPUT = Fp2);

impl Debug for Fp2 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Fp2({:?} + {:?} * u)", self.c0, self.c1)
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<T: Borrow<Fp2>> Sum<T> for Fp2 {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x.borrow())
    }
}

impl<T: Borrow<Fp2>> Product<T> for Fp2 {
    fn product<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x.borrow())
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Self {
        Self {
            c0: f,
            c1: Fp::ZERO,
        }
    }
}

impl Fp2 {
    /// The size of the encoding in bytes
    pub const BYTES: usize = 2 * Fp::BYTES;

    /// The additive identity element
    pub const ZERO: Self = Self {
        c0: Fp::ZERO,
        c1: Fp::ZERO,
    };

    /// The multiplicative identity element
    pub const ONE: Self = Self {
        c0: Fp::ONE,
        c1: Fp::ZERO,
    };

    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Self {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }

    /// `c0 || c1`, each big-endian
    pub fn to_repr(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..Fp::BYTES].copy_from_slice(&self.c0.to_repr());
        bytes[Fp::BYTES..].copy_from_slice(&self.c1.to_repr());
        bytes
    }

    pub fn from_repr(bytes: &[u8; Self::BYTES]) -> CtOption<Self> {
        let mut c0 = [0u8; Fp::BYTES];
        let mut c1 = [0u8; Fp::BYTES];
        c0.copy_from_slice(&bytes[..Fp::BYTES]);
        c1.copy_from_slice(&bytes[Fp::BYTES..]);
        Fp::from_repr(&c0).and_then(|c0| Fp::from_repr(&c1).map(|c1| Self { c0, c1 }))
    }

    pub const fn addition(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.addition(&rhs.c0),
            c1: self.c1.addition(&rhs.c1),
        }
    }

    pub const fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    pub const fn subtract(&self, rhs: &Self) -> Self {
        Self {
            c0: self.c0.subtract(&rhs.c0),
            c1: self.c1.subtract(&rhs.c1),
        }
    }

    pub const fn multiply(&self, rhs: &Self) -> Self {
        // Karatsuba
        // c0 = a0 b0 + β a1 b1
        // c1 = (a0 + a1)(b0 + b1) - a0 b0 - a1 b1
        let t0 = self.c0.multiply(&rhs.c0);
        let t1 = self.c1.multiply(&rhs.c1);
        let cross = self
            .c0
            .addition(&self.c1)
            .multiply(&rhs.c0.addition(&rhs.c1));
        Self {
            c0: t0.addition(&t1.mul_by_nonresidue()),
            c1: cross.subtract(&t0).subtract(&t1),
        }
    }

    pub const fn square(&self) -> Self {
        // Complex squaring
        // v0 = a0 a1
        // c0 = (a0 + a1)(a0 + β a1) - v0 - β v0
        // c1 = 2 v0
        let v0 = self.c0.multiply(&self.c1);
        let c0 = self
            .c0
            .addition(&self.c1)
            .multiply(&self.c0.addition(&self.c1.mul_by_nonresidue()))
            .subtract(&v0)
            .subtract(&v0.mul_by_nonresidue());
        Self {
            c0,
            c1: v0.double(),
        }
    }

    pub const fn negate(&self) -> Self {
        Self {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
        }
    }

    pub const fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Self {
            c0: self.c0.multiply(rhs),
            c1: self.c1.multiply(rhs),
        }
    }

    /// Multiplies by the cubic nonresidue `u`, so `(a0 + a1 u) u = β a1 + a0 u`.
    pub const fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Conjugation of this element
    pub const fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: self.c1.negate(),
        }
    }

    /// Raises this element to `p^power`.
    pub const fn frobenius_map(&self, power: usize) -> Self {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            *self
        }
    }

    pub fn invert(&self) -> CtOption<Self> {
        // 1 / (a0 + a1 u) = (a0 - a1 u) / (a0^2 - β a1^2)
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Self {
                c0: self.c0 * t,
                c1: self.c1 * -t,
            })
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner_types::fp::FpModulus;
    use alloc::string::ToString;
    use crypto_bigint::modular::constant_mod::ResidueParams;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn nonresidue() {
        let u = Fp2::new(Fp::ZERO, Fp::ONE);
        assert_eq!(u.square(), Fp2::from(-Fp::from(5u8)));

        let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
        let a = Fp2::random(&mut rng);
        assert_eq!(a.mul_by_nonresidue(), a * u);
    }

    #[test]
    fn arithmetic() {
        let mut rng = ChaCha8Rng::from_seed([8u8; 32]);
        for _ in 0..10 {
            let a = Fp2::random(&mut rng);
            let b = Fp2::random(&mut rng);
            let c = Fp2::random(&mut rng);
            assert_eq!(a * b, b * a);
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a.square(), a * a);
            assert_eq!(a.double(), a + a);
            assert_eq!(a - b + b, a);
            assert_eq!(a * a.invert().unwrap(), Fp2::ONE);
            assert_eq!(a.conjugate().conjugate(), a);
            let f = Fp::random(&mut rng);
            assert_eq!(a * f, a * Fp2::from(f));
        }
        assert!(bool::from(Fp2::ZERO.invert().is_none()));
    }

    #[test]
    fn frobenius() {
        let mut rng = ChaCha8Rng::from_seed([9u8; 32]);
        let a = Fp2::random(&mut rng);
        let p = FpModulus::MODULUS.to_words();
        assert_eq!(a.frobenius_map(1), a.pow_vartime(p));
        assert_eq!(a.frobenius_map(2), a);
    }

    #[test]
    fn hex_round_trip() {
        let mut rng = ChaCha8Rng::from_seed([10u8; 32]);
        let a = Fp2::random(&mut rng);
        let s = a.to_string();
        assert_eq!(s.len(), 2 * Fp2::BYTES);
        assert_eq!(s.parse::<Fp2>().unwrap(), a);
        assert_eq!(Fp2::from_repr(&a.to_repr()).unwrap(), a);
    }

    #[test]
    fn serde_matches_display() {
        let mut rng = ChaCha8Rng::from_seed([11u8; 32]);
        let a = Fp2::random(&mut rng);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, alloc::format!("\"{}\"", a));
        assert_eq!(serde_json::from_str::<Fp2>(&json).unwrap(), a);
    }
}
