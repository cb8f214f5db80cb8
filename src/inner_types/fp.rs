use crate::PairingError;
use core::{
    borrow::Borrow,
    fmt::{self, Debug, Formatter},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use crypto_bigint::{
    impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
    Encoding, NonZero, U384, U768,
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, CtOption};
use zeroize::DefaultIsZeroes;

impl_modulus!(
    FpModulus,
    U384,
    "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001"
);

pub type FpResidue = Residue<FpModulus, { U384::LIMBS }>;
const MODULUS_U768: NonZero<U768> = NonZero::<U768>::const_new(FpModulus::MODULUS.resize()).0;

/// An element of the BLS12-377 base field held in Montgomery form.
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) FpResidue);

impl Default for Fp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for Fp {}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{:x})", self)
    }
}

hex_impl!(Fp, Fp::BYTES);

impl From<u8> for Fp {
    fn from(value: u8) -> Self {
        Self::from_uint(&U384::from_u8(value))
    }
}

impl From<u16> for Fp {
    fn from(value: u16) -> Self {
        Self::from_uint(&U384::from_u16(value))
    }
}

impl From<u32> for Fp {
    fn from(value: u32) -> Self {
        Self::from_uint(&U384::from_u32(value))
    }
}

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Self::from_uint(&U384::from_u64(value))
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.to_montgomery().ct_eq(&other.0.to_montgomery())
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FpResidue::from_montgomery(U384::conditional_select(
            &a.0.to_montgomery(),
            &b.0.to_montgomery(),
            choice,
        )))
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp {}

impl AddAssign for Fp {
    fn add_assign(&mut self, rhs: Fp) {
        *self = self.addition(&rhs);
    }
}

ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = Fp, RHS = Fp, OUTPUT = Fp);

impl SubAssign for Fp {
    fn sub_assign(&mut self, rhs: Fp) {
        *self = self.subtract(&rhs);
    }
}

ops_impl!(Sub, sub, -, SubAssign, sub_assign, -=, LHS = Fp, RHS = Fp, OUTPUT = Fp);

impl MulAssign for Fp {
    fn mul_assign(&mut self, rhs: Fp) {
        *self = self.multiply(&rhs);
    }
}

ops_impl!(Mul, mul, *, MulAssign, mul_assign, *=, LHS = Fp, RHS = Fp, OUTPUT = Fp);

impl Neg for &Fp {
    type Output = Fp;

    fn neg(self) -> Fp {
        -*self
    }
}

impl Neg for Fp {
    type Output = Fp;

    fn neg(self) -> Fp {
        self.negate()
    }
}

impl<T: Borrow<Fp>> Sum<T> for Fp {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, item| acc + item.borrow())
    }
}

impl<T: Borrow<Fp>> Product<T> for Fp {
    fn product<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, item| acc * item.borrow())
    }
}

bytes_impl!(Fp, |f: &Fp| f.to_repr(), |bytes: &[u8]| {
    let repr = <[u8; Fp::BYTES]>::try_from(bytes).map_err(|_| PairingError::InvalidFieldBytes)?;
    Option::<Fp>::from(Fp::from_repr(&repr)).ok_or(PairingError::InvalidFieldBytes)
});

serde_impl!(
    Fp,
    |f: &Fp| f.to_repr(),
    |bytes: &[u8; Fp::BYTES]| {
        Option::<Fp>::from(Fp::from_repr(bytes)).ok_or(serde::de::Error::custom("Invalid bytes"))
    },
    Fp::BYTES
);

impl Fp {
    /// The size of the field in bytes
    pub const BYTES: usize = 48;

    /// The additive identity
    pub const ZERO: Self = Self(FpResidue::ZERO);
    /// The multiplicative identity
    pub const ONE: Self = Self(FpResidue::ONE);

    /// Builds an element from its canonical big-endian hex encoding.
    pub const fn from_be_hex(hex: &str) -> Self {
        Self(FpResidue::new(&U384::from_be_hex(hex)))
    }

    /// Builds an element from limbs that are already in Montgomery form.
    pub const fn from_montgomery(words: [u64; 6]) -> Self {
        Self(FpResidue::from_montgomery(U384::from_words(words)))
    }

    /// Returns the limbs of the Montgomery form.
    pub const fn to_montgomery(&self) -> [u64; 6] {
        self.0.to_montgomery().to_words()
    }

    /// Returns the canonical integer.
    pub const fn to_canonical(&self) -> U384 {
        self.0.retrieve()
    }

    pub(crate) const fn from_uint(value: &U384) -> Self {
        Self(FpResidue::new(value))
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; U768::BYTES];
        rng.fill_bytes(&mut bytes);
        let inner = (U768::from_be_slice(&bytes) % MODULUS_U768).resize();
        Self::from_uint(&inner)
    }

    /// Big-endian canonical encoding
    pub fn to_repr(&self) -> [u8; Self::BYTES] {
        self.0.retrieve().to_be_bytes()
    }

    /// Decodes a canonical big-endian encoding, rejecting values not less than the modulus.
    pub fn from_repr(bytes: &[u8; Self::BYTES]) -> CtOption<Self> {
        let inner = U384::from_be_slice(bytes);
        let is_canonical = FpModulus::MODULUS.ct_gt(&inner);
        CtOption::new(Self::from_uint(&inner), is_canonical)
    }

    pub const fn addition(&self, rhs: &Self) -> Self {
        Self(FpResidue::add(&self.0, &rhs.0))
    }

    pub const fn double(&self) -> Self {
        Self(FpResidue::add(&self.0, &self.0))
    }

    pub const fn subtract(&self, rhs: &Self) -> Self {
        Self(FpResidue::sub(&self.0, &rhs.0))
    }

    pub const fn negate(&self) -> Self {
        Self(FpResidue::neg(&self.0))
    }

    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self(FpResidue::mul(&self.0, &rhs.0))
    }

    pub const fn square(&self) -> Self {
        Self(FpResidue::square(&self.0))
    }

    /// Multiplies by the quadratic nonresidue -5.
    pub const fn mul_by_nonresidue(&self) -> Self {
        self.double().double().addition(self).negate()
    }

    pub fn invert(&self) -> CtOption<Self> {
        let (inv, is_some) = FpResidue::invert(&self.0);
        CtOption::new(Self(inv), Choice::from(is_some))
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
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
