use crate::inner_types::params::SUBGROUP_ORDER;
use crate::inner_types::Fp;
use crate::PairingError;
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use crypto_bigint::Encoding;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// `3 b` for `y^2 = x^3 + 1`
#[inline]
fn mul_by_3b(a: Fp) -> Fp {
    a.double() + a
}

/// An element in $\mathbb{G}_1$ represented in the affine coordinate space.
/// The Miller loop only reads the coordinates of this model.
///
/// Values built through [`G1Affine::new`] are guaranteed to be in the
/// prime-order subgroup.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: Choice,
}

/// An element in $\mathbb{G}_1$ in homogeneous projective coordinates,
/// `(X / Z, Y / Z)`.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

curve_impl!(
    affine = G1Affine,
    projective = G1Projective,
    field = Fp,
    b = Fp::ONE,
    mul_by_3b = mul_by_3b,
);

impl G1Affine {
    /// The fixed generator of $\mathbb{G}_1$
    pub fn generator() -> Self {
        Self {
            x: Fp::from_be_hex("008848defe740a67c8fc6225bf87ff5485951e2caa9d41bb188282c8bd37cb5cd5481512ffcd394eeab9b16eb21be9ef"),
            y: Fp::from_be_hex("01914a69c5102eff1f674f5d30afeec4bd7fb348ca3e52d96d182ad44fb82305c2fe3d3634a9591afd82de55559c8ea6"),
            infinity: Choice::from(0u8),
        }
    }
}
