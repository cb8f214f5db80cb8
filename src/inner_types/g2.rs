use crate::inner_types::params::SUBGROUP_ORDER;
use crate::inner_types::{Fp, Fp2};
use crate::PairingError;
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use crypto_bigint::Encoding;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// `b = 1 / u` of the twist `y^2 = x^3 + b`
pub(crate) const B: Fp2 = Fp2::new(
    Fp::ZERO,
    Fp::from_be_hex("010222f6db0fd6f343bd03737460c589dc7b4f91cd5fd889129207b63c6bf8000dd39e5c1ccccccd1c9ed9999999999a"),
);

const B3: Fp2 = Fp2::new(
    Fp::ZERO,
    Fp::from_be_hex("01582e9e796a73ef04fc0499f08107627b4f14c2672a760c18c2b4f2fb3aa000126f7dd026666666d0d3cccccccccccd"),
);

#[inline]
fn mul_by_3b(a: Fp2) -> Fp2 {
    a * B3
}

/// An element of $\mathbb{G}_2$ represented in the affine coordinate space.
#[derive(Copy, Clone, Debug)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) infinity: Choice,
}

/// An element of $\mathbb{G}_2$ represented in homogeneous projective
/// coordinates, `(X / Z, Y / Z)`. Line evaluation works in this model.
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

curve_impl!(
    affine = G2Affine,
    projective = G2Projective,
    field = Fp2,
    b = B,
    mul_by_3b = mul_by_3b,
);

impl G2Affine {
    /// Returns the fixed generator of the group
    pub fn generator() -> Self {
        Self {
            x: Fp2::new(
                Fp::from_be_hex("018480be71c785fec89630a2a3841d01c565f071203e50317ea501f557db6b9b71889f52bb53540274e3e48f7c005196"),
                Fp::from_be_hex("00ea6040e700403170dc5a51b1b140d5532777ee6651cecbe7223ece0799c9de5cf89984bff76fe6b26bfefa6ea16afe"),
            ),
            y: Fp2::new(
                Fp::from_be_hex("00690d665d446f7bd960736bcbb2efb4de03ed7274b49a58e458c282f832d204f2cf88886d8c7c2ef094094409fd4ddf"),
                Fp::from_be_hex("00f8169fd28355189e549da3151a70aa61ef11ac3d591bf12463b01acee304c24279b83f5e52270bd9a1cdd185eb8f93"),
            ),
            infinity: Choice::from(0u8),
        }
    }
}

impl From<&G2Jacobian> for G2Affine {
    fn from(p: &G2Jacobian) -> G2Affine {
        let zinv = p.z.invert().unwrap_or(Fp2::ZERO);
        let zinv2 = zinv.square();
        let finite = G2Affine {
            x: p.x * zinv2,
            y: p.y * zinv2 * zinv,
            infinity: Choice::from(0u8),
        };
        G2Affine::conditional_select(&finite, &G2Affine::identity(), zinv.is_zero())
    }
}

impl From<G2Jacobian> for G2Affine {
    fn from(p: G2Jacobian) -> G2Affine {
        Self::from(&p)
    }
}

impl From<&G2Jacobian> for G2Projective {
    /// `(X / Z^2, Y / Z^3)` is `(X Z / Z^3, Y / Z^3)`
    fn from(value: &G2Jacobian) -> Self {
        Self {
            x: value.x * value.z,
            y: value.y,
            z: value.z.square() * value.z,
        }
    }
}

impl From<G2Jacobian> for G2Projective {
    fn from(value: G2Jacobian) -> Self {
        G2Projective::from(&value)
    }
}

/// An element of $\mathbb{G}_2$ in Jacobian coordinates, `(X / Z^2, Y / Z^3)`.
///
/// This is the Miller loop accumulator. Its formulas branch on public data
/// and are not constant time.
#[derive(Copy, Clone, Debug)]
pub struct G2Jacobian {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl Default for G2Jacobian {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for G2Jacobian {}

impl ConstantTimeEq for G2Jacobian {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X Z'^2, Y Z'^3) == (X' Z^2, Y' Z^3)
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let x1 = self.x * z2z2;
        let x2 = other.x * z1z1;

        let y1 = self.y * z2z2 * other.z;
        let y2 = other.y * z1z1 * self.z;

        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero & !other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl Eq for G2Jacobian {}

impl PartialEq for G2Jacobian {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for G2Jacobian {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl From<&G2Affine> for G2Jacobian {
    fn from(value: &G2Affine) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: Fp2::conditional_select(&Fp2::ONE, &Fp2::ZERO, value.infinity),
        }
    }
}

impl From<G2Affine> for G2Jacobian {
    fn from(value: G2Affine) -> Self {
        G2Jacobian::from(&value)
    }
}

impl Neg for &G2Jacobian {
    type Output = G2Jacobian;

    fn neg(self) -> G2Jacobian {
        -*self
    }
}

impl Neg for G2Jacobian {
    type Output = G2Jacobian;

    fn neg(self) -> G2Jacobian {
        G2Jacobian {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl G2Jacobian {
    /// Returns the identity of the group
    pub const IDENTITY: Self = Self {
        x: Fp2::ONE,
        y: Fp2::ONE,
        z: Fp2::ZERO,
    };

    /// Returns true if this point is the identity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Converts to the affine model, one inversion.
    pub fn to_affine(&self) -> G2Affine {
        G2Affine::from(self)
    }

    /// Returns true if this point is on the curve.
    pub fn is_on_curve(&self) -> Choice {
        // Y^2 = X^3 + b Z^6
        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        self.y
            .square()
            .ct_eq(&(self.x.square() * self.x + z6 * B))
            | self.z.is_zero()
    }

    /// Computes the doubling of this point.
    pub fn double(&self) -> G2Jacobian {
        // dbl-2009-l, https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        G2Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Adds an affine point to this point.
    pub fn add_mixed(&self, rhs: &G2Affine) -> G2Jacobian {
        if bool::from(rhs.infinity) {
            return *self;
        }
        if bool::from(self.is_identity()) {
            return G2Jacobian::from(rhs);
        }

        // madd-2007-bl, https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html
        let z1z1 = self.z.square();
        let u2 = rhs.x * z1z1;
        let s2 = rhs.y * self.z * z1z1;

        if u2 == self.x && s2 == self.y {
            return self.double();
        }

        // u2 == x with s2 != y leaves h = 0 and so z3 = 0, the identity
        let h = u2 - self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;

        G2Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
