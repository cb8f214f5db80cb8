/// Derives the by-value and by-reference operator impls from an
/// `*Assign` impl, or the reference impls from an existing by-value impl.
macro_rules! ops_impl {
    ($trait:ident, $func:ident, $op:tt, $assign_trait:ident, $assign_func:ident, $assign_op:tt, LHS = $lhs:ty, RHS = $rhs:ty, OUTPUT = $out:ty) => {
        impl $assign_trait<&$rhs> for $lhs {
            fn $assign_func(&mut self, rhs: &$rhs) {
                *self $assign_op *rhs;
            }
        }

        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $func(self, rhs: $rhs) -> $out {
                let mut out = self;
                out $assign_op rhs;
                out
            }
        }

        impl $trait<&$rhs> for $lhs {
            type Output = $out;

            fn $func(self, rhs: &$rhs) -> $out {
                let mut out = self;
                out $assign_op *rhs;
                out
            }
        }

        impl $trait<$rhs> for &$lhs {
            type Output = $out;

            fn $func(self, rhs: $rhs) -> $out {
                let mut out = *self;
                out $assign_op rhs;
                out
            }
        }

        impl $trait<&$rhs> for &$lhs {
            type Output = $out;

            fn $func(self, rhs: &$rhs) -> $out {
                let mut out = *self;
                out $assign_op *rhs;
                out
            }
        }
    };
    ($trait:ident, $func:ident, $op:tt, LHS = $lhs:ty, RHS = $rhs:ty, OUTPUT = $out:ty) => {
        impl $trait<&$rhs> for $lhs {
            type Output = $out;

            fn $func(self, rhs: &$rhs) -> $out {
                self $op *rhs
            }
        }

        impl $trait<$rhs> for &$lhs {
            type Output = $out;

            fn $func(self, rhs: $rhs) -> $out {
                *self $op rhs
            }
        }

        impl $trait<&$rhs> for &$lhs {
            type Output = $out;

            fn $func(self, rhs: &$rhs) -> $out {
                *self $op *rhs
            }
        }
    };
}

/// Byte conversions for types with a fixed size canonical encoding.
macro_rules! bytes_impl {
    ($name:ident, $to_bytes:expr, $from_bytes:expr) => {
        impl TryFrom<&[u8]> for $name {
            type Error = crate::PairingError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let f = $from_bytes;
                f(bytes)
            }
        }

        #[cfg(feature = "alloc")]
        impl TryFrom<crate::Vec<u8>> for $name {
            type Error = crate::PairingError;

            fn try_from(bytes: crate::Vec<u8>) -> Result<Self, Self::Error> {
                Self::try_from(bytes.as_slice())
            }
        }

        #[cfg(feature = "alloc")]
        impl TryFrom<&crate::Vec<u8>> for $name {
            type Error = crate::PairingError;

            fn try_from(bytes: &crate::Vec<u8>) -> Result<Self, Self::Error> {
                Self::try_from(bytes.as_slice())
            }
        }

        #[cfg(feature = "alloc")]
        impl From<$name> for crate::Vec<u8> {
            fn from(value: $name) -> Self {
                Self::from(&value)
            }
        }

        #[cfg(feature = "alloc")]
        impl From<&$name> for crate::Vec<u8> {
            fn from(value: &$name) -> Self {
                let f = $to_bytes;
                f(value).to_vec()
            }
        }
    };
}

/// Serializes as lower case hex for human readable formats and as raw
/// bytes otherwise.
macro_rules! serde_impl {
    ($name:ident, $to_bytes:expr, $from_bytes:expr, $len:expr) => {
        impl serde::Serialize for $name {
            fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let f = $to_bytes;
                let bytes = f(self);
                serdect::array::serialize_hex_lower_or_bin(&bytes, s)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let mut bytes = [0u8; $len];
                serdect::array::deserialize_hex_or_bin(&mut bytes, d)?;
                let f = $from_bytes;
                f(&bytes)
            }
        }
    };
}

/// Hex `Display`, `LowerHex`, `UpperHex` and `FromStr` over the canonical
/// byte encoding.
macro_rules! hex_impl {
    ($name:ident, $len:expr) => {
        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{:x}", self)
            }
        }

        impl core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for b in self.to_repr() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }

        impl core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for b in self.to_repr() {
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
        }

        impl core::str::FromStr for $name {
            type Err = crate::PairingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let mut bytes = [0u8; $len];
                hex::decode_to_slice(s, &mut bytes)?;
                Option::<$name>::from($name::from_repr(&bytes))
                    .ok_or(crate::PairingError::InvalidFieldString)
            }
        }
    };
}

/// Affine and homogeneous projective models of a short Weierstrass curve
/// `y^2 = x^3 + b` over `$field`, with the complete formulas of
/// <https://eprint.iacr.org/2015/1060.pdf> for `a = 0`.
///
/// The affine type needs fields `x`, `y`, `infinity` and the projective type
/// `x`, `y`, `z`. Both need a `generator()` of their own.
macro_rules! curve_impl {
    (
        affine = $affine:ident,
        projective = $proj:ident,
        field = $field:ident,
        b = $b:expr,
        mul_by_3b = $mul_by_3b:ident $(,)?
    ) => {
        impl Default for $affine {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl DefaultIsZeroes for $affine {}

        impl ConstantTimeEq for $affine {
            fn ct_eq(&self, other: &Self) -> Choice {
                let both_finite = !self.infinity & !other.infinity;
                (self.infinity & other.infinity)
                    | (both_finite & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
            }
        }

        impl ConditionallySelectable for $affine {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self {
                    x: $field::conditional_select(&a.x, &b.x, choice),
                    y: $field::conditional_select(&a.y, &b.y, choice),
                    infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
                }
            }
        }

        impl Eq for $affine {}

        impl PartialEq for $affine {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl From<&$proj> for $affine {
            fn from(p: &$proj) -> Self {
                let zinv = p.z.invert().unwrap_or($field::ZERO);
                let finite = Self {
                    x: p.x * zinv,
                    y: p.y * zinv,
                    infinity: Choice::from(0u8),
                };
                Self::conditional_select(&finite, &Self::identity(), zinv.is_zero())
            }
        }

        impl From<$proj> for $affine {
            fn from(p: $proj) -> Self {
                Self::from(&p)
            }
        }

        impl Neg for &$affine {
            type Output = $affine;

            fn neg(self) -> $affine {
                $affine {
                    x: self.x,
                    y: $field::conditional_select(&-self.y, &$field::ONE, self.infinity),
                    infinity: self.infinity,
                }
            }
        }

        impl Neg for $affine {
            type Output = $affine;

            fn neg(self) -> $affine {
                -&self
            }
        }

        impl Add<$proj> for $affine {
            type Output = $proj;

            fn add(self, rhs: $proj) -> $proj {
                rhs.addition_mixed(&self)
            }
        }

        ops_impl!(Add, add, +, LHS = $affine, RHS = $proj, OUTPUT = $proj);

        impl $affine {
            /// The point at infinity
            pub fn identity() -> Self {
                Self {
                    x: $field::ZERO,
                    y: $field::ONE,
                    infinity: Choice::from(1u8),
                }
            }

            /// Builds a point from affine coordinates, rejecting points off
            /// the curve or outside the order $r$ subgroup.
            pub fn new(x: $field, y: $field) -> Result<Self, PairingError> {
                let p = Self {
                    x,
                    y,
                    infinity: Choice::from(0u8),
                };
                if !bool::from(p.is_on_curve()) {
                    return Err(PairingError::NotOnCurve);
                }
                if !bool::from(p.is_torsion_free()) {
                    return Err(PairingError::NotInSubgroup);
                }
                Ok(p)
            }

            /// The affine coordinates, or `None` for the identity.
            pub fn coordinates(&self) -> CtOption<($field, $field)> {
                CtOption::new((self.x, self.y), !self.infinity)
            }

            pub fn is_identity(&self) -> Choice {
                self.infinity
            }

            pub fn is_torsion_free(&self) -> Choice {
                $proj::from(self).is_torsion_free()
            }

            pub fn is_on_curve(&self) -> Choice {
                let rhs = self.x.square() * self.x + $b;
                self.y.square().ct_eq(&rhs) | self.infinity
            }
        }

        impl Default for $proj {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl DefaultIsZeroes for $proj {}

        impl ConstantTimeEq for $proj {
            fn ct_eq(&self, other: &Self) -> Choice {
                // (X Z', Y Z') == (X' Z, Y' Z)
                let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
                let y_eq = (self.y * other.z).ct_eq(&(other.y * self.z));

                let lhs_inf = self.z.is_zero();
                let rhs_inf = other.z.is_zero();
                (lhs_inf & rhs_inf) | (!lhs_inf & !rhs_inf & x_eq & y_eq)
            }
        }

        impl Eq for $proj {}

        impl PartialEq for $proj {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl ConditionallySelectable for $proj {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self {
                    x: $field::conditional_select(&a.x, &b.x, choice),
                    y: $field::conditional_select(&a.y, &b.y, choice),
                    z: $field::conditional_select(&a.z, &b.z, choice),
                }
            }
        }

        impl From<&$affine> for $proj {
            fn from(p: &$affine) -> Self {
                Self {
                    x: p.x,
                    y: p.y,
                    z: $field::conditional_select(&$field::ONE, &$field::ZERO, p.infinity),
                }
            }
        }

        impl From<$affine> for $proj {
            fn from(p: $affine) -> Self {
                Self::from(&p)
            }
        }

        impl Neg for &$proj {
            type Output = $proj;

            fn neg(self) -> $proj {
                -*self
            }
        }

        impl Neg for $proj {
            type Output = $proj;

            fn neg(self) -> $proj {
                Self {
                    y: -self.y,
                    ..self
                }
            }
        }

        impl AddAssign for $proj {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.addition(&rhs);
            }
        }

        ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = $proj, RHS = $proj, OUTPUT = $proj);

        impl AddAssign<$affine> for $proj {
            fn add_assign(&mut self, rhs: $affine) {
                *self = self.addition_mixed(&rhs);
            }
        }

        ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = $proj, RHS = $affine, OUTPUT = $proj);

        impl SubAssign for $proj {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.addition(&-rhs);
            }
        }

        ops_impl!(Sub, sub, -, SubAssign, sub_assign, -=, LHS = $proj, RHS = $proj, OUTPUT = $proj);

        impl<T: Borrow<$proj>> Sum<T> for $proj {
            fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
                iter.fold(Self::IDENTITY, |acc, item| acc + item.borrow())
            }
        }

        impl $proj {
            /// The point at infinity
            pub const IDENTITY: Self = Self {
                x: $field::ZERO,
                y: $field::ONE,
                z: $field::ZERO,
            };

            pub fn generator() -> Self {
                Self::from($affine::generator())
            }

            /// Converts to the affine model, one inversion.
            pub fn to_affine(&self) -> $affine {
                $affine::from(self)
            }

            pub fn is_identity(&self) -> Choice {
                self.z.is_zero()
            }

            /// Returns true if `r` times this point is the identity.
            pub fn is_torsion_free(&self) -> Choice {
                self.multiply(&SUBGROUP_ORDER.to_le_bytes()).is_identity()
            }

            pub fn is_on_curve(&self) -> Choice {
                // Y^2 Z = X^3 + b Z^3
                let z3 = self.z.square() * self.z;
                let rhs = self.x.square() * self.x + z3 * $b;
                (self.y.square() * self.z).ct_eq(&rhs) | self.z.is_zero()
            }

            /// Algorithm 8, `rhs` with `Z = 1`.
            pub(crate) fn addition_mixed(&self, rhs: &$affine) -> Self {
                let t0 = self.x * rhs.x;
                let t1 = self.y * rhs.y;
                let t3 = (rhs.x + rhs.y) * (self.x + self.y) - (t0 + t1);
                let t4 = rhs.y * self.z + self.y;
                let y3 = $mul_by_3b(rhs.x * self.z + self.x);
                let t0 = t0.double() + t0;
                let t2 = $mul_by_3b(self.z);
                let z3 = t1 + t2;
                let t1 = t1 - t2;

                let sum = Self {
                    x: t3 * t1 - t4 * y3,
                    y: t1 * z3 + y3 * t0,
                    z: z3 * t4 + t0 * t3,
                };
                Self::conditional_select(&sum, self, rhs.infinity)
            }

            /// Algorithm 7.
            pub(crate) fn addition(&self, rhs: &Self) -> Self {
                let t0 = self.x * rhs.x;
                let t1 = self.y * rhs.y;
                let t2 = self.z * rhs.z;
                let t3 = (self.x + self.y) * (rhs.x + rhs.y) - (t0 + t1);
                let t4 = (self.y + self.z) * (rhs.y + rhs.z) - (t1 + t2);
                let y3 = $mul_by_3b((self.x + self.z) * (rhs.x + rhs.z) - (t0 + t2));
                let t0 = t0.double() + t0;
                let t2 = $mul_by_3b(t2);
                let z3 = t1 + t2;
                let t1 = t1 - t2;

                Self {
                    x: t3 * t1 - t4 * y3,
                    y: t1 * z3 + y3 * t0,
                    z: z3 * t4 + t0 * t3,
                }
            }

            /// Algorithm 9.
            pub fn double(&self) -> Self {
                let t0 = self.y.square();
                let z3 = t0.double().double().double();
                let t2 = $mul_by_3b(self.z.square());
                let x3 = t2 * z3;
                let y3 = t0 + t2;
                let t0 = t0 - (t2.double() + t2);

                let doubled = Self {
                    x: (t0 * self.x * self.y).double(),
                    y: t0 * y3 + x3,
                    z: self.y * self.z * z3,
                };
                Self::conditional_select(&doubled, &Self::IDENTITY, self.is_identity())
            }

            /// Double-and-add over a little-endian integer, every bit processed.
            pub(crate) fn multiply(&self, by: &[u8]) -> Self {
                let bits = by
                    .iter()
                    .rev()
                    .flat_map(|byte| (0..8).rev().map(move |i| Choice::from((byte >> i) & 1u8)));

                let mut acc = Self::IDENTITY;
                for bit in bits {
                    acc = acc.double();
                    acc.conditional_assign(&(acc + self), bit);
                }
                acc
            }
        }
    };
}

/// Operators, equality and encodings shared by the extension fields. The
/// type provides `addition`, `subtract`, `multiply`, `negate`, `ct_eq`,
/// `to_repr`/`from_repr` and `BYTES`.
macro_rules! extension_field_impl {
    ($name:ident) => {
        impl DefaultIsZeroes for $name {}

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.addition(&rhs);
            }
        }

        ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = $name, RHS = $name, OUTPUT = $name);

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.subtract(&rhs);
            }
        }

        ops_impl!(Sub, sub, -, SubAssign, sub_assign, -=, LHS = $name, RHS = $name, OUTPUT = $name);

        impl MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.multiply(&rhs);
            }
        }

        ops_impl!(Mul, mul, *, MulAssign, mul_assign, *=, LHS = $name, RHS = $name, OUTPUT = $name);

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                self.negate()
            }
        }

        impl Neg for &$name {
            type Output = $name;

            fn neg(self) -> $name {
                self.negate()
            }
        }

        hex_impl!($name, $name::BYTES);

        bytes_impl!($name, |f: &$name| f.to_repr(), |bytes: &[u8]| {
            let repr = <[u8; $name::BYTES]>::try_from(bytes)
                .map_err(|_| PairingError::InvalidFieldBytes)?;
            Option::<$name>::from($name::from_repr(&repr)).ok_or(PairingError::InvalidFieldBytes)
        });

        serde_impl!(
            $name,
            |f: &$name| f.to_repr(),
            |bytes: &[u8; $name::BYTES]| {
                Option::<$name>::from($name::from_repr(bytes))
                    .ok_or(serde::de::Error::custom("Invalid bytes"))
            },
            $name::BYTES
        );
    };
}
