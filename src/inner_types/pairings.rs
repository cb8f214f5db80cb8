use super::final_exp::final_exponentiation_fp12;
use super::miller::miller_loop_fp12;
use super::params::{PairingParams, SUBGROUP_ORDER};
use super::*;

use crate::PairingError;
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// The raw output of one or more Miller loops. Products are taken with `+`.
/// Two results only become comparable after final exponentiation.
///
/// The wrapped value is never zero.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        Self(Fp12::ONE)
    }
}

impl DefaultIsZeroes for MillerLoopResult {}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl AddAssign for MillerLoopResult {
    fn add_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = MillerLoopResult, RHS = MillerLoopResult, OUTPUT = MillerLoopResult);

impl<T: Borrow<MillerLoopResult>> Sum<T> for MillerLoopResult {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, item| acc + item.borrow())
    }
}

impl TryFrom<Fp12> for MillerLoopResult {
    type Error = PairingError;

    fn try_from(f: Fp12) -> Result<Self, Self::Error> {
        if bool::from(f.is_zero()) {
            Err(PairingError::ZeroElement)
        } else {
            Ok(Self(f))
        }
    }
}

impl From<MillerLoopResult> for Fp12 {
    fn from(value: MillerLoopResult) -> Self {
        value.0
    }
}

impl MillerLoopResult {
    /// Maps this result into $\mathbb{G}_T$ with the default BLS12-377 schedule.
    pub fn final_exponentiation(&self) -> Gt {
        self.final_exponentiation_with(&PairingParams::BLS12_377)
    }

    /// [`MillerLoopResult::final_exponentiation`] with an explicit schedule.
    pub fn final_exponentiation_with(&self, params: &PairingParams) -> Gt {
        Gt(final_exponentiation_fp12(params, &self.0)
            // We unwrap() because `MillerLoopResult` can only be constructed
            // by a function within this crate or a checked conversion, and we
            // uphold the invariant that the enclosed value is nonzero.
            .unwrap())
    }
}

/// An element of the order $r$ target group $\mathbb{G}_T \subset \mathbb{F}_{p^{12}}$.
///
/// The group law is the field product. It is spelled `+` like the curve
/// groups, and `*` is the same operation.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for Gt {}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

hex_impl!(Gt, Gt::BYTES);

impl AddAssign for Gt {
    fn add_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Neg for Gt {
    type Output = Gt;

    fn neg(self) -> Self::Output {
        Self(self.0.unitary_inverse())
    }
}

impl Neg for &Gt {
    type Output = Gt;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl SubAssign for Gt {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign for Gt {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

ops_impl!(Add, add, +, AddAssign, add_assign, +=, LHS = Gt, RHS = Gt, OUTPUT = Gt);
ops_impl!(Sub, sub, -, SubAssign, sub_assign, -=, LHS = Gt, RHS = Gt, OUTPUT = Gt);
ops_impl!(Mul, mul, *, MulAssign, mul_assign, *=, LHS = Gt, RHS = Gt, OUTPUT = Gt);

impl<T: Borrow<Gt>> Sum<T> for Gt {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, item| acc + item.borrow())
    }
}

impl From<Gt> for Fp12 {
    fn from(value: Gt) -> Self {
        value.0
    }
}

bytes_impl!(Gt, |g: &Gt| g.to_repr(), |bytes: &[u8]| {
    let repr = <[u8; Gt::BYTES]>::try_from(bytes).map_err(|_| PairingError::InvalidGtBytes)?;
    Option::<Gt>::from(Gt::from_repr(&repr)).ok_or(PairingError::InvalidGtBytes)
});

serde_impl!(
    Gt,
    |g: &Gt| g.to_repr(),
    |bytes: &[u8; Gt::BYTES]| {
        Option::<Gt>::from(Gt::from_repr(bytes)).ok_or(serde::de::Error::custom("Invalid bytes"))
    },
    Gt::BYTES
);

impl Gt {
    pub const IDENTITY: Self = Self(Fp12::ONE);

    pub const BYTES: usize = Fp12::BYTES;

    /// `pairing(G1Affine::generator(), G2Affine::generator())`
    const GENERATOR: Self = Self(Fp12 {
        c0: Fp6 {
            c0: Fp2::new(
                Fp::from_be_hex("00b718ff624a95f189bfb44bcd6d6556226837c1f74d1afbf4bea573b71c17d3a243cae41d966e2164aad0991fd790cc"),
                Fp::from_be_hex("0197261459eb50c526a28ebbdbd4b5b33d4c55b759d8c926289c96e4ea032783da4f1994ed09ee68fd791367c8b54d87"),
            ),
            c1: Fp2::new(
                Fp::from_be_hex("00756970de5e545d91121e151ce96c26ad820ebe4ffbc9dee234351401925eaa4193e377135ced4d3845057c0c39ecd6"),
                Fp::from_be_hex("00373f07857759dbec3d57af8bfdc79d28f44db5103e523e28ea69c688af7c831e726417cb5123530fadb5540ac05763"),
            ),
            c2: Fp2::new(
                Fp::from_be_hex("00ec2d5430932820eb74bd698a2d919cf7086335f235019815501b97fd833d90f07eb111885af785beb343ea1db8d4e7"),
                Fp::from_be_hex("0051ae2dce91bcd2251abbaf8dfb67c7e5cf6d864c61f81a09aaeac3dfdcf6ae0b3168929ccc7d91abb8b4e13974b7db"),
            ),
        },
        c1: Fp6 {
            c0: Fp2::new(
                Fp::from_be_hex("0095fcebb2a29b10d2f5283a40b147a82ea62114c9bae68e0d745c1afc70c6eeaf1b1c5bf6352d82931b6bdcbff8da47"),
                Fp::from_be_hex("001fdad7541653e8ac2d735c24f472716122bb24a3e675c20ab2c23d7380c7a349d49dd0db11f95c08861744e3b19a8e"),
            ),
            c1: Fp2::new(
                Fp::from_be_hex("00b3530a66bf5754b3e0b7b2c070a35c072bb613698c32db836cef1fcb77086125efd02528d4235f7d7b87e554174d82"),
                Fp::from_be_hex("004064943ac5c2fc0ef854d8168c67f56adb2a5a16d900dba15be3ecb0172a9ecd96ebf6375d0262f5d43d0709dc8c5f"),
            ),
            c2: Fp2::new(
                Fp::from_be_hex("0066910d06a91685179f1b448b9b198d5ed2eabc44d21580005e5f708a3c7858eb9b921691e40ba25804aced41190d34"),
                Fp::from_be_hex("0008f3e3e451ff584f864ca1d53fc34562f2ebf3baa7c610d8a3b51a7fa9e8dfaac34399e40540e3bc57a73d11924c03"),
            ),
        },
    });

    /// The pairing of the two group generators
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    /// A random element, obtained by final exponentiation of a random nonzero element.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let inner = Fp12::random(&mut rng);

            // final exponentiation maps any nonzero element into the subgroup
            if !bool::from(inner.is_zero()) {
                return MillerLoopResult(inner).final_exponentiation();
            }
        }
    }

    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    pub fn double(&self) -> Self {
        Self(self.0.cyclotomic_square())
    }

    pub fn invert(&self) -> Self {
        -self
    }

    /// Returns true if this element lies in the order $r$ subgroup.
    pub fn is_torsion_free(&self) -> Choice {
        !self.0.is_zero() & self.0.pow_vartime(SUBGROUP_ORDER.to_words()).is_one()
    }

    /// The coefficients, see [`Fp12::to_repr`].
    pub fn to_repr(&self) -> [u8; Self::BYTES] {
        self.0.to_repr()
    }

    /// Decodes twelve base field elements, rejecting anything outside $\mathbb{G}_T$.
    pub fn from_repr(bytes: &[u8; Self::BYTES]) -> CtOption<Self> {
        Fp12::from_repr(bytes).and_then(|f| {
            let g = Self(f);
            CtOption::new(g, g.is_torsion_free())
        })
    }

    /// `self` raised to little-endian limbs in constant time for a fixed limb count.
    pub fn pow(&self, exp: &[u64]) -> Self {
        let mut acc = Self::IDENTITY;

        // one square and one select per bit, whatever the bit
        for bit in exp
            .iter()
            .rev()
            .flat_map(|limb| (0..64).rev().map(move |i| Choice::from(((limb >> i) & 1) as u8)))
        {
            acc = acc.double();
            acc.conditional_assign(&(acc + self), bit);
        }
        acc
    }

    /// `self` raised to little-endian limbs. Not constant time.
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        Self(self.0.cyclotomic_pow_vartime(exp))
    }
}

/// Computes $e(p, q)$.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    pairing_with(&PairingParams::BLS12_377, p, q)
}

/// Computes $e(p, q)$ under the given curve parameters.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn pairing_with(params: &PairingParams, p: &G1Affine, q: &G2Affine) -> Gt {
    miller_loop_with(params, p, q).final_exponentiation_with(params)
}

/// The Miller loop of $e(p, q)$ without final exponentiation.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> MillerLoopResult {
    miller_loop_with(&PairingParams::BLS12_377, p, q)
}

/// [`miller_loop`] under the given curve parameters.
pub fn miller_loop_with(params: &PairingParams, p: &G1Affine, q: &G2Affine) -> MillerLoopResult {
    MillerLoopResult(miller_loop_fp12(params, p, q))
}

/// Final exponentiation of the product of `first` and every element of `rest`.
pub fn final_exponentiation(first: &MillerLoopResult, rest: &[MillerLoopResult]) -> Gt {
    (*first + rest.iter().sum::<MillerLoopResult>()).final_exponentiation()
}

/// Final exponentiation of the product of `results`. Empty input gives the identity.
pub fn final_exponentiation_with(params: &PairingParams, results: &[MillerLoopResult]) -> Gt {
    results
        .iter()
        .sum::<MillerLoopResult>()
        .final_exponentiation_with(params)
}

/// Computes $\sum_{i=1}^n \textbf{ML}(a_i, b_i)$ given a series of terms
/// $(a_1, b_1), (a_2, b_2), ..., (a_n, b_n).$
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Affine)]) -> MillerLoopResult {
    multi_miller_loop_with(&PairingParams::BLS12_377, terms)
}

/// [`multi_miller_loop`] under the given curve parameters.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(terms = terms.len())))]
pub fn multi_miller_loop_with(
    params: &PairingParams,
    terms: &[(&G1Affine, &G2Affine)],
) -> MillerLoopResult {
    #[cfg(feature = "parallel")]
    {
        terms
            .par_iter()
            .map(|(p, q)| miller_loop_with(params, p, q))
            .reduce(MillerLoopResult::default, |a, b| a + b)
    }
    #[cfg(not(feature = "parallel"))]
    {
        terms
            .iter()
            .map(|(p, q)| miller_loop_with(params, p, q))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    /// `3 (p^12 - 1) / r mod r`
    const FINAL_EXPONENT_MOD_R: [u64; 4] = [
        0x913f_7fff_ffff_ffe9,
        0x0212_8f6f_2fff_fff4,
        0xb197_65c3_4790_9ff6,
        0x12ab_655e_9a2c_a554,
    ];

    fn g1_mul(k: u64) -> G1Affine {
        G1Projective::generator()
            .multiply(&k.to_le_bytes())
            .to_affine()
    }

    fn g2_mul(k: u64) -> G2Affine {
        G2Projective::generator()
            .multiply(&k.to_le_bytes())
            .to_affine()
    }

    fn product(a: u64, b: u64) -> [u64; 2] {
        let ab = (a as u128) * (b as u128);
        [ab as u64, (ab >> 64) as u64]
    }

    #[test]
    fn known_answer() {
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let gt = pairing(&g1, &g2);
        assert_eq!(gt, Gt::generator());
        assert_eq!(gt.pow_vartime(&SUBGROUP_ORDER.to_words()), Gt::IDENTITY);
        assert_eq!(gt.pow(&SUBGROUP_ORDER.to_words()), Gt::IDENTITY);
        assert_eq!(gt.is_torsion_free().unwrap_u8(), 1);
    }

    #[test]
    fn known_answer_from_strings() {
        let coefficients = [
            "00b718ff624a95f189bfb44bcd6d6556226837c1f74d1afbf4bea573b71c17d3a243cae41d966e2164aad0991fd790cc",
            "0197261459eb50c526a28ebbdbd4b5b33d4c55b759d8c926289c96e4ea032783da4f1994ed09ee68fd791367c8b54d87",
            "00756970de5e545d91121e151ce96c26ad820ebe4ffbc9dee234351401925eaa4193e377135ced4d3845057c0c39ecd6",
            "00373f07857759dbec3d57af8bfdc79d28f44db5103e523e28ea69c688af7c831e726417cb5123530fadb5540ac05763",
            "00ec2d5430932820eb74bd698a2d919cf7086335f235019815501b97fd833d90f07eb111885af785beb343ea1db8d4e7",
            "0051ae2dce91bcd2251abbaf8dfb67c7e5cf6d864c61f81a09aaeac3dfdcf6ae0b3168929ccc7d91abb8b4e13974b7db",
            "0095fcebb2a29b10d2f5283a40b147a82ea62114c9bae68e0d745c1afc70c6eeaf1b1c5bf6352d82931b6bdcbff8da47",
            "001fdad7541653e8ac2d735c24f472716122bb24a3e675c20ab2c23d7380c7a349d49dd0db11f95c08861744e3b19a8e",
            "00b3530a66bf5754b3e0b7b2c070a35c072bb613698c32db836cef1fcb77086125efd02528d4235f7d7b87e554174d82",
            "004064943ac5c2fc0ef854d8168c67f56adb2a5a16d900dba15be3ecb0172a9ecd96ebf6375d0262f5d43d0709dc8c5f",
            "0066910d06a91685179f1b448b9b198d5ed2eabc44d21580005e5f708a3c7858eb9b921691e40ba25804aced41190d34",
            "0008f3e3e451ff584f864ca1d53fc34562f2ebf3baa7c610d8a3b51a7fa9e8dfaac34399e40540e3bc57a73d11924c03",
        ];
        let f = Fp12::from_str_coefficients(coefficients).unwrap();
        assert_eq!(f, Gt::generator().0);
    }

    #[test]
    fn dual_counter_known_answer() {
        let coefficients = [
            "00dffc3b477beee8870d964cf9950267b82e7ee8e851126793cfefcf4794b11dc739048a96df539ef78e72add3f38dd7",
            "00362ffd616627f9488b35a00a76edfbe825352a2893afefdb643eeb68d37d59b0976aa7eab9cd93203b2ab797567bf7",
            "00f257cf0d726746507484f5420d8729dd1b10305012fbafcbd0163ede2a98871aa5cde91d82294d3f91f49dead8a166",
            "0090d3657047997d0b517efb23ea99ecfefeb718d14620799b2b7ce7b793e3734ad8796c71951b854597b9a2c9b1fc67",
            "0052f35c54dc56795005dccc3e90f346ef6491a4f473cee0f22c3c39598e2d3a45f8370bf4b38821858304747d8f2c80",
            "00ff03979d8c33faccbad8404913b30b8f41ba613364ee6da639e93ff0810ce760c0389f21c274337fb619828f6a23fe",
            "0127039646432a9cf9c4ee5e7d363ed0eb75053526b4395d172301a57d8f0250e5f3450562b40989b06c518a5d55b12c",
            "007121c4d694219e35cb39bdc1bdd5cb3c5ebc84d3a49a22af7767c1818689724719d3e8c632465677005fcf40880798",
            "012840e64354f7c7702771b767a48b11b51c9d854a0dead0b567530f3150586761e686e4f3b60194bac9e150587a9b95",
            "0144a9159af358b9e09def962fec262e5396916c92462633ce078705eef4b749900d3cfcb6a6973417a83bb3bf74074f",
            "006f8ff28f04986fc5af0b03c4ea13c4c7c49a80946421d8153cc136562b57d63e559f4087df6dc9c6de35ee3ae74ccf",
            "0087538941ac5c35b4d5ca883f0023f08521d818ade37a63d84d03705d0838623bef9b851485b5e5e7159829493ac6d3",
        ];
        let expected = Fp12::from_str_coefficients(coefficients).unwrap();
        let params = PairingParams::BLS12_377_DUAL;
        let gt = pairing_with(&params, &G1Affine::generator(), &G2Affine::generator());
        assert_eq!(gt.0, expected);
        // a different pairing from the default one, even on the generators
        assert_ne!(gt, Gt::generator());
        assert_ne!(
            gt,
            pairing(&G1Affine::generator(), &G2Affine::generator())
        );
    }

    #[test]
    fn bilinearity() {
        let mut rng = ChaCha8Rng::from_seed([61u8; 32]);
        let a = rng.next_u64();
        let b = rng.next_u64();
        let base = Gt::generator();
        let expected = base.pow_vartime(&product(a, b));

        assert_eq!(pairing(&g1_mul(a), &g2_mul(b)), expected);
        assert_eq!(pairing(&G1Affine::generator(), &g2_mul(b)), base.pow_vartime(&[b]));
        assert_eq!(pairing(&g1_mul(a), &G2Affine::generator()), base.pow(&[a]));
    }

    #[test]
    fn dual_counter_bilinearity() {
        let params = PairingParams::BLS12_377_DUAL;
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let base = pairing_with(&params, &g1, &g2);
        assert_ne!(base, Gt::IDENTITY);
        assert_eq!(base.is_torsion_free().unwrap_u8(), 1);

        assert_eq!(pairing_with(&params, &g1_mul(5), &g2), base.pow_vartime(&[5]));
        assert_eq!(pairing_with(&params, &g1, &g2_mul(7)), base.pow_vartime(&[7]));
        assert_eq!(
            pairing_with(&params, &g1_mul(3), &g2_mul(11)),
            base.pow_vartime(&[33])
        );
    }

    #[test]
    fn identity_and_inverse() {
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        assert_eq!(pairing(&G1Affine::identity(), &g2), Gt::IDENTITY);
        assert_eq!(pairing(&g1, &G2Affine::identity()), Gt::IDENTITY);
        assert!(bool::from(pairing(&g1, &G2Affine::identity()).is_identity()));

        let e = pairing(&g1, &g2);
        assert_ne!(e, Gt::IDENTITY);
        assert_eq!(e + -e, Gt::IDENTITY);
        assert_eq!(e * e.invert(), Gt::IDENTITY);
        assert_eq!(e - e, Gt::IDENTITY);
        assert_eq!(pairing(&-g1, &g2), -e);
        assert_eq!(pairing(&g1, &-g2), -e);
        assert_eq!(e.double(), e + e);
        assert_eq!(e.double(), e * e);
    }

    #[test]
    fn final_exponentiation_of_gt() {
        let mut rng = ChaCha8Rng::from_seed([62u8; 32]);
        let e = Gt::random(&mut rng);
        let raw = MillerLoopResult::try_from(e.0).unwrap();
        assert_eq!(
            raw.final_exponentiation(),
            e.pow_vartime(&FINAL_EXPONENT_MOD_R)
        );
        assert_eq!(
            MillerLoopResult::try_from(Fp12::ZERO).unwrap_err(),
            PairingError::ZeroElement
        );
    }

    #[test]
    fn batched() {
        let terms_g1 = [g1_mul(2), g1_mul(3), g1_mul(5)];
        let terms_g2 = [g2_mul(7), g2_mul(11), G2Affine::generator()];
        let terms = [
            (&terms_g1[0], &terms_g2[0]),
            (&terms_g1[1], &terms_g2[1]),
            (&terms_g1[2], &terms_g2[2]),
        ];

        let expected = terms
            .iter()
            .map(|(p, q)| pairing(p, q))
            .sum::<Gt>();
        assert_eq!(expected, Gt::generator().pow_vartime(&[14 + 33 + 5]));
        assert_eq!(multi_miller_loop(&terms).final_exponentiation(), expected);

        let loops = terms
            .iter()
            .map(|(p, q)| miller_loop(p, q))
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(final_exponentiation(&loops[0], &loops[1..]), expected);
        assert_eq!(
            final_exponentiation_with(&PairingParams::BLS12_377, &loops),
            expected
        );
        assert_eq!(
            final_exponentiation_with(&PairingParams::BLS12_377, &[]),
            Gt::IDENTITY
        );

        // e(2 G1, 3 G2) e(-6 G1, G2) = 1
        let p = g1_mul(2);
        let q = g2_mul(3);
        let neg = -g1_mul(6);
        let g2 = G2Affine::generator();
        assert_eq!(
            multi_miller_loop(&[(&p, &q), (&neg, &g2)]).final_exponentiation(),
            Gt::IDENTITY
        );
    }

    #[test]
    fn serialization() {
        let mut rng = ChaCha8Rng::from_seed([63u8; 32]);
        let e = Gt::random(&mut rng);

        let bytes = e.to_repr();
        assert_eq!(Gt::from_repr(&bytes).unwrap(), e);
        assert_eq!(Gt::try_from(&bytes[..]).unwrap(), e);
        assert_eq!(
            Gt::try_from(&bytes[1..]).unwrap_err(),
            PairingError::InvalidGtBytes
        );

        let s = e.to_string();
        assert_eq!(s.parse::<Gt>().unwrap(), e);

        let json = serde_json::to_string(&e).unwrap();
        let back: Gt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);

        // a unitary element outside the order r subgroup
        let f = Fp12::random(&mut rng);
        let t = f.conjugate() * f.invert().unwrap();
        let m = t.frobenius_square() * t;
        assert!(bool::from(Gt::from_repr(&m.to_repr()).is_none()));
        assert!(bool::from(Gt::from_repr(&Fp12::ZERO.to_repr()).is_none()));
    }
}
