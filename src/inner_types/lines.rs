//! Line functions of the Miller loop.
//!
//! A line through two twist points evaluated at a $\mathbb{G}_1$ point has
//! three nonzero coefficients in $\mathbb{F}_{p^{12}}$, at `v`, `v w` and
//! `v^2 w`. The untwist `(x, y) -> (x w^2, y w^3)` of this tower maps them
//! there without any extra scaling.

use super::{Fp, Fp12, Fp2, G2Affine, G2Jacobian, G2Projective};

/// The sparse coefficients of one line evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEvaluation {
    /// The coefficient of `v`, scaled by `P.y`
    pub r0: Fp2,
    /// The coefficient of `v w`, scaled by `P.x`
    pub r1: Fp2,
    /// The coefficient of `v^2 w`
    pub r2: Fp2,
}

impl LineEvaluation {
    /// The line through `q` and `r`, both homogeneous, at `(px, py)`.
    fn through(q: &G2Projective, r: &G2Projective, px: &Fp, py: &Fp) -> Self {
        Self {
            r0: (q.z * r.x - q.x * r.z) * py,
            r1: (q.y * r.z - q.z * r.y) * px,
            r2: q.x * r.y - q.y * r.x,
        }
    }

    /// The line through two Jacobian points at `(px, py)`.
    pub fn evaluate_jacobian(q: &G2Jacobian, r: &G2Jacobian, px: &Fp, py: &Fp) -> Self {
        Self::through(&G2Projective::from(q), &G2Projective::from(r), px, py)
    }

    /// The line through a Jacobian point and an affine point at `(px, py)`.
    pub fn evaluate_affine(q: &G2Jacobian, r: &G2Affine, px: &Fp, py: &Fp) -> Self {
        let q = G2Projective::from(q);
        Self {
            r0: (q.z * r.x - q.x) * py,
            r1: (q.y - q.z * r.y) * px,
            r2: q.x * r.y - q.y * r.x,
        }
    }

    /// Multiplies `f` by this line.
    pub fn fold_into(&self, f: &Fp12) -> Fp12 {
        f.mul_by_v(&self.r0) + f.mul_by_vw(&self.r1) + f.mul_by_v2w(&self.r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner_types::{Fp6, G1Affine};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    /// `r1 x + r0 y + r2` for a line evaluated at `P = (1, 1)`
    fn line_at(line: &LineEvaluation, point: &G2Affine) -> Fp2 {
        line.r1 * point.x + line.r0 * point.y + line.r2
    }

    #[test]
    fn chord_vanishes_on_its_points() {
        let q = G2Affine::generator();
        let t = G2Jacobian::from(q).double();

        let line = LineEvaluation::evaluate_affine(&t, &q, &Fp::ONE, &Fp::ONE);
        assert!(bool::from(line_at(&line, &q).is_zero()));
        assert!(bool::from(line_at(&line, &t.to_affine()).is_zero()));

        let same = LineEvaluation::evaluate_jacobian(&t, &G2Jacobian::from(q), &Fp::ONE, &Fp::ONE);
        assert_eq!(same, line);
    }

    #[test]
    fn tangent_vanishes_on_double() {
        let q = G2Affine::generator();
        let t = G2Jacobian::from(q).add_mixed(&q).add_mixed(&q);
        let minus_2t = -t.double();

        let line = LineEvaluation::evaluate_jacobian(&t, &minus_2t, &Fp::ONE, &Fp::ONE);
        assert!(bool::from(line_at(&line, &t.to_affine()).is_zero()));
        assert!(bool::from(line_at(&line, &minus_2t.to_affine()).is_zero()));
        assert!(!bool::from(line_at(&line, &q).is_zero()));
    }

    #[test]
    fn base_point_scaling() {
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let t = G2Jacobian::from(q).double();

        let unit = LineEvaluation::evaluate_affine(&t, &q, &Fp::ONE, &Fp::ONE);
        let line = LineEvaluation::evaluate_affine(&t, &q, &p.x, &p.y);
        assert_eq!(line.r0, unit.r0 * p.y);
        assert_eq!(line.r1, unit.r1 * p.x);
        assert_eq!(line.r2, unit.r2);
    }

    #[test]
    fn sparse_fold() {
        let mut rng = ChaCha8Rng::from_seed([31u8; 32]);
        let f = Fp12::random(&mut rng);
        let line = LineEvaluation {
            r0: Fp2::random(&mut rng),
            r1: Fp2::random(&mut rng),
            r2: Fp2::random(&mut rng),
        };
        let dense = Fp12::new(
            Fp6::new(Fp2::ZERO, line.r0, Fp2::ZERO),
            Fp6::new(Fp2::ZERO, line.r1, line.r2),
        );
        assert_eq!(line.fold_into(&Fp12::ONE), dense);
        assert_eq!(line.fold_into(&f), f * dense);
    }
}
