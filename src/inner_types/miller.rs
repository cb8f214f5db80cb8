//! The optimal ate Miller loop.

use super::lines::LineEvaluation;
use super::params::{LoopCounter, LoopCounters, PairingParams};
use super::{Fp, Fp12, G1Affine, G2Affine, G2Jacobian};

/// One double-and-add walk over `counter`, from its second most significant
/// digit down. `carry` holds a previous result and its conjugate, multiplied
/// in on nonzero digits.
fn pass(
    counter: &LoopCounter,
    mut f: Fp12,
    mut t: G2Jacobian,
    base: &G2Affine,
    px: &Fp,
    py: &Fp,
    carry: Option<(&Fp12, &Fp12)>,
) -> (Fp12, G2Jacobian) {
    let neg_base = -base;
    let len = counter.digits.len();

    for digit in counter.digits[..len.saturating_sub(1)].iter().rev() {
        let mut next = t.double();
        f = f.square();
        // tangent at t, the line through t and -2t
        f = LineEvaluation::evaluate_jacobian(&t, &-next, px, py).fold_into(&f);

        let (addend, factor) = match *digit {
            1 => (base, carry.map(|(c, _)| c)),
            -1 => (&neg_base, carry.map(|(_, c)| c)),
            _ => {
                t = next;
                continue;
            }
        };
        f = LineEvaluation::evaluate_affine(&next, addend, px, py).fold_into(&f);
        if let Some(c) = factor {
            f *= c;
        }
        next = next.add_mixed(addend);
        t = next;
    }

    if counter.negative {
        (f.conjugate(), -t)
    } else {
        (f, t)
    }
}

/// The Miller loop of `p` and `q` before final exponentiation.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub(crate) fn miller_loop_fp12(params: &PairingParams, p: &G1Affine, q: &G2Affine) -> Fp12 {
    if bool::from(p.is_identity() | q.is_identity()) {
        #[cfg(feature = "tracing")]
        tracing::debug!("identity input, skipping the loop");
        return Fp12::ONE;
    }
    let (px, py) = (&p.x, &p.y);

    match &params.loop_counters {
        LoopCounters::Single(counter) => {
            pass(counter, Fp12::ONE, G2Jacobian::from(q), q, px, py, None).0
        }
        LoopCounters::Dual(first, second) => {
            let (f1, t) = pass(first, Fp12::ONE, G2Jacobian::from(q), q, px, py, None);
            let f1_conj = f1.unitary_inverse();
            let f1_line = LineEvaluation::evaluate_affine(&t, q, px, py).fold_into(&f1);
            let q1 = t.to_affine();

            let (f, _) = pass(second, f1, t, &q1, px, py, Some((&f1, &f1_conj)));
            f.frobenius() * f1_line
        }
    }
}
