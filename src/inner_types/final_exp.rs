//! Final exponentiation by `(p^12 - 1) / r`, up to the factor 3 the hard part
//! schedule carries.

use super::params::{HardPartStep, PairingParams, Slot};
use super::Fp12;
use subtle::CtOption;

/// `f^((p^6 - 1)(p^2 + 1))`, `None` only for zero.
pub(crate) fn easy_part(f: &Fp12) -> CtOption<Fp12> {
    f.invert().map(|inv| {
        let t = f.conjugate() * inv;
        t.frobenius_square() * t
    })
}

/// Runs the hard part schedule of `params` on the easy part output `m`.
pub(crate) fn hard_part(params: &PairingParams, m: &Fp12) -> Fp12 {
    let mut slots = [Fp12::ONE; Slot::COUNT];
    slots[Slot::F as usize] = *m;

    for step in params.hard_part {
        match *step {
            HardPartStep::CyclotomicSquare { src, dst } => {
                slots[dst as usize] = slots[src as usize].cyclotomic_square()
            }
            HardPartStep::Expt { src, dst } => {
                slots[dst as usize] = slots[src as usize].cyclotomic_expt(&params.expt)
            }
            HardPartStep::Conjugate { src, dst } => {
                slots[dst as usize] = slots[src as usize].unitary_inverse()
            }
            HardPartStep::Frobenius { src, dst } => {
                slots[dst as usize] = slots[src as usize].frobenius()
            }
            HardPartStep::FrobeniusSquare { src, dst } => {
                slots[dst as usize] = slots[src as usize].frobenius_square()
            }
            HardPartStep::FrobeniusCube { src, dst } => {
                slots[dst as usize] = slots[src as usize].frobenius_cube()
            }
            HardPartStep::Mul { lhs, rhs, dst } => {
                slots[dst as usize] = slots[lhs as usize] * slots[rhs as usize]
            }
        }
    }

    slots[Slot::F as usize]
}

/// Both parts over the product of `f`, `None` only when the product is zero.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub(crate) fn final_exponentiation_fp12(params: &PairingParams, f: &Fp12) -> CtOption<Fp12> {
    easy_part(f).map(|m| hard_part(params, &m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner_types::params::SUBGROUP_ORDER;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn easy_part_is_unitary() {
        let mut rng = ChaCha8Rng::from_seed([51u8; 32]);
        let f = Fp12::random(&mut rng);
        let m = easy_part(&f).unwrap();
        assert_eq!(m * m.conjugate(), Fp12::ONE);
        assert_eq!(m.cyclotomic_square(), m.square());
        assert!(bool::from(easy_part(&Fp12::ZERO).is_none()));
    }

    #[test]
    fn lands_in_the_order_r_subgroup() {
        let mut rng = ChaCha8Rng::from_seed([52u8; 32]);
        let params = PairingParams::BLS12_377;
        let f = Fp12::random(&mut rng);
        let g = final_exponentiation_fp12(&params, &f).unwrap();
        assert_ne!(g, Fp12::ONE);
        assert_eq!(g.pow_vartime(SUBGROUP_ORDER.to_words()), Fp12::ONE);

        let generic = final_exponentiation_fp12(&PairingParams::BLS12_377_GENERIC_EXPT, &f);
        assert_eq!(generic.unwrap(), g);
    }

    #[test]
    fn multiplicative() {
        let mut rng = ChaCha8Rng::from_seed([53u8; 32]);
        let params = PairingParams::BLS12_377;
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);
        let fa = final_exponentiation_fp12(&params, &a).unwrap();
        let fb = final_exponentiation_fp12(&params, &b).unwrap();
        let fab = final_exponentiation_fp12(&params, &(a * b)).unwrap();
        assert_eq!(fa * fb, fab);
        assert!(bool::from(
            final_exponentiation_fp12(&params, &Fp12::ZERO).is_none()
        ));
    }

    #[test]
    fn custom_schedule() {
        use HardPartStep::*;
        const SCHEDULE: &[HardPartStep] = &[
            FrobeniusCube {
                src: Slot::F,
                dst: Slot::T2,
            },
            Mul {
                lhs: Slot::F,
                rhs: Slot::T2,
                dst: Slot::F,
            },
        ];
        let params = PairingParams {
            hard_part: SCHEDULE,
            ..PairingParams::BLS12_377
        };

        let mut rng = ChaCha8Rng::from_seed([54u8; 32]);
        let m = easy_part(&Fp12::random(&mut rng)).unwrap();
        assert_eq!(hard_part(&params, &m), m * m.frobenius_cube());
        assert_eq!(
            m.frobenius_cube(),
            m.frobenius().frobenius_square()
        );
    }
}
