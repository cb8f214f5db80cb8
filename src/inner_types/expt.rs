//! Raising to the fixed curve parameter.

use super::params::{AdditionChain, ChainStep, ExptParams, MAX_CHAIN_SLOTS};
use super::Fp12;

/// Interprets `chain` starting from `base`.
fn run_chain(base: &Fp12, chain: &AdditionChain, square: fn(&Fp12) -> Fp12) -> Fp12 {
    let mut acc = *base;
    let mut saved = [Fp12::ONE; MAX_CHAIN_SLOTS];
    let mut used = 0;
    for step in chain.steps() {
        match *step {
            ChainStep::Square(n) => {
                for _ in 0..n {
                    acc = square(&acc);
                }
            }
            ChainStep::MulBase => acc *= base,
            // slot bounds and saved reads are checked when the chain is built
            ChainStep::Save => {
                saved[used] = acc;
                used += 1;
            }
            ChainStep::MulSaved(i) => acc *= saved[i],
        }
    }
    acc
}

impl Fp12 {
    /// Raises this element to the fixed exponent of `params`.
    #[cfg(test)]
    pub(crate) fn expt(&self, params: &ExptParams) -> Self {
        match params.chain() {
            Some(chain) => run_chain(self, chain, Self::square),
            None => self.pow_vartime(params.exponent()),
        }
    }

    /// Raises this element to the fixed exponent of `params` with cyclotomic
    /// squarings, only valid for elements of norm one.
    pub fn cyclotomic_expt(&self, params: &ExptParams) -> Self {
        match params.chain() {
            Some(chain) => run_chain(self, chain, Self::cyclotomic_square),
            None => self.cyclotomic_pow_vartime(params.exponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner_types::params::{PairingParams, BLS12_377_EXPT_CHAIN, BLS_X};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn chain_matches_square_and_multiply() {
        let mut rng = ChaCha8Rng::from_seed([41u8; 32]);
        let params = PairingParams::BLS12_377.expt;
        let generic = PairingParams::BLS12_377_GENERIC_EXPT.expt;

        let a = Fp12::random(&mut rng);
        let expected = a.pow_vartime([BLS_X]);
        assert_eq!(a.expt(&params), expected);
        assert_eq!(a.expt(&generic), expected);
    }

    #[test]
    fn cyclotomic_chain() {
        let mut rng = ChaCha8Rng::from_seed([42u8; 32]);
        let params = PairingParams::BLS12_377.expt;

        let f = Fp12::random(&mut rng);
        let t = f.conjugate() * f.invert().unwrap();
        let m = t.frobenius_square() * t;

        let expected = m.pow_vartime([BLS_X]);
        assert_eq!(m.cyclotomic_expt(&params), expected);
        assert_eq!(m.expt(&params), expected);
        assert_eq!(
            m.cyclotomic_expt(&PairingParams::BLS12_377_GENERIC_EXPT.expt),
            expected
        );
    }

    #[test]
    fn saved_values() {
        use ChainStep::*;
        const CHAIN: AdditionChain =
            AdditionChain::new(7, &[Save, Square(1), MulBase, Square(1), MulSaved(0)]);
        const FIVE: AdditionChain = AdditionChain::new(5, &[Save, Square(2), MulSaved(0)]);

        let mut rng = ChaCha8Rng::from_seed([43u8; 32]);
        let a = Fp12::random(&mut rng);
        let params = ExptParams::new(&[7], Some(CHAIN));
        assert_eq!(a.expt(&params), a.pow_vartime([7u64]));
        let params = ExptParams::new(&[5], Some(FIVE));
        assert_eq!(a.expt(&params), a.pow_vartime([5u64]));
    }

    #[test]
    fn unchecked_chains_never_run() {
        use ChainStep::*;
        // reading slot 1 after a single save would otherwise give a^4
        assert!(AdditionChain::try_new(5, &[Save, Square(2), MulSaved(1)]).is_none());
        assert!(AdditionChain::try_new(1, &[Save, Save, Save, Save, Save]).is_none());
        assert!(ExptParams::try_new(&[7], Some(BLS12_377_EXPT_CHAIN)).is_none());

        let mut rng = ChaCha8Rng::from_seed([44u8; 32]);
        let a = Fp12::random(&mut rng);
        let params = ExptParams::new(&[7], None);
        assert_eq!(a.expt(&params), a.pow_vartime([7u64]));
    }
}
