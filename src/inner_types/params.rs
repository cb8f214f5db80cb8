//! Per-curve pairing configuration.
//!
//! Everything here is `const` data. The Miller loop, the Expt engine and the
//! final exponentiation interpret it, so another curve of the same family
//! only supplies new tables.

use crypto_bigint::U256;

/// The BLS12-377 curve parameter `x`
pub const BLS_X: u64 = 0x8508_c000_0000_0001;

/// The prime order `r` of $\mathbb{G}_1$, $\mathbb{G}_2$ and $\mathbb{G}_T$
pub const SUBGROUP_ORDER: U256 =
    U256::from_be_hex("12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001");

const BLS_X_SQUARED: u128 = (BLS_X as u128) * (BLS_X as u128);

const fn naf_len(mut k: u128) -> usize {
    let mut len = 0;
    while k > 0 {
        if k & 3 == 3 {
            k += 1;
        } else if k & 1 == 1 {
            k -= 1;
        }
        k >>= 1;
        len += 1;
    }
    len
}

/// Non-adjacent form, least significant digit first.
const fn naf<const N: usize>(mut k: u128) -> [i8; N] {
    let mut digits = [0i8; N];
    let mut i = 0;
    while k > 0 {
        if k & 3 == 3 {
            digits[i] = -1;
            k += 1;
        } else if k & 1 == 1 {
            digits[i] = 1;
            k -= 1;
        }
        k >>= 1;
        i += 1;
    }
    digits
}

const X_NAF_LEN: usize = naf_len(BLS_X as u128);
const X_NAF: [i8; X_NAF_LEN] = naf::<X_NAF_LEN>(BLS_X as u128);
const X_SQUARED_NAF_LEN: usize = naf_len(BLS_X_SQUARED);
const X_SQUARED_NAF: [i8; X_SQUARED_NAF_LEN] = naf::<X_SQUARED_NAF_LEN>(BLS_X_SQUARED);

/// A signed Miller loop counter in non-adjacent form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoopCounter {
    /// Digits in `{-1, 0, 1}`, least significant first. The last digit is nonzero.
    pub digits: &'static [i8],
    /// The counter is the negation of the digit value.
    pub negative: bool,
}

impl LoopCounter {
    /// The signed integer these digits encode, if it fits.
    pub fn value(&self) -> Option<i128> {
        let mut acc = 0i128;
        for d in self.digits.iter().rev() {
            acc = acc.checked_mul(2)?.checked_add(*d as i128)?;
        }
        Some(if self.negative { -acc } else { acc })
    }
}

/// The counters driving the Miller loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopCounters {
    /// One pass over the counter.
    Single(LoopCounter),
    /// Two passes, the second one seeded by the first and finished with a Frobenius.
    Dual(LoopCounter, LoopCounter),
}

/// One step of a fixed exponent addition chain over a multiplicative accumulator
/// that starts out as the base.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChainStep {
    /// Square the accumulator this many times
    Square(u32),
    /// Multiply the accumulator by the base
    MulBase,
    /// Remember the accumulator in the next free slot
    Save,
    /// Multiply the accumulator by a remembered value
    MulSaved(usize),
}

/// A fixed exponent together with an addition chain computing it.
///
/// Only built through [`AdditionChain::new`] or [`AdditionChain::try_new`],
/// so the steps always compute the exponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdditionChain {
    exponent: u64,
    steps: &'static [ChainStep],
}

/// The most values an [`AdditionChain`] may remember.
pub const MAX_CHAIN_SLOTS: usize = 4;

/// Runs `steps` over integers. `None` when a step reads a slot that was never
/// saved, saves past [`MAX_CHAIN_SLOTS`] or overflows.
const fn evaluate_steps(steps: &[ChainStep]) -> Option<u128> {
    let mut acc = 1u128;
    let mut saved = [0u128; MAX_CHAIN_SLOTS];
    let mut used = 0;
    let mut i = 0;
    while i < steps.len() {
        match steps[i] {
            ChainStep::Square(n) => {
                let mut j = 0;
                while j < n {
                    acc = match acc.checked_mul(2) {
                        Some(v) => v,
                        None => return None,
                    };
                    j += 1;
                }
            }
            ChainStep::MulBase => {
                acc = match acc.checked_add(1) {
                    Some(v) => v,
                    None => return None,
                };
            }
            ChainStep::Save => {
                if used == MAX_CHAIN_SLOTS {
                    return None;
                }
                saved[used] = acc;
                used += 1;
            }
            ChainStep::MulSaved(slot) => {
                if slot >= used {
                    return None;
                }
                acc = match acc.checked_add(saved[slot]) {
                    Some(v) => v,
                    None => return None,
                };
            }
        }
        i += 1;
    }
    Some(acc)
}

impl AdditionChain {
    /// Panics unless `steps` compute `exponent`. For constants the check
    /// happens at compile time.
    pub const fn new(exponent: u64, steps: &'static [ChainStep]) -> Self {
        match Self::try_new(exponent, steps) {
            Some(chain) => chain,
            None => panic!("addition chain does not compute its exponent"),
        }
    }

    /// `None` unless `steps` compute `exponent`.
    pub const fn try_new(exponent: u64, steps: &'static [ChainStep]) -> Option<Self> {
        match evaluate_steps(steps) {
            Some(e) if e == exponent as u128 => Some(Self { exponent, steps }),
            _ => None,
        }
    }

    pub const fn exponent(&self) -> u64 {
        self.exponent
    }

    pub const fn steps(&self) -> &'static [ChainStep] {
        self.steps
    }

    /// Runs the chain over integers, returning the exponent it computes.
    pub const fn evaluate(&self) -> Option<u128> {
        evaluate_steps(self.steps)
    }
}

/// Storage slots of the hard part evaluator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Holds the easy part output on entry and the result on exit
    F = 0,
    T0 = 1,
    T1 = 2,
    T2 = 3,
}

impl Slot {
    pub const COUNT: usize = 4;
}

/// A single operation of the final exponentiation hard part.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HardPartStep {
    CyclotomicSquare { src: Slot, dst: Slot },
    Expt { src: Slot, dst: Slot },
    Conjugate { src: Slot, dst: Slot },
    Frobenius { src: Slot, dst: Slot },
    FrobeniusSquare { src: Slot, dst: Slot },
    FrobeniusCube { src: Slot, dst: Slot },
    Mul { lhs: Slot, rhs: Slot, dst: Slot },
}

/// Raises to `x = 0x8508c00000000001` through `136227 = 0b100001010000100011`.
pub const BLS12_377_EXPT_CHAIN: AdditionChain = AdditionChain::new(
    BLS_X,
    &[
        ChainStep::Square(5),
        ChainStep::MulBase,
        ChainStep::Save,
        ChainStep::Square(7),
        ChainStep::MulSaved(0),
        ChainStep::Square(4),
        ChainStep::MulBase,
        ChainStep::Square(1),
        ChainStep::MulBase,
        ChainStep::Square(46),
        ChainStep::MulBase,
    ],
);

/// Computes `m^(3 Φ12(p) / r)` for BLS12 curves with positive `x`,
/// Hayashida, Hayasaka and Teruya, https://eprint.iacr.org/2020/875.pdf
pub const BLS12_HARD_PART: &[HardPartStep] = {
    use HardPartStep::*;
    use Slot::*;
    &[
        CyclotomicSquare { src: F, dst: T0 },
        Expt { src: F, dst: T1 },
        Conjugate { src: F, dst: T2 },
        Mul { lhs: T1, rhs: T2, dst: T1 },
        Expt { src: T1, dst: T2 },
        Conjugate { src: T1, dst: T1 },
        Mul { lhs: T1, rhs: T2, dst: T1 },
        Expt { src: T1, dst: T2 },
        Frobenius { src: T1, dst: T1 },
        Mul { lhs: T1, rhs: T2, dst: T1 },
        Mul { lhs: F, rhs: T0, dst: F },
        Expt { src: T1, dst: T0 },
        Expt { src: T0, dst: T2 },
        FrobeniusSquare { src: T1, dst: T0 },
        Conjugate { src: T1, dst: T1 },
        Mul { lhs: T1, rhs: T2, dst: T1 },
        Mul { lhs: T1, rhs: T0, dst: T1 },
        Mul { lhs: F, rhs: T1, dst: F },
    ]
};

/// Fixed exponent used by every `Expt` step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExptParams {
    /// Little-endian limbs of the exponent
    exponent: &'static [u64],
    /// Falls back to square and multiply when absent
    chain: Option<AdditionChain>,
}

impl ExptParams {
    /// Panics when `chain` computes a different exponent than `exponent`.
    pub const fn new(exponent: &'static [u64], chain: Option<AdditionChain>) -> Self {
        match Self::try_new(exponent, chain) {
            Some(params) => params,
            None => panic!("addition chain does not match the exponent"),
        }
    }

    /// `None` when `chain` computes a different exponent than `exponent`.
    pub const fn try_new(exponent: &'static [u64], chain: Option<AdditionChain>) -> Option<Self> {
        if let Some(c) = &chain {
            if exponent.is_empty() || exponent[0] != c.exponent {
                return None;
            }
            let mut i = 1;
            while i < exponent.len() {
                if exponent[i] != 0 {
                    return None;
                }
                i += 1;
            }
        }
        Some(Self { exponent, chain })
    }

    pub const fn exponent(&self) -> &'static [u64] {
        self.exponent
    }

    pub const fn chain(&self) -> Option<&AdditionChain> {
        self.chain.as_ref()
    }
}

/// Everything the pairing needs to know about a curve beyond its fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PairingParams {
    pub loop_counters: LoopCounters,
    pub expt: ExptParams,
    pub hard_part: &'static [HardPartStep],
}

impl PairingParams {
    /// Optimal ate over the single counter `x`.
    pub const BLS12_377: Self = Self {
        loop_counters: LoopCounters::Single(LoopCounter {
            digits: &X_NAF,
            negative: false,
        }),
        expt: ExptParams::new(&[BLS_X], Some(BLS12_377_EXPT_CHAIN)),
        hard_part: BLS12_HARD_PART,
    };

    /// Two passes over the counters `-x^2` and `-x`, valid since
    /// `(1 - x^2) + x^3 p` vanishes modulo `r`.
    ///
    /// This is a different non-degenerate bilinear pairing. Its values do not
    /// match [`PairingParams::BLS12_377`] or other BLS12-377 implementations,
    /// so the two presets are not interchangeable.
    pub const BLS12_377_DUAL: Self = Self {
        loop_counters: LoopCounters::Dual(
            LoopCounter {
                digits: &X_SQUARED_NAF,
                negative: true,
            },
            LoopCounter {
                digits: &X_NAF,
                negative: true,
            },
        ),
        expt: ExptParams::new(&[BLS_X], Some(BLS12_377_EXPT_CHAIN)),
        hard_part: BLS12_HARD_PART,
    };

    /// [`PairingParams::BLS12_377`] with `Expt` done by square and multiply.
    pub const BLS12_377_GENERIC_EXPT: Self = Self {
        expt: ExptParams::new(&[BLS_X], None),
        ..Self::BLS12_377
    };
}

impl Default for PairingParams {
    fn default() -> Self {
        Self::BLS12_377
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_naf(digits: &[i8]) -> bool {
        digits.windows(2).all(|w| w[0] == 0 || w[1] == 0)
            && digits.iter().all(|d| (-1..=1).contains(d))
            && digits.last().map_or(false, |d| *d != 0)
    }

    #[test]
    fn loop_counters() {
        assert_eq!(X_NAF.len(), 64);
        assert_eq!(X_SQUARED_NAF.len(), 127);
        assert!(is_naf(&X_NAF));
        assert!(is_naf(&X_SQUARED_NAF));

        let LoopCounters::Single(x) = PairingParams::BLS12_377.loop_counters else {
            panic!("expected a single counter");
        };
        assert_eq!(x.value(), Some(BLS_X as i128));
        assert_eq!(x.digits.iter().filter(|d| **d != 0).count(), 7);

        let LoopCounters::Dual(c1, c2) = PairingParams::BLS12_377_DUAL.loop_counters else {
            panic!("expected two counters");
        };
        assert_eq!(c1.value(), Some(-(BLS_X_SQUARED as i128)));
        assert_eq!(c2.value(), Some(-(BLS_X as i128)));
    }

    #[test]
    fn expt_chain() {
        assert_eq!(BLS12_377_EXPT_CHAIN.evaluate(), Some(BLS_X as u128));

        assert_eq!(BLS12_377_EXPT_CHAIN.exponent(), BLS_X);
        assert_eq!(evaluate_steps(&[ChainStep::MulSaved(0)]), None);
    }

    #[test]
    fn chains_are_checked() {
        use ChainStep::*;

        let five = AdditionChain::try_new(5, &[Save, Square(2), MulSaved(0)]);
        assert_eq!(five.and_then(|c| c.evaluate()), Some(5));

        // slot 1 was never saved
        assert_eq!(AdditionChain::try_new(5, &[Save, Square(2), MulSaved(1)]), None);
        assert_eq!(AdditionChain::try_new(4, &[Save, Square(2), MulSaved(1)]), None);
        // one save past the slot count
        assert_eq!(
            AdditionChain::try_new(1, &[Save, Save, Save, Save, Save]),
            None
        );
        assert!(AdditionChain::try_new(1, &[Save, Save, Save, Save]).is_some());
        // steps computing a different exponent
        assert_eq!(AdditionChain::try_new(7, &[Square(1), MulBase, Square(1)]), None);
        assert_eq!(AdditionChain::try_new(7, &[Square(200)]), None);
    }

    #[test]
    fn expt_params_are_checked() {
        assert!(ExptParams::try_new(&[BLS_X], Some(BLS12_377_EXPT_CHAIN)).is_some());
        assert!(ExptParams::try_new(&[BLS_X, 0], Some(BLS12_377_EXPT_CHAIN)).is_some());
        assert_eq!(ExptParams::try_new(&[7], Some(BLS12_377_EXPT_CHAIN)), None);
        assert_eq!(ExptParams::try_new(&[BLS_X, 1], Some(BLS12_377_EXPT_CHAIN)), None);
        assert_eq!(ExptParams::try_new(&[], Some(BLS12_377_EXPT_CHAIN)), None);
        assert!(ExptParams::try_new(&[7], None).is_some());
        assert_eq!(
            PairingParams::BLS12_377.expt.chain(),
            Some(&BLS12_377_EXPT_CHAIN)
        );
        assert_eq!(PairingParams::BLS12_377_GENERIC_EXPT.expt.chain(), None);
    }

    #[test]
    #[should_panic(expected = "addition chain does not match the exponent")]
    fn mismatched_expt_params_panic() {
        ExptParams::new(&[7], Some(BLS12_377_EXPT_CHAIN));
    }

    #[test]
    #[should_panic(expected = "addition chain does not compute its exponent")]
    fn wrong_chain_panics() {
        let steps: &'static [ChainStep] = &[ChainStep::Square(3)];
        AdditionChain::new(9, steps);
    }

    #[test]
    fn hard_part_shape() {
        assert_eq!(BLS12_HARD_PART.len(), 18);
        let expts = BLS12_HARD_PART
            .iter()
            .filter(|s| matches!(s, HardPartStep::Expt { .. }))
            .count();
        assert_eq!(expts, 5);
        assert_eq!(
            BLS12_HARD_PART.last(),
            Some(&HardPartStep::Mul {
                lhs: Slot::F,
                rhs: Slot::T1,
                dst: Slot::F
            })
        );
    }
}
