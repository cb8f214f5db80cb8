//! Field tower, curve groups and the pairing engine for BLS12-377.

#[macro_use]
mod macros;
mod expt;
mod final_exp;
mod fp;
mod fp12;
mod fp2;
mod fp6;
mod g1;
mod g2;
mod lines;
mod miller;
mod pairings;
mod params;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::*;
pub use g2::*;
pub use lines::LineEvaluation;
pub use pairings::*;
pub use params::*;
