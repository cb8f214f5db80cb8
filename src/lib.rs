#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

mod error;
pub mod inner_types;

pub use error::*;
pub use inner_types::{
    final_exponentiation, final_exponentiation_with, miller_loop, miller_loop_with,
    multi_miller_loop, multi_miller_loop_with, pairing, pairing_with, Fp, Fp12, Fp2, Fp6,
    G1Affine, G1Projective, G2Affine, G2Jacobian, G2Projective, Gt, LineEvaluation,
    MillerLoopResult, PairingParams,
};
