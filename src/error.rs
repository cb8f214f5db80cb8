use core::fmt::{self, Display, Formatter};
use core2::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PairingError {
    InvalidFieldBytes,
    InvalidFieldString,
    InvalidGtBytes,
    InvalidHex,
    NotOnCurve,
    NotInSubgroup,
    ZeroElement,
}

impl Display for PairingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PairingError::InvalidFieldBytes => write!(f, "Invalid field element bytes"),
            PairingError::InvalidFieldString => write!(f, "Invalid field element string"),
            PairingError::InvalidGtBytes => write!(f, "Invalid Gt bytes"),
            PairingError::InvalidHex => write!(f, "Invalid hex string"),
            PairingError::NotOnCurve => write!(f, "Point is not on the curve"),
            PairingError::NotInSubgroup => write!(f, "Point is not in the prime order subgroup"),
            PairingError::ZeroElement => write!(f, "Element is zero"),
        }
    }
}

impl Error for PairingError {}

impl From<hex::FromHexError> for PairingError {
    fn from(_: hex::FromHexError) -> Self {
        PairingError::InvalidHex
    }
}
