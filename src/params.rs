// Parameter registry: a small tagged variant plus a lookup table, not
// compile-time specialization over h/n/w via generics. New rows are
// added by extending the match arms here; nothing else in the crate
// needs to change.

use crate::error::LmsError;

/// Recognized LMS parameter sets (RFC 8554 §8.1 registry, restricted to
/// the row this crate supports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LmsAlgorithm {
    Sha256M32H10,
}

/// Recognized LM-OTS parameter sets (RFC 8554 §8.2 registry, restricted
/// to the row this crate supports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LmOtsAlgorithm {
    Sha256N32W8,
}

/// Metadata for one LMS row: hash output length, tree height, and the
/// registered RFC 8554 type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LmsMetadata {
    pub type_code: u32,
    /// LMS hash output length in octets.
    pub m: usize,
    /// Tree height; leaf count is `2^h`.
    pub h: u32,
}

impl LmsMetadata {
    pub fn leaf_count(&self) -> u32 {
        1u32 << self.h
    }
}

/// Metadata for one LM-OTS row: hash output length, Winternitz
/// parameter, chain count, and the registered RFC 8554 type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LmOtsMetadata {
    pub type_code: u32,
    /// LM-OTS hash output length in octets.
    pub n: usize,
    /// Winternitz parameter.
    pub w: u32,
    /// Number of hash chains (message digits plus checksum digits).
    pub p: usize,
    /// Left-shift applied to the checksum before appending its digits.
    pub ls: u32,
}

impl LmsAlgorithm {
    pub fn metadata(self) -> LmsMetadata {
        match self {
            LmsAlgorithm::Sha256M32H10 => LmsMetadata {
                type_code: 0x0000_0006,
                m: 32,
                h: 10,
            },
        }
    }

    pub fn from_type_code(code: u32) -> Result<Self, LmsError> {
        match code {
            0x0000_0006 => Ok(LmsAlgorithm::Sha256M32H10),
            _ => Err(LmsError::BadInputData("unrecognized LMS type code")),
        }
    }
}

impl LmOtsAlgorithm {
    pub fn metadata(self) -> LmOtsMetadata {
        match self {
            LmOtsAlgorithm::Sha256N32W8 => LmOtsMetadata {
                type_code: 0x0000_0004,
                n: 32,
                w: 8,
                p: 34,
                ls: 0,
            },
        }
    }

    pub fn from_type_code(code: u32) -> Result<Self, LmsError> {
        match code {
            0x0000_0004 => Ok(LmOtsAlgorithm::Sha256N32W8),
            _ => Err(LmsError::BadInputData("unrecognized LM-OTS type code")),
        }
    }
}
