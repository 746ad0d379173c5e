//! Core Leighton-Micali Signature (LMS) engine, following RFC 8554 and
//! NIST SP 800-208.
//!
//! This crate implements the stateful hash-based signature scheme's
//! hard engineering core: Merkle tree construction and path recovery,
//! the monotone leaf-consuming private key, and byte-exact wire
//! parsing for the two parameter sets this crate recognizes
//! (`LMS_SHA256_M32_H10` over `LMOTS_SHA256_N32_W8`).
//!
//! It does not provide a CLI, a persistence layer, or HSS (multi-tree)
//! composition; see [`private_key`] for the durability contract a
//! caller must honor around `q_next`.

pub mod codec;
pub mod error;
pub mod hasher;
pub mod ots;
pub mod params;
pub mod private_key;
pub mod public_key;
pub mod signature;
pub mod tree;

pub use error::{LmsError, Result};
pub use params::{LmOtsAlgorithm, LmsAlgorithm};
pub use private_key::LmsPrivateKey;
pub use public_key::LmsPublicKey;
pub use signature::LmsSignature;
