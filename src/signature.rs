// Signature type and wire-format parsing/emission (C9's signature
// half), byte-exact per RFC 8554 §6. Grounded in the manual
// `TryFrom<&[u8]>` / `Into<Vec<u8>>` split-and-check pattern used by
// RustCrypto-signatures' `lms` crate rather than a generic serializer:
// the wire layout is not self-describing Rust data, it is RFC 8554's
// fixed byte grid.

use std::cmp::Ordering;

use crate::codec::{get_u32be, put_u32be, SignatureLayout};
use crate::error::LmsError;
use crate::ots::OtsSignature;
use crate::params::{LmOtsAlgorithm, LmsAlgorithm};

/// `(q, ots_sig, type, path[h])` (RFC 8554 §3.1, §6).
#[derive(Clone)]
pub struct LmsSignature {
    pub q: u32,
    pub lms_algorithm: LmsAlgorithm,
    pub ots_algorithm: LmOtsAlgorithm,
    pub ots_signature: OtsSignature,
    pub path: Vec<Vec<u8>>,
}

impl LmsSignature {
    pub fn to_bytes(&self) -> Vec<u8> {
        let lms_meta = self.lms_algorithm.metadata();
        let ots_meta = self.ots_algorithm.metadata();
        let layout = SignatureLayout::new(ots_meta.n, ots_meta.p, lms_meta.m, lms_meta.h);

        let mut out = Vec::with_capacity(layout.total_len);
        out.extend_from_slice(&put_u32be(self.q));
        out.extend_from_slice(&put_u32be(ots_meta.type_code));
        out.extend_from_slice(&self.ots_signature.randomizer);
        for value in &self.ots_signature.chain_values {
            out.extend_from_slice(value);
        }
        out.extend_from_slice(&put_u32be(lms_meta.type_code));
        for node in &self.path {
            out.extend_from_slice(node);
        }
        out
    }

    /// Parses a signature, validating every type tag and the total
    /// length against the parameter set the caller expects (taken from
    /// the public key being verified against, per RFC 8554 §4.6 algorithm 6a, steps 1-2).
    pub fn from_bytes(
        bytes: &[u8],
        expected_lms: LmsAlgorithm,
        expected_ots: LmOtsAlgorithm,
    ) -> Result<Self, LmsError> {
        let lms_meta = expected_lms.metadata();
        let ots_meta = expected_ots.metadata();
        let layout = SignatureLayout::new(ots_meta.n, ots_meta.p, lms_meta.m, lms_meta.h);

        match bytes.len().cmp(&layout.total_len) {
            Ordering::Less | Ordering::Greater => return Err(LmsError::VerifyFailed),
            Ordering::Equal => {}
        }

        let q = get_u32be(&bytes[layout.q..layout.q + 4])?;
        if q >= lms_meta.leaf_count() {
            return Err(LmsError::VerifyFailed);
        }

        let ots_type = get_u32be(&bytes[layout.ots_sig..layout.ots_sig + 4])?;
        if ots_type != ots_meta.type_code {
            return Err(LmsError::VerifyFailed);
        }

        let lms_type = get_u32be(&bytes[layout.lms_type..layout.lms_type + 4])?;
        if lms_type != lms_meta.type_code {
            return Err(LmsError::VerifyFailed);
        }

        let randomizer_start = layout.ots_sig + 4;
        let mut randomizer = [0u8; 32];
        randomizer.copy_from_slice(&bytes[randomizer_start..randomizer_start + ots_meta.n]);

        let mut chain_values = Vec::with_capacity(ots_meta.p);
        let chains_start = randomizer_start + ots_meta.n;
        for i in 0..ots_meta.p {
            let start = chains_start + i * ots_meta.n;
            let mut value = [0u8; 32];
            value.copy_from_slice(&bytes[start..start + ots_meta.n]);
            chain_values.push(value);
        }

        let mut path = Vec::with_capacity(lms_meta.h as usize);
        for level in 0..lms_meta.h as usize {
            let start = layout.path + level * lms_meta.m;
            path.push(bytes[start..start + lms_meta.m].to_vec());
        }

        Ok(Self {
            q,
            lms_algorithm: expected_lms,
            ots_algorithm: expected_ots,
            ots_signature: OtsSignature {
                randomizer,
                chain_values,
            },
            path,
        })
    }
}
