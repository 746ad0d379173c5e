// Public-key derive/import/export (C9) and the verifier (C6), the
// single most error-prone component: the left/right order in the climb
// is determined by the parity of the *current* node index, not of `q`
// (RFC 8554 §4.6, algorithm 6a), matching the exact climb found in RustCrypto-signatures'
// `lms` public-key verifier.

use std::cmp::Ordering;

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::codec::{get_u32be, put_u32be, PublicKeyLayout};
use crate::error::LmsError;
use crate::hasher::{internal_hash, leaf_hash};
use crate::ots;
use crate::params::{LmOtsAlgorithm, LmsAlgorithm};
use crate::private_key::LmsPrivateKey;
use crate::signature::LmsSignature;

/// `(type, otstype, I, T1)` (RFC 8554 §3.1). Immutable after populate; safe
/// to share across parallel verify calls.
#[derive(Clone, PartialEq, Eq)]
pub struct LmsPublicKey {
    pub lms_algorithm: LmsAlgorithm,
    pub ots_algorithm: LmOtsAlgorithm,
    pub id: [u8; 16],
    pub root: Vec<u8>,
}

impl LmsPublicKey {
    /// Derives the public key from a private state (RFC 8554 §5.2).
    pub fn derive(private: &LmsPrivateKey) -> Self {
        Self {
            lms_algorithm: private.lms_algorithm(),
            ots_algorithm: private.ots_algorithm(),
            id: *private.identifier(),
            root: private.derive_root(),
        }
    }

    /// Imports a public key from its wire encoding (RFC 8554 §6).
    pub fn import(bytes: &[u8]) -> Result<Self, LmsError> {
        if bytes.len() < 8 {
            return Err(LmsError::BadInputData("public key buffer too short to read type tags"));
        }
        let lms_type = get_u32be(&bytes[0..4])?;
        let ots_type = get_u32be(&bytes[4..8])?;
        let lms_algorithm = LmsAlgorithm::from_type_code(lms_type)?;
        let ots_algorithm = LmOtsAlgorithm::from_type_code(ots_type)?;

        let meta = lms_algorithm.metadata();
        let layout = PublicKeyLayout::new(meta.m);
        match bytes.len().cmp(&layout.total_len) {
            Ordering::Less => {
                return Err(LmsError::BadInputData("public key buffer shorter than parameter set requires"))
            }
            Ordering::Greater => {
                return Err(LmsError::BadInputData("public key buffer longer than parameter set requires"))
            }
            Ordering::Equal => {}
        }

        let mut id = [0u8; 16];
        id.copy_from_slice(&bytes[layout.identifier..layout.identifier + PublicKeyLayout::ID_LEN]);
        let root = bytes[layout.root..layout.root + meta.m].to_vec();

        Ok(Self {
            lms_algorithm,
            ots_algorithm,
            id,
            root,
        })
    }

    /// Exports the public key to its wire encoding (RFC 8554 §6).
    pub fn export(&self) -> Vec<u8> {
        let meta = self.lms_algorithm.metadata();
        let layout = PublicKeyLayout::new(meta.m);
        let mut out = vec![0u8; layout.total_len];
        out[layout.lms_type..layout.lms_type + 4].copy_from_slice(&put_u32be(meta.type_code));
        out[layout.ots_type..layout.ots_type + 4]
            .copy_from_slice(&put_u32be(self.ots_algorithm.metadata().type_code));
        out[layout.identifier..layout.identifier + PublicKeyLayout::ID_LEN]
            .copy_from_slice(&self.id);
        out[layout.root..layout.root + meta.m].copy_from_slice(&self.root);
        out
    }

    /// Verifies `signature` over `message` (RFC 8554 §4.6, algorithm 6a). Every failure
    /// mode collapses to `VERIFY_FAILED`; no step reveals which check
    /// tripped.
    pub fn verify(&self, message: &[u8], signature_bytes: &[u8]) -> Result<(), LmsError> {
        let signature =
            LmsSignature::from_bytes(signature_bytes, self.lms_algorithm, self.ots_algorithm)?;

        let lms_meta = self.lms_algorithm.metadata();
        let leaf_count = lms_meta.leaf_count();

        let candidate_public = ots::recover_public_key(
            self.ots_algorithm,
            &self.id,
            signature.q,
            message,
            &signature.ots_signature,
        )?;

        let mut r = leaf_count + signature.q;
        let mut node = leaf_hash(&self.id, r, &candidate_public.bytes, lms_meta.m);

        for sibling in signature.path.iter() {
            let parent = r / 2;
            node = if r % 2 == 1 {
                internal_hash(&self.id, parent, sibling, &node, lms_meta.m)
            } else {
                internal_hash(&self.id, parent, &node, sibling, lms_meta.m)
            };
            r = parent;
        }

        let matches: bool = node.ct_eq(&self.root).into();
        debug!(verified = matches, "LMS verify completed");
        if matches {
            Ok(())
        } else {
            Err(LmsError::VerifyFailed)
        }
    }
}
