// Key generator (C7) and signer (C8).

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::LmsError;
use crate::ots::{self, OtsPrivateKey, OtsPublicKey};
use crate::params::{LmOtsAlgorithm, LmsAlgorithm};
use crate::signature::LmsSignature;
use crate::tree::MerkleTree;

/// One leaf's worth of private state: the OTS private key and its
/// already-derived public key, kept together so signing never
/// recomputes the public half.
#[derive(Clone)]
struct Leaf {
    private: OtsPrivateKey,
    public: OtsPublicKey,
}

impl Zeroize for Leaf {
    fn zeroize(&mut self) {
        for chain in self.private.chains.iter_mut() {
            chain.zeroize();
        }
        self.public.bytes.zeroize();
    }
}

/// LMS private state (RFC 8554 §3.1): parameter set, identifier, the full
/// array of leaf OTS keys, and the monotone leaf counter `q_next`.
///
/// Dropping this value overwrites every leaf's private chain-start
/// material; `q_next` is left alone since it carries no secrecy
/// requirement but is included for completeness of the wipe.
#[derive(ZeroizeOnDrop)]
pub struct LmsPrivateKey {
    #[zeroize(skip)]
    lms_algorithm: LmsAlgorithm,
    #[zeroize(skip)]
    ots_algorithm: LmOtsAlgorithm,
    id: [u8; 16],
    leaves: Vec<Leaf>,
    q_next: u32,
}

impl LmsPrivateKey {
    /// Generates a fresh private key: draws `I` from `rng`, then
    /// derives all `2^h` leaf OTS keys from `seed` (RFC 8554 §5.2).
    ///
    /// `rng` must be cryptographically secure; it is the sole source
    /// of `I`, kept separate from `seed` so that two keys generated
    /// from the same seed but different `rng` draws are distinct.
    pub fn generate<R: RngCore + CryptoRng>(
        lms_algorithm: LmsAlgorithm,
        ots_algorithm: LmOtsAlgorithm,
        seed: &[u8],
        rng: &mut R,
    ) -> Result<Self, LmsError> {
        let lms_meta = lms_algorithm.metadata();
        let leaf_count = lms_meta.leaf_count();

        let mut id = [0u8; 16];
        rng.fill_bytes(&mut id);

        info!(leaf_count, lms_type = lms_meta.type_code, "generating LMS private key");

        let mut leaves = Vec::with_capacity(leaf_count as usize);
        for q in 0..leaf_count {
            let private = ots::generate_private(ots_algorithm, &id, q, seed)?;
            let public = ots::derive_public(ots_algorithm, &id, &private);
            leaves.push(Leaf { private, public });
        }

        debug!("LMS private key generated, q_next = 0");

        Ok(Self {
            lms_algorithm,
            ots_algorithm,
            id,
            leaves,
            q_next: 0,
        })
    }

    pub fn lms_algorithm(&self) -> LmsAlgorithm {
        self.lms_algorithm
    }

    pub fn ots_algorithm(&self) -> LmOtsAlgorithm {
        self.ots_algorithm
    }

    pub fn identifier(&self) -> &[u8; 16] {
        &self.id
    }

    pub fn q_next(&self) -> u32 {
        self.q_next
    }

    pub fn is_exhausted(&self) -> bool {
        self.q_next >= self.lms_algorithm.metadata().leaf_count()
    }

    fn build_tree(&self) -> MerkleTree {
        let meta = self.lms_algorithm.metadata();
        let public_keys: Vec<Vec<u8>> =
            self.leaves.iter().map(|l| l.public.bytes.clone()).collect();
        MerkleTree::build(&self.id, &public_keys, meta.h, meta.m)
    }

    /// Derives the Merkle root, i.e. the public key's `T1` field
    /// (RFC 8554 §5.2).
    pub fn derive_root(&self) -> Vec<u8> {
        self.build_tree().root().to_vec()
    }

    /// Consumes the next unused leaf and signs `message`, advancing
    /// `q_next` before any signature bytes are produced (RFC 8554 §5.4).
    ///
    /// The caller owns durable persistence of the advanced `q_next`
    /// before releasing the signature to any observer; this function
    /// only enforces the in-memory monotone invariant.
    pub fn sign<R: RngCore + CryptoRng>(
        &mut self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<LmsSignature, LmsError> {
        let meta = self.lms_algorithm.metadata();
        if self.q_next >= meta.leaf_count() {
            debug!("sign called on exhausted private key");
            return Err(LmsError::OutOfPrivateKeys);
        }

        let q = self.q_next;
        self.q_next += 1;

        let leaf = &self.leaves[q as usize];
        let mut randomizer = [0u8; 32];
        rng.fill_bytes(&mut randomizer);
        let ots_sig = ots::sign(&self.id, &leaf.private, message, randomizer);

        let tree = self.build_tree();
        let path = tree.authentication_path(q, meta.h);

        debug!(q, remaining = meta.leaf_count() - self.q_next, "signed one message");

        Ok(LmsSignature {
            q,
            lms_algorithm: self.lms_algorithm,
            ots_algorithm: self.ots_algorithm,
            ots_signature: ots_sig,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn small_test_key(seed: u64) -> (LmsPrivateKey, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let private = LmsPrivateKey::generate(
            LmsAlgorithm::Sha256M32H10,
            LmOtsAlgorithm::Sha256N32W8,
            b"test seed material",
            &mut rng,
        )
        .unwrap();
        (private, rng)
    }

    #[test]
    fn q_next_starts_at_zero() {
        let (key, _rng) = small_test_key(1);
        assert_eq!(key.q_next(), 0);
        assert!(!key.is_exhausted());
    }

    #[test]
    fn sign_advances_q_next_by_exactly_one() {
        let (mut key, mut rng) = small_test_key(2);
        let sig = key.sign(b"message one", &mut rng).unwrap();
        assert_eq!(sig.q, 0);
        assert_eq!(key.q_next(), 1);

        let sig2 = key.sign(b"message two", &mut rng).unwrap();
        assert_eq!(sig2.q, 1);
        assert_eq!(key.q_next(), 2);
    }

    #[test]
    fn identifier_is_stable_across_signs() {
        let (mut key, mut rng) = small_test_key(3);
        let id_before = *key.identifier();
        key.sign(b"m", &mut rng).unwrap();
        assert_eq!(*key.identifier(), id_before);
    }

    #[test]
    fn derive_root_is_stable_and_m_octets() {
        let (key, _rng) = small_test_key(4);
        let root_a = key.derive_root();
        let root_b = key.derive_root();
        assert_eq!(root_a, root_b);
        assert_eq!(root_a.len(), 32);
    }
}
