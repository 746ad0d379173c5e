// Domain-separated Merkle hasher (C3). Two operations, each a single
// SHA-256 evaluation over a strict concatenation, grounded in the real
// climb/leaf-hash pattern used by RustCrypto-signatures' `lms` crate.

use sha2::{Digest, Sha256};

/// Leaf-node domain separator (RFC 8554 §4.5, `D_LEAF`).
pub const D_LEAF: [u8; 2] = [0x82, 0x82];
/// Internal-node domain separator (RFC 8554 §4.5, `D_INTR`).
pub const D_INTR: [u8; 2] = [0x83, 0x83];

/// `T(r) = H(I || u32be(r) || D_LEAF || K_q)` for `r` in the leaf range.
pub fn leaf_hash(id: &[u8; 16], r: u32, ots_public_key: &[u8], m: usize) -> Vec<u8> {
    let digest = Sha256::new()
        .chain_update(id)
        .chain_update(r.to_be_bytes())
        .chain_update(D_LEAF)
        .chain_update(ots_public_key)
        .finalize();
    digest[..m].to_vec()
}

/// `T(r) = H(I || u32be(r) || D_INTR || left || right)` for `r` in the
/// internal range. `left`/`right` must already be ordered by the
/// caller according to the parity rule (RFC 8554 §4.3, §4.6): sibling
/// order, not child-index order.
pub fn internal_hash(id: &[u8; 16], r: u32, left: &[u8], right: &[u8], m: usize) -> Vec<u8> {
    let digest = Sha256::new()
        .chain_update(id)
        .chain_update(r.to_be_bytes())
        .chain_update(D_INTR)
        .chain_update(left)
        .chain_update(right)
        .finalize();
    digest[..m].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_separators_are_distinct() {
        assert_ne!(D_LEAF, D_INTR);
    }

    #[test]
    fn leaf_hash_is_deterministic() {
        let id = [0x11u8; 16];
        let k = [0x22u8; 32];
        let a = leaf_hash(&id, 1024, &k, 32);
        let b = leaf_hash(&id, 1024, &k, 32);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn leaf_hash_depends_on_node_index() {
        let id = [0x11u8; 16];
        let k = [0x22u8; 32];
        let a = leaf_hash(&id, 1024, &k, 32);
        let b = leaf_hash(&id, 1025, &k, 32);
        assert_ne!(a, b);
    }

    #[test]
    fn internal_hash_is_order_sensitive() {
        let id = [0x33u8; 16];
        let left = [0x01u8; 32];
        let right = [0x02u8; 32];
        let forward = internal_hash(&id, 5, &left, &right, 32);
        let swapped = internal_hash(&id, 5, &right, &left, 32);
        assert_ne!(forward, swapped);
    }

    #[test]
    fn leaf_and_internal_hash_differ_for_same_index_and_inputs() {
        let id = [0x44u8; 16];
        let a = [0xaau8; 32];
        let b = [0xbbu8; 32];
        let leaf = leaf_hash(&id, 7, &a, 32);
        let internal = internal_hash(&id, 7, &a, &b, 32);
        assert_ne!(leaf, internal);
    }
}
