// LM-OTS one-time signature primitive (RFC 8554 §4), consumed by the
// LMS layer as an external collaborator rather than re-derived inline.
//
// This module supplies the one conforming implementation this crate
// needs (SHA256_N32_W8), grounded in the real RustCrypto-signatures
// `lms`/`lms-ots` sources and cross-checked against their embedded
// RFC 8554 Appendix F vectors.

use sha2::{Digest, Sha256};

use crate::error::LmsError;
use crate::params::LmOtsAlgorithm;

/// Public-key domain separator, `D_PBLC` (RFC 8554 §4.3).
const D_PBLC: [u8; 2] = [0x80, 0x80];
/// Message-hash domain separator, `D_MESG` (RFC 8554 §4.3).
const D_MESG: [u8; 2] = [0x81, 0x81];

const MAX_DIGIT: u32 = 255; // 2^w - 1 for w = 8

/// One LM-OTS private key: `p` secret `n`-octet chain starting values.
#[derive(Clone)]
pub struct OtsPrivateKey {
    pub q: u32,
    pub chains: Vec<[u8; 32]>,
}

/// One LM-OTS public key: the `n`-octet hash of all chain end values.
#[derive(Clone, PartialEq, Eq)]
pub struct OtsPublicKey {
    pub bytes: Vec<u8>,
}

/// A parsed LM-OTS signature: the randomizer `C` plus `p` chain values.
#[derive(Clone)]
pub struct OtsSignature {
    pub randomizer: [u8; 32],
    pub chain_values: Vec<[u8; 32]>,
}

fn chain(
    id: &[u8; 16],
    q: u32,
    i: u16,
    from: u32,
    to: u32,
    start: &[u8; 32],
) -> [u8; 32] {
    let mut tmp = *start;
    for j in from..to {
        let out = Sha256::new()
            .chain_update(id)
            .chain_update(q.to_be_bytes())
            .chain_update(i.to_be_bytes())
            .chain_update([j as u8])
            .chain_update(tmp)
            .finalize();
        tmp.copy_from_slice(&out);
    }
    tmp
}

/// `Q || Cksm(Q)`: the `n`-octet message digest followed by the 2-octet
/// big-endian checksum of its digits (RFC 8554 §4.4, w=8 so ls=0).
fn digest_with_checksum(q_hash: &[u8; 32]) -> [u8; 34] {
    let mut sum: u16 = 0;
    for &byte in q_hash.iter() {
        sum = sum.wrapping_add(MAX_DIGIT as u16 - byte as u16);
    }
    let mut out = [0u8; 34];
    out[..32].copy_from_slice(q_hash);
    out[32..].copy_from_slice(&sum.to_be_bytes());
    out
}

/// Derives the `p` secret chain-start values for leaf `q` from `seed`
/// and `id`, following RFC 8554 §5.3's pseudo-random key generation:
/// `x_q[i] = H(I || u32str(q) || u16str(i) || u8str(0xff) || SEED)`.
pub fn generate_private(
    algorithm: LmOtsAlgorithm,
    id: &[u8; 16],
    q: u32,
    seed: &[u8],
) -> Result<OtsPrivateKey, LmsError> {
    let meta = algorithm.metadata();
    let mut chains = Vec::with_capacity(meta.p);
    for i in 0..meta.p as u16 {
        let out = Sha256::new()
            .chain_update(id)
            .chain_update(q.to_be_bytes())
            .chain_update(i.to_be_bytes())
            .chain_update([0xffu8])
            .chain_update(seed)
            .finalize();
        let mut start = [0u8; 32];
        start.copy_from_slice(&out);
        chains.push(start);
    }
    Ok(OtsPrivateKey { q, chains })
}

/// Runs every chain to its end (`2^w - 1` iterations) and hashes the
/// concatenation with `D_PBLC` to produce the leaf's OTS public key.
pub fn derive_public(
    algorithm: LmOtsAlgorithm,
    id: &[u8; 16],
    private: &OtsPrivateKey,
) -> OtsPublicKey {
    let meta = algorithm.metadata();
    let max_digit = (1u32 << meta.w) - 1;
    debug_assert_eq!(private.chains.len(), meta.p);
    let mut hasher = Sha256::new()
        .chain_update(id)
        .chain_update(private.q.to_be_bytes())
        .chain_update(D_PBLC);
    for (i, start) in private.chains.iter().take(meta.p).enumerate() {
        let end = chain(id, private.q, i as u16, 0, max_digit, start);
        hasher.update(end);
    }
    OtsPublicKey {
        bytes: hasher.finalize().to_vec(),
    }
}

/// Signs `message` with leaf private key `private`, drawing the
/// randomizer `C` from `randomizer` (caller-supplied so that callers
/// can plug in their own RNG per RFC 8554 §4).
pub fn sign(
    id: &[u8; 16],
    private: &OtsPrivateKey,
    message: &[u8],
    randomizer: [u8; 32],
) -> OtsSignature {
    let q_hash: [u8; 32] = Sha256::new()
        .chain_update(id)
        .chain_update(private.q.to_be_bytes())
        .chain_update(D_MESG)
        .chain_update(randomizer)
        .chain_update(message)
        .finalize()
        .into();
    let digits = digest_with_checksum(&q_hash);

    let chain_values = private
        .chains
        .iter()
        .enumerate()
        .map(|(i, start)| chain(id, private.q, i as u16, 0, digits[i] as u32, start))
        .collect();

    OtsSignature {
        randomizer,
        chain_values,
    }
}

/// Recovers a *candidate* public key from a signature, message, and
/// leaf index. A genuine signature yields the true leaf public key (a
/// forged or corrupted one yields an unrelated value); this function
/// never itself decides pass/fail, it only ever produces a candidate
/// for the Merkle root comparison in §4.6 step 6.
pub fn recover_public_key(
    algorithm: LmOtsAlgorithm,
    id: &[u8; 16],
    q: u32,
    message: &[u8],
    signature: &OtsSignature,
) -> Result<OtsPublicKey, LmsError> {
    let meta = algorithm.metadata();
    if signature.chain_values.len() != meta.p {
        return Err(LmsError::VerifyFailed);
    }

    let q_hash: [u8; 32] = Sha256::new()
        .chain_update(id)
        .chain_update(q.to_be_bytes())
        .chain_update(D_MESG)
        .chain_update(signature.randomizer)
        .chain_update(message)
        .finalize()
        .into();
    let digits = digest_with_checksum(&q_hash);

    let mut hasher = Sha256::new()
        .chain_update(id)
        .chain_update(q.to_be_bytes())
        .chain_update(D_PBLC);
    for (i, y_i) in signature.chain_values.iter().enumerate() {
        let z_i = chain(id, q, i as u16, digits[i] as u32, MAX_DIGIT, y_i);
        hasher.update(z_i);
    }
    Ok(OtsPublicKey {
        bytes: hasher.finalize().to_vec(),
    })
}
