use thiserror::Error;

/// Error kinds surfaced by the LMS core (RFC 8554 §7 error taxonomy).
///
/// `VerifyFailed` is deliberately uniform: every failure mode inside
/// `verify` (length mismatch, bad type tag, out-of-range `q`, or a
/// genuine root mismatch) collapses to this single variant. Callers
/// must not be able to distinguish *why* a signature failed to verify.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LmsError {
    /// Unknown parameter set, wrong-length buffer, operation on an
    /// unpopulated state, or a duplicate `generate` call.
    #[error("bad input data: {0}")]
    BadInputData(&'static str),

    /// The caller-supplied output buffer cannot hold the serialized
    /// public key or signature.
    #[error("output buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    /// `q_next` has reached `2^h`; the private key is permanently
    /// exhausted and can never sign again.
    #[error("private key exhausted: all leaves consumed")]
    OutOfPrivateKeys,

    /// Leaf-array allocation failed during `generate`.
    #[error("allocation failed during key generation")]
    AllocFailed,

    /// Signature is inconsistent with the message and public key.
    /// Never distinguishes which internal check failed.
    #[error("signature verification failed")]
    VerifyFailed,

    /// The underlying hash primitive reported a failure; surfaced
    /// verbatim rather than mapped to a more specific kind.
    #[error("hash backend failure: {0}")]
    HashBackend(&'static str),
}

pub type Result<T> = core::result::Result<T, LmsError>;
