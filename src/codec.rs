// Big-endian integer <-> octet-string conversions and field-offset arithmetic.
//
// Every wire field in RFC 8554 is a big-endian unsigned integer or a raw
// octet string; this module is the one place that knows how to move between
// the two. Offsets for the public-key and signature layouts are computed
// here from the parameter set's `n`/`m`, never hard-coded to one type.

use crate::error::LmsError;

/// Encodes `value` as a big-endian `u32str` (RFC 8554 terminology).
pub fn put_u32be(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Reads a big-endian `u32str` from the front of `buf`.
pub fn get_u32be(buf: &[u8]) -> Result<u32, LmsError> {
    let arr: [u8; 4] = buf
        .try_into()
        .map_err(|_| LmsError::BadInputData("u32be input must be 4 bytes"))?;
    Ok(u32::from_be_bytes(arr))
}

/// Field offsets for the public-key wire layout (§6.1), parameterized by `m`.
pub struct PublicKeyLayout {
    pub lms_type: usize,
    pub ots_type: usize,
    pub identifier: usize,
    pub root: usize,
    pub total_len: usize,
}

impl PublicKeyLayout {
    pub const ID_LEN: usize = 16;

    pub fn new(m: usize) -> Self {
        Self {
            lms_type: 0,
            ots_type: 4,
            identifier: 8,
            root: 24,
            total_len: 4 + 4 + Self::ID_LEN + m,
        }
    }
}

/// Field offsets for the signature wire layout (§6.1), parameterized by
/// `n` (OTS digest length), `p` (OTS chain count), `m`, and `h`.
pub struct SignatureLayout {
    pub q: usize,
    pub ots_sig: usize,
    pub ots_sig_len: usize,
    pub lms_type: usize,
    pub path: usize,
    pub total_len: usize,
}

impl SignatureLayout {
    pub fn new(n: usize, p: usize, m: usize, h: usize) -> Self {
        let ots_sig_len = 4 + n * (p + 1);
        let lms_type = 4 + ots_sig_len;
        let path = lms_type + 4;
        Self {
            q: 0,
            ots_sig: 4,
            ots_sig_len,
            lms_type,
            path,
            total_len: path + m * h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32be_round_trips() {
        let buf = put_u32be(0xdead_beef);
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(get_u32be(&buf).unwrap(), 0xdead_beef);
    }

    #[test]
    fn u32be_rejects_wrong_length() {
        assert!(get_u32be(&[0u8; 3]).is_err());
        assert!(get_u32be(&[0u8; 5]).is_err());
    }

    #[test]
    fn public_key_layout_matches_rfc_8554_h10() {
        let layout = PublicKeyLayout::new(32);
        assert_eq!(layout.lms_type, 0);
        assert_eq!(layout.ots_type, 4);
        assert_eq!(layout.identifier, 8);
        assert_eq!(layout.root, 24);
        assert_eq!(layout.total_len, 56);
    }

    #[test]
    fn signature_layout_matches_rfc_8554_sha256_n32_w8_h10() {
        // n=32, p=34, m=32, h=10
        let layout = SignatureLayout::new(32, 34, 32, 10);
        assert_eq!(layout.ots_sig_len, 4 + 32 * 35);
        assert_eq!(layout.lms_type, 4 + layout.ots_sig_len);
        assert_eq!(layout.path, layout.lms_type + 4);
        assert_eq!(layout.total_len, layout.path + 32 * 10);
    }
}
