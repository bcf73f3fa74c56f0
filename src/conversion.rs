use crate::DIGEST_LEN;

/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Render a SHA-1 digest as 40 uppercase hex characters (stack allocated).
///
/// The range API serves uppercase hex and matching is byte-wise, so the
/// rendering has to agree exactly.
#[inline]
pub fn digest_to_hex(digest: &[u8; DIGEST_LEN]) -> [u8; DIGEST_LEN * 2] {
    let mut out = [0u8; DIGEST_LEN * 2];
    for (i, b) in digest.iter().enumerate() {
        out[i * 2] = HEX_CHARS[(b >> 4) as usize];
        out[i * 2 + 1] = HEX_CHARS[(b & 0x0f) as usize];
    }
    out
}
