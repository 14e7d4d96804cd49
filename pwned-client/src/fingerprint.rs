use sha1::{Digest, Sha1};

/// Number of leading fingerprint characters sent to the range API.
///
/// Fixed by the wire protocol: the remote service indexes its ranges by
/// 5-character hex prefixes.
pub const RANGE_SIZE: usize = 5;

/// Length of a full SHA-1 fingerprint in uppercase hex characters.
pub const FINGERPRINT_LEN: usize = 40;

/// Hex lookup table for digest rendering.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Computes the uppercase hex SHA-1 fingerprint of a password.
///
/// Always exactly [`FINGERPRINT_LEN`] characters, including for the empty
/// password.
pub fn fingerprint(password: &str) -> String {
    let digest: [u8; 20] = Sha1::digest(password.as_bytes()).into();

    let mut out = String::with_capacity(FINGERPRINT_LEN);
    for byte in digest {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Splits a password's fingerprint into the public range key and the private
/// selector.
///
/// Only the range key ever leaves the process; the selector is compared
/// locally against the candidates returned for that range. Pure and
/// deterministic, defined for every input including the empty string.
pub fn split(password: &str) -> (String, String) {
    let mut range_key = fingerprint(password);
    let selector = range_key.split_off(RANGE_SIZE);
    (range_key, selector)
}
