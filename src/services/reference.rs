// src/services/reference.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const DEFAULT_REFERENCE_BYTES: usize = 9;

/// Reference handed back to someone who submitted the contact form.
pub fn generate_reference_default() -> String {
    let mut rng = OsRng;
    generate_reference(&mut rng, DEFAULT_REFERENCE_BYTES)
}

/// URL-safe Base64 of `nbytes` random bytes, no padding.
/// 9 bytes -> 12 chars.
pub fn generate_reference<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}
