use sha2::{Digest, Sha256};

/// Number of digest bytes kept in an anchor id (hex-encoded to twice as many characters).
const ID_BYTES: usize = 8;

/// Derive a stable anchor id from clean heading text.
///
/// The id is the lowercase hex of a truncated SHA-256 digest, so identical
/// headings share an id. Collisions are not deduplicated.
pub fn heading_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..ID_BYTES])
}
