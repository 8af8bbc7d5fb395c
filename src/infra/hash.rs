use std::hash::Hasher;

use twox_hash::XxHash64;

/// Stable 64-bit content hash used to key memoized diffs.
pub fn hash64(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}
