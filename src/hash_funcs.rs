use crate::error::Result;
use crate::helper::Variant;
use crate::pearson::{hash16, hash_original, hash_rfc3074, hash_wikipedia};

/// takes a key and a variant and applies the matching pearson hash
/// 8-bit digests are widened into the low byte
pub fn hasher(key: &[u8], variant: Variant) -> Result<u16> {
    match variant {
        Variant::Rfc3074 => hash_rfc3074(key).map(u16::from),
        Variant::Original => hash_original(key).map(u16::from),
        Variant::Wikipedia => Ok(hash_wikipedia(key) as u16),
        Variant::Hash16 => hash16(key),
    }
}

impl Variant {
    /// Hashes `key` with this variant. See [`hasher`].
    pub fn hash(&self, key: &[u8]) -> Result<u16> {
        hasher(key, *self)
    }

    /// Hashes the UTF-8 bytes of `key`.
    pub fn hash_str(&self, key: &str) -> Result<u16> {
        hasher(key.as_bytes(), *self)
    }
}
