/// An enum selecting the Pearson hashing variant.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Variant {
    /// RFC 3074: seeded with the key length, bytes consumed last to first.
    Rfc3074,
    /// Pearson's paper: intermediate hash per byte, zero seed.
    Original,
    /// Wikipedia: zero seed, bytes consumed first to last.
    Wikipedia,
    /// Two Wikipedia hashes, the second with a perturbed first byte.
    Hash16,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Rfc3074,
        Variant::Original,
        Variant::Wikipedia,
        Variant::Hash16,
    ];

    pub fn name(&self) -> &str {
        match self {
            Variant::Rfc3074 => "rfc3074",
            Variant::Original => "original",
            Variant::Wikipedia => "wikipedia",
            Variant::Hash16 => "hash16",
        }
    }

    /// Returns the digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Variant::Hash16 => 2,
            _ => 1,
        }
    }
}
