use crate::consts::PEARSON_T;
use crate::error::{PearsonError, Result};

/// Maximal key length for [`hash_rfc3074`]. The length seeds the hash and has to fit in a byte.
pub const RFC3074_MAX_KEY_LEN: usize = u8::MAX as usize;

/// Folds `bytes` into `seed` with `h = T[h ^ b]`.
#[inline]
pub fn fold<I: IntoIterator<Item = u8>>(seed: u8, bytes: I) -> u8 {
    bytes
        .into_iter()
        .fold(seed, |h, b| PEARSON_T[(h ^ b) as usize])
}

/// Pearson hashing as described in RFC 3074.
///
/// The hash is seeded with the key length and the key is consumed from its last byte to its
/// first. Keys longer than [`RFC3074_MAX_KEY_LEN`] are rejected rather than hashed with a
/// truncated seed.
pub fn hash_rfc3074(key: &[u8]) -> Result<u8> {
    let len = u8::try_from(key.len()).map_err(|_| PearsonError::KeyTooLong { len: key.len() })?;
    Ok(fold(len, key.iter().rev().copied()))
}

/// Intermediate hash values of the original paper's formulation, one per key byte.
///
/// `hash[i] = T[hash[i - 1] ^ key[i]]`, where the value before the first byte is taken as 0.
pub fn intermediates(key: &[u8]) -> Vec<u8> {
    key.iter()
        .scan(0u8, |h, &b| {
            *h = PEARSON_T[(*h ^ b) as usize];
            Some(*h)
        })
        .collect()
}

/// Pearson hashing as described in the original paper, using the RFC 3074 table.
///
/// The digest is the last intermediate value. With the zero seed this always agrees with
/// [`hash_wikipedia`], but an empty key has no last value and is an error.
pub fn hash_original(key: &[u8]) -> Result<u8> {
    if key.is_empty() {
        return Err(PearsonError::EmptyKey);
    }
    // Same as the last element of `intermediates(key)`, without the allocation.
    Ok(hash_wikipedia(key))
}

/// Pearson hashing as described in Wikipedia: zero seed, bytes consumed in order.
#[inline]
pub fn hash_wikipedia(key: &[u8]) -> u8 {
    fold(0, key.iter().copied())
}

/// 16-bit Pearson hash.
///
/// The high byte is [`hash_wikipedia`] of the key, the low byte is the same hash taken after
/// replacing the first byte `b` with `(b + 1) % 255`.
pub fn hash16(key: &[u8]) -> Result<u16> {
    let mut buf = key.to_vec();
    let first = buf.first_mut().ok_or(PearsonError::EmptyKey)?;

    let h1 = hash_wikipedia(key);
    *first = ((*first as u16 + 1) % 255) as u8;
    let h2 = hash_wikipedia(&buf);

    Ok(((h1 as u16) << 8) | h2 as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keys() {
        assert_eq!(hash_wikipedia(b""), 0);
        assert_eq!(hash_rfc3074(b""), Ok(0));
        assert_eq!(hash_original(b""), Err(PearsonError::EmptyKey));
        assert_eq!(hash16(b""), Err(PearsonError::EmptyKey));
        assert!(intermediates(b"").is_empty());
    }

    #[test]
    fn single_byte_is_a_table_lookup() {
        for b in 0..=255u8 {
            assert_eq!(hash_wikipedia(&[b]), PEARSON_T[b as usize]);
            assert_eq!(hash_rfc3074(&[b]), Ok(PEARSON_T[(1 ^ b) as usize]));
        }
        assert_eq!(hash_wikipedia(b"a"), 113);
    }

    #[test]
    fn rfc3074_reads_backwards() {
        let key = b"abc";
        let mut h = 3u8;
        for &b in key.iter().rev() {
            h = PEARSON_T[(h ^ b) as usize];
        }
        assert_eq!(hash_rfc3074(key), Ok(h));
        assert_eq!(hash_rfc3074(key), Ok(170));
    }

    #[test]
    fn rfc3074_length_boundary() {
        let key = vec![b'a'; RFC3074_MAX_KEY_LEN];
        assert_eq!(hash_rfc3074(&key), Ok(248));

        let key = vec![b'a'; RFC3074_MAX_KEY_LEN + 1];
        let err = hash_rfc3074(&key).unwrap_err();
        assert_eq!(err, PearsonError::KeyTooLong { len: 256 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn original_matches_intermediates() {
        for key in [&b"a"[..], &b"ab"[..], &b"hello"[..], &b"\x00\xff\x80"[..]] {
            let steps = intermediates(key);
            assert_eq!(steps.len(), key.len());
            assert_eq!(hash_original(key), Ok(*steps.last().unwrap()));
            assert_eq!(hash_original(key), Ok(hash_wikipedia(key)));
        }
        assert_eq!(intermediates(b"ab"), vec![113, 60]);
    }

    #[test]
    fn hash16_halves() {
        let key = b"hello";
        let h = hash16(key).unwrap();
        assert_eq!(h, 0xb9c0);
        assert_eq!((h >> 8) as u8, hash_wikipedia(key));
        assert_eq!(h as u8, hash_wikipedia(b"iello"));
    }

    #[test]
    fn hash16_first_byte_wraps_mod_255() {
        // 254 + 1 wraps to 0 and 255 + 1 wraps to 1.
        assert_eq!(hash16(&[254]).unwrap() as u8, PEARSON_T[0]);
        assert_eq!(hash16(&[255]).unwrap(), 0x97af);
        assert_eq!(hash16(&[255]).unwrap() as u8, PEARSON_T[1]);
    }

    #[test]
    fn fold_with_seed() {
        assert_eq!(fold(0, std::iter::empty()), 0);
        assert_eq!(fold(7, std::iter::empty()), 7);
        assert_eq!(fold(0, b"ab".iter().copied()), hash_wikipedia(b"ab"));
    }
}
