//! Keyed hash chain over device codes.
//!
//! Each step hashes the previous code with SipHash-2-4 under the device key
//! and folds the digest back into a nine-digit code. Without the key the
//! next code cannot be predicted.

use crate::fold::fold_digest;
use crate::key::SecretKey;
use siphasher::sip::SipHasher24;
use std::hash::Hasher;

/// Derives the next code in the chain from `last_code`.
///
/// Only the low 32 bits of `last_code` take part. The hashed block is those
/// four big-endian bytes written twice, which is what devices hash; a plain
/// 8-byte encoding of the code would produce a different chain.
#[must_use]
pub fn next_token(last_code: u64, key: &SecretKey) -> u32 {
    let word = (last_code as u32).to_be_bytes();
    let mut block = [0u8; 8];
    block[..4].copy_from_slice(&word);
    block[4..].copy_from_slice(&word);

    let mut hasher = SipHasher24::new_with_key(key.as_bytes());
    hasher.write(&block);
    fold_digest(hasher.finish())
}

/// Applies [`next_token`] `steps` times starting from `seed`.
///
/// Zero steps returns `seed` unchanged.
#[must_use]
pub fn hop_chain(seed: u64, key: &SecretKey, steps: u64) -> u64 {
    (0..steps).fold(seed, |code, _| u64::from(next_token(code, key)))
}
