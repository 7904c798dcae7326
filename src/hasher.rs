//! Salted one-way hashing.
//!
//! A salted digest is stored as `base64(digest ++ salt)`. Verification strips
//! the digest-sized prefix to recover the salt, recomputes the hash with it
//! and compares the two base64 texts.

use log::debug;
use subtle::ConstantTimeEq;

use crate::crypto::HashAlgorithm;
use crate::encoding::{from_base64, to_base64};
use crate::error::Result;

fn salted_digest(plaintext: &str, algorithm: HashAlgorithm, salt: &[u8]) -> String {
    let mut input = Vec::with_capacity(plaintext.len() + salt.len());
    input.extend_from_slice(plaintext.as_bytes());
    input.extend_from_slice(salt);

    let mut out = algorithm.digest(&input);
    out.extend_from_slice(salt);
    to_base64(&out)
}

/// Hashes `plaintext ++ salt` with `algorithm` and returns `base64(digest ++ salt)`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `salt_base64` is not valid base64.
pub fn compute_hash(plaintext: &str, algorithm: HashAlgorithm, salt_base64: &str) -> Result<String> {
    let salt = from_base64(salt_base64, "salt")?;
    debug!("computing {algorithm} hash with {}-byte salt", salt.len());
    Ok(salted_digest(plaintext, algorithm, &salt))
}

/// Checks `plaintext` against a value produced by [`compute_hash`].
///
/// A candidate that decodes to fewer bytes than the algorithm's digest is a
/// mismatch, not an error. The final comparison runs in constant time over
/// the base64 texts.
///
/// # Errors
///
/// Returns `InvalidArgument` if `candidate` is not valid base64.
pub fn verify_hash(plaintext: &str, algorithm: HashAlgorithm, candidate: &str) -> Result<bool> {
    let decoded = from_base64(candidate, "hash")?;
    let digest_len = algorithm.digest_size_bytes();
    if decoded.len() < digest_len {
        debug!(
            "{algorithm} candidate too short: {} < {digest_len} bytes",
            decoded.len()
        );
        return Ok(false);
    }

    let salt = &decoded[digest_len..];
    // recompute through the base64 salt text, as stored
    let salt_base64 = to_base64(salt);
    let expected = compute_hash(plaintext, algorithm, &salt_base64)?;

    Ok(bool::from(expected.as_bytes().ct_eq(candidate.as_bytes())))
}
