//! Cryptographic primitives behind the public operations.
//!
//! Provides the digest table, PBKDF2 key derivation, AES-CBC and the
//! non-zero secure random source.

pub mod aes_cbc;
pub mod digest;
pub mod kdf;
pub mod random;

pub use digest::HashAlgorithm;
pub use kdf::{KeySize, derive_key};
pub use random::secure_random_non_zero;

/// Length of the CBC initialization vector (16 bytes, one AES block).
pub const IV_LEN: usize = 16;
/// Recommended minimum password length in bytes.
pub const MIN_RECOMMENDED_PASSWORD_LEN: usize = 8;
