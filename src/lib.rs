//! Salted password hashing and password-based text encryption.
//!
//! Two independent capabilities share one encoding convention, base64 text
//! for every binary value:
//!
//! - [`create_salt`], [`compute_hash`] and [`verify_hash`] store a password as
//!   `base64(digest ++ salt)` and check candidates against it.
//! - [`encrypt`] and [`decrypt`] derive an AES key from a password with
//!   PBKDF2 and run AES-CBC over UTF-8 text, configured by a [`CipherConfig`].
//!
//! ```no_run
//! use passcrypt::{HashAlgorithm, compute_hash, create_salt, verify_hash};
//!
//! let salt = create_salt(16)?;
//! let stored = compute_hash("hunter22", HashAlgorithm::Sha256, &salt)?;
//! assert!(verify_hash("hunter22", HashAlgorithm::Sha256, &stored)?);
//! # Ok::<(), passcrypt::CryptoError>(())
//! ```

mod cipher;
pub mod config;
pub mod crypto;
mod encoding;
mod error;
mod hasher;
mod salt;

pub use crate::cipher::{decrypt, encrypt};
pub use crate::config::{CipherConfig, CipherProfile};
pub use crate::crypto::{HashAlgorithm, KeySize};
pub use crate::encoding::{from_base64, to_base64};
pub use crate::error::{CryptoError, Result};
pub use crate::hasher::{compute_hash, verify_hash};
pub use crate::salt::{DEFAULT_SALT_LEN, create_salt};

/// Iteration count used when a caller does not choose one.
pub const DEFAULT_ITERATIONS: u32 = 1000;
