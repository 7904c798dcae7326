//! Cipher configuration.
//!
//! [`CipherConfig`] bundles everything the password cipher needs for one
//! call. [`CipherProfile`] is the non-secret part of it, which can be kept in
//! a JSON file and combined with a password at runtime.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::crypto::{IV_LEN, KeySize};
use crate::error::{CryptoError, Result};

/// Settings for [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
///
/// The salt is used as ASCII text for key derivation, and the IV must be
/// exactly 16 ASCII characters.
#[derive(Clone, Serialize, Deserialize)]
pub struct CipherConfig {
    salt: String,
    password: String,
    iterations: u32,
    initialization_vector: String,
    #[serde(default)]
    key_size: KeySize,
}

impl Drop for CipherConfig {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("salt_len", &self.salt.len())
            .field("password", &"<redacted>")
            .field("iterations", &self.iterations)
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

impl CipherConfig {
    pub fn new(
        salt: impl Into<String>,
        password: impl Into<String>,
        iterations: u32,
        initialization_vector: impl Into<String>,
        key_size: KeySize,
    ) -> Result<Self> {
        let config = Self {
            salt: salt.into(),
            password: password.into(),
            iterations,
            initialization_vector: initialization_vector.into(),
            key_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn initialization_vector(&self) -> &str {
        &self.initialization_vector
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Checks the IV length and iteration count.
    ///
    /// Password length is not enforced.
    pub fn validate(&self) -> Result<()> {
        if self.initialization_vector.chars().count() != IV_LEN {
            return Err(CryptoError::invalid(
                "initializationVector parameter length must be 16",
            ));
        }
        if self.iterations == 0 {
            return Err(CryptoError::invalid("iteration count must be positive"));
        }
        Ok(())
    }
}

/// Non-secret cipher settings, as stored in a profile file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherProfile {
    pub salt: Option<String>,
    pub iterations: Option<u32>,
    pub initialization_vector: Option<String>,
    pub key_size: Option<KeySize>,
}

impl CipherProfile {
    /// Reads a profile from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cipher profile {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid cipher profile {}", path.display()))
    }

    /// Fills unset fields from `fallback`.
    pub fn or(self, fallback: CipherProfile) -> Self {
        Self {
            salt: self.salt.or(fallback.salt),
            iterations: self.iterations.or(fallback.iterations),
            initialization_vector: self.initialization_vector.or(fallback.initialization_vector),
            key_size: self.key_size.or(fallback.key_size),
        }
    }

    /// Combines the profile with a password into a validated [`CipherConfig`].
    pub fn into_config(self, password: &str, default_iterations: u32) -> Result<CipherConfig> {
        let salt = self
            .salt
            .ok_or_else(|| CryptoError::invalid("cipher salt is not set"))?;
        let iv = self
            .initialization_vector
            .ok_or_else(|| CryptoError::invalid("initialization vector is not set"))?;

        CipherConfig::new(
            salt,
            password,
            self.iterations.unwrap_or(default_iterations),
            iv,
            self.key_size.unwrap_or_default(),
        )
    }
}
