use std::fmt;
use std::str::FromStr;

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};

/// Symmetric key size for the password cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum KeySize {
    Aes128,
    Aes192,
    #[default]
    Aes256,
}

impl KeySize {
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl TryFrom<u32> for KeySize {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            _ => Err(CryptoError::invalid(format!(
                "unsupported key size {bits}; expected 128, 192 or 256"
            ))),
        }
    }
}

impl From<KeySize> for u32 {
    fn from(size: KeySize) -> Self {
        size.bits()
    }
}

impl FromStr for KeySize {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        let bits: u32 = s
            .trim()
            .parse()
            .map_err(|_| CryptoError::invalid(format!("key size '{s}' is not a number")))?;
        KeySize::try_from(bits)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Derive a cipher key from a password with PBKDF2-HMAC-SHA1.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
    key_size: KeySize,
) -> Result<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(CryptoError::invalid("iteration count must be positive"));
    }

    let mut key = Zeroizing::new(vec![0u8; key_size.bytes()]);
    pbkdf2_hmac::<Sha1>(password.as_bytes(), salt, iterations, &mut key);

    Ok(key)
}
