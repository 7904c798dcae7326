//! Password-based text encryption.
//!
//! The key is derived with PBKDF2 from the config's password and the ASCII
//! bytes of its salt text. The salt is not base64-decoded here, unlike in
//! hashing; changing that would change every derived key. Ciphertext is
//! AES-CBC with PKCS#7 padding, base64-encoded, with no integrity tag.

use log::{debug, warn};
use zeroize::Zeroizing;

use crate::config::CipherConfig;
use crate::crypto::{MIN_RECOMMENDED_PASSWORD_LEN, aes_cbc, derive_key};
use crate::encoding::{ascii_bytes, from_base64, to_base64};
use crate::error::Result;

fn cipher_key(config: &CipherConfig) -> Result<Zeroizing<Vec<u8>>> {
    config.validate()?;

    if config.password().len() < MIN_RECOMMENDED_PASSWORD_LEN {
        warn!(
            "cipher password is shorter than the recommended {MIN_RECOMMENDED_PASSWORD_LEN} bytes"
        );
    }

    let salt = ascii_bytes(config.salt());
    debug!(
        "deriving AES-{} key: {} iterations, {}-byte salt",
        config.key_size(),
        config.iterations(),
        salt.len()
    );
    derive_key(config.password(), &salt, config.iterations(), config.key_size())
}

/// Encrypts `plaintext` and returns base64 ciphertext.
///
/// # Errors
///
/// Returns `InvalidArgument` if the IV is not 16 characters or the iteration
/// count is zero.
pub fn encrypt(plaintext: &str, config: &CipherConfig) -> Result<String> {
    let key = cipher_key(config)?;
    let iv = ascii_bytes(config.initialization_vector());

    let ciphertext = aes_cbc::encrypt(&key, &iv, config.key_size(), plaintext.as_bytes())?;
    debug!(
        "encrypted {} bytes into {} bytes",
        plaintext.len(),
        ciphertext.len()
    );

    Ok(to_base64(&ciphertext))
}

/// Decrypts base64 ciphertext produced by [`encrypt`].
///
/// The text is decoded from exactly the bytes one decryption pass reports.
/// Invalid UTF-8 is replaced rather than rejected, so a tampered ciphertext
/// with valid padding decrypts to garbled text.
///
/// # Errors
///
/// Returns `InvalidArgument` for malformed base64 or a bad config, and
/// `Decryption` when the cipher or padding check fails (wrong password,
/// wrong IV, corrupted data).
pub fn decrypt(ciphertext: &str, config: &CipherConfig) -> Result<String> {
    let key = cipher_key(config)?;
    let iv = ascii_bytes(config.initialization_vector());

    let mut buf = Zeroizing::new(from_base64(ciphertext, "ciphertext")?);
    let count = aes_cbc::decrypt_in_place(&key, &iv, config.key_size(), &mut buf)?;
    debug!("decrypted {} bytes into {count} bytes", buf.len());

    Ok(String::from_utf8_lossy(&buf[..count]).into_owned())
}
