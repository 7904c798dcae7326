use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};

use super::{IV_LEN, KeySize};
use crate::error::{CryptoError, Result};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn encrypt_with<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: KeyIvInit + BlockEncryptMut,
{
    let cipher = C::new_from_slices(key, iv)
        .map_err(|_| CryptoError::invalid("key or initialization vector has the wrong length"))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypts into a buffer the size of the ciphertext and returns how many
/// plaintext bytes the single pass produced.
fn decrypt_into<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<usize>
where
    C: KeyIvInit + BlockDecryptMut,
{
    let cipher = C::new_from_slices(key, iv)
        .map_err(|_| CryptoError::invalid("key or initialization vector has the wrong length"))?;
    let plaintext = cipher
        .decrypt_padded_mut::<Pkcs7>(buf)
        .map_err(|e| CryptoError::Decryption(format!("invalid padding or ciphertext: {e}")))?;
    Ok(plaintext.len())
}

fn check_lengths(key: &[u8], iv: &[u8], key_size: KeySize) -> Result<()> {
    if iv.len() != IV_LEN {
        return Err(CryptoError::invalid("initializationVector parameter length must be 16"));
    }
    if key.len() != key_size.bytes() {
        return Err(CryptoError::invalid(format!(
            "key must be {} bytes for AES-{key_size}",
            key_size.bytes()
        )));
    }
    Ok(())
}

/// Encrypt plaintext with AES-CBC and PKCS#7 padding
pub fn encrypt(key: &[u8], iv: &[u8], key_size: KeySize, plaintext: &[u8]) -> Result<Vec<u8>> {
    check_lengths(key, iv, key_size)?;

    match key_size {
        KeySize::Aes128 => encrypt_with::<Aes128CbcEnc>(key, iv, plaintext),
        KeySize::Aes192 => encrypt_with::<Aes192CbcEnc>(key, iv, plaintext),
        KeySize::Aes256 => encrypt_with::<Aes256CbcEnc>(key, iv, plaintext),
    }
}

/// Decrypt ciphertext in place.
///
/// `buf` holds the ciphertext on entry. On success the first `n` bytes are
/// the plaintext, where `n` is the returned count; the rest of the buffer is
/// padding and must be ignored.
pub fn decrypt_in_place(key: &[u8], iv: &[u8], key_size: KeySize, buf: &mut [u8]) -> Result<usize> {
    check_lengths(key, iv, key_size)?;

    match key_size {
        KeySize::Aes128 => decrypt_into::<Aes128CbcDec>(key, iv, buf),
        KeySize::Aes192 => decrypt_into::<Aes192CbcDec>(key, iv, buf),
        KeySize::Aes256 => decrypt_into::<Aes256CbcDec>(key, iv, buf),
    }
}
