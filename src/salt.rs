use log::debug;

use crate::crypto::secure_random_non_zero;
use crate::encoding::to_base64;
use crate::error::{CryptoError, Result};

/// Default salt length used by the CLI when none is requested.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Generates `size` random non-zero bytes and returns them as base64.
pub fn create_salt(size: usize) -> Result<String> {
    if size == 0 {
        return Err(CryptoError::invalid("salt size must be positive"));
    }

    let mut buf = vec![0u8; size];
    secure_random_non_zero(&mut buf)?;
    debug!("generated {size}-byte salt");

    Ok(to_base64(&buf))
}
