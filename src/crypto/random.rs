use getrandom::fill;

use crate::error::{CryptoError, Result};

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|e| CryptoError::RandomSource(e.to_string()))
}

/// Fill buffer with cryptographically secure random bytes, none of them zero.
///
/// Zero bytes from the OS source are redrawn one at a time, so every
/// non-zero value stays equally likely.
pub fn secure_random_non_zero(buf: &mut [u8]) -> Result<()> {
    secure_random(buf)?;

    let mut redraw = [0u8; 1];
    for byte in buf.iter_mut() {
        while *byte == 0 {
            secure_random(&mut redraw)?;
            *byte = redraw[0];
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_without_zero_bytes() {
        let mut buf = [0u8; 4096];
        secure_random_non_zero(&mut buf).unwrap();
        assert!(buf.iter().all(|b| *b != 0));
    }

    #[test]
    fn two_draws_differ() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        secure_random_non_zero(&mut a).unwrap();
        secure_random_non_zero(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_buffer_is_ok() {
        let mut buf = [0u8; 0];
        secure_random_non_zero(&mut buf).unwrap();
    }
}
