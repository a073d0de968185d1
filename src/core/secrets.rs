//! Random URL-safe secret tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Bytes of entropy per token. 64 bytes = 512 bits, comfortably above the
/// 256-bit floor for a signing key.
pub const TOKEN_BYTES: usize = 64;

/// Generate one URL-safe token from `TOKEN_BYTES` of CSPRNG output,
/// base64url-encoded without padding.
pub fn token_urlsafe() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_expected_length() {
        // 64 bytes → ceil(64 * 4 / 3) = 86 chars without padding
        assert_eq!(token_urlsafe().len(), 86);
    }

    #[test]
    fn token_uses_urlsafe_alphabet() {
        let token = token_urlsafe();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn tokens_are_independent() {
        assert_ne!(token_urlsafe(), token_urlsafe());
    }
}
