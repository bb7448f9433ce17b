//! Cryptographic utilities for invite token generation.

use rand::RngCore;

/// Minimum length of an invite token in hex characters.
pub const MIN_TOKEN_LEN: usize = 48;

/// Generates a random lowercase-hex token of `len` characters.
///
/// Bytes come from the thread-local CSPRNG; the hex rendering is URL-safe
/// and can be embedded in a registration link as a query parameter.
pub fn generate_hex_token(len: usize) -> String {
    let mut bytes = vec![0u8; len.div_ceil(2)];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut token = hex::encode(bytes);
    token.truncate(len);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_hex_token_length() {
        assert_eq!(generate_hex_token(48).len(), 48);
        assert_eq!(generate_hex_token(47).len(), 47);
        assert_eq!(generate_hex_token(64).len(), 64);
    }

    #[test]
    fn test_generate_hex_token_charset() {
        let token = generate_hex_token(48);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_lowercase());
    }

    #[test]
    fn test_generate_hex_token_unique() {
        let a = generate_hex_token(48);
        let b = generate_hex_token(48);
        assert_ne!(a, b);
    }

    #[test]
    fn test_min_token_len_constant() {
        assert_eq!(MIN_TOKEN_LEN, 48);
        assert_eq!(generate_hex_token(MIN_TOKEN_LEN).len(), MIN_TOKEN_LEN);
    }
}
