//! Salted password hashing.
//!
//! Stored hashes have the shape `<salt>:<digest>` where the salt is 16 random bytes
//! and the digest is SHA-256 over the password followed by the salt, both hex encoded.

use sha2::{Digest, Sha256};

const SALT_LENGTH: usize = 16;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `String` - `<salt>:<digest>` ready to be stored
pub fn hash_password(password: &str) -> String {
    let salt_bytes: [u8; SALT_LENGTH] = rand::random();
    let salt = to_hex(&salt_bytes);
    let hash = digest(password, &salt);

    format!("{}:{}", salt, hash)
}

/// Checks a plaintext password against a stored `<salt>:<digest>` value.
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, hash)) = stored.split_once(':') else {
        return false;
    };
    if salt.is_empty() || hash.is_empty() {
        return false;
    }

    digest(password, salt) == hash
}

fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    to_hex(&hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
