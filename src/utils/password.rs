use bcrypt::{hash, DEFAULT_COST};
use rand::Rng;

/// Characters allowed in generated passwords
const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  abcdefghijklmnopqrstuvwxyz\
                                  0123456789";

/// Length of generated account passwords
pub const GENERATED_PASSWORD_LEN: usize = 10;

/// Generates a random alphanumeric password
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_CHARSET.len());
            PASSWORD_CHARSET[idx] as char
        })
        .collect()
}

/// Hashes a clear-text password with bcrypt
pub fn hash_password(plain: &str) -> Result<String, String> {
    hash(plain, DEFAULT_COST).map_err(|e| format!("Failed to hash password: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length() {
        let password = generate_password(GENERATED_PASSWORD_LEN);
        assert_eq!(password.len(), 10);
    }

    #[test]
    fn test_generated_password_charset() {
        let password = generate_password(64);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_passwords_differ() {
        let a = generate_password(GENERATED_PASSWORD_LEN);
        let b = generate_password(GENERATED_PASSWORD_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_password_verifies() {
        let hashed = hash_password("s3cret").unwrap();
        assert!(bcrypt::verify("s3cret", &hashed).unwrap());
        assert!(!bcrypt::verify("wrong", &hashed).unwrap());
    }
}
