use sha2::{Digest, Sha256};

/// Unsalted SHA-256, lowercase hex. Identical passwords hash identically;
/// login compares `hash_password(input) == stored_hash`.
pub fn hash_password(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_password("Secur3P@ssw0rd!"), hash_password("Secur3P@ssw0rd!"));
    }

    #[test]
    fn hash_matches_known_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn hash_is_64_hex_chars() {
        let hash = hash_password("anything");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_passwords_hash_differently() {
        assert_ne!(hash_password("one"), hash_password("two"));
    }
}
