//! Checksum of the raw launch table, reported by the health endpoint.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"Launch Site,class\nA,1\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(calculate_checksum(b"A,1"), calculate_checksum(b"A,0"));
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = calculate_checksum(b"");
        assert_eq!(checksum.len(), 64);
        assert_eq!(
            checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
