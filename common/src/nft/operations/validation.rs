// Input validation helpers for token operations.

use crate::crypto::Address;
use crate::nft::{NftError, NftResult, MAX_BASE_URI_LENGTH, MAX_TOKEN_URI_LENGTH};

/// Validate a mint recipient (must be non-zero)
pub fn validate_recipient(recipient: &Address) -> NftResult<()> {
    if recipient.is_zero() {
        return Err(NftError::MintToZeroAddress);
    }
    Ok(())
}

/// Validate a base URI
pub fn validate_base_uri(uri: &str) -> NftResult<()> {
    if uri.len() > MAX_BASE_URI_LENGTH {
        return Err(NftError::UriTooLong);
    }
    Ok(())
}

/// Validate a per-token URI override
pub fn validate_token_uri(uri: &str) -> NftResult<()> {
    if uri.len() > MAX_TOKEN_URI_LENGTH {
        return Err(NftError::UriTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ADDRESS_SIZE;

    #[test]
    fn test_validate_recipient() {
        assert_eq!(
            validate_recipient(&Address::zero()),
            Err(NftError::MintToZeroAddress)
        );
        assert!(validate_recipient(&Address::new([1; ADDRESS_SIZE])).is_ok());
    }

    #[test]
    fn test_validate_uris() {
        assert!(validate_base_uri("https://mvlnft.io/meta/").is_ok());
        assert!(validate_base_uri(&"x".repeat(MAX_BASE_URI_LENGTH + 1)).is_err());
        assert!(validate_token_uri(&"x".repeat(MAX_TOKEN_URI_LENGTH)).is_ok());
        assert!(validate_token_uri(&"x".repeat(MAX_TOKEN_URI_LENGTH + 1)).is_err());
    }
}
