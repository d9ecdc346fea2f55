// Error types for the token contract model.
//
// Message text is part of the contract surface: callers match on the
// rendered string, so every #[error] literal below must stay byte-for-byte
// compatible with the revert reasons of the modeled contract.

use crate::crypto::Address;
use thiserror::Error;

use super::types::RoleId;

/// Token operation result type
pub type NftResult<T> = Result<T, NftError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NftError {
    // ========================================
    // Access control violations
    // ========================================
    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: Address, role: RoleId },

    // ========================================
    // Invariant violations
    // ========================================
    #[error("Purchase would exceed max tokens")]
    MaxSupplyExceeded,

    #[error("ERC721: owner query for nonexistent token")]
    NonexistentToken,

    #[error("ERC721: token already minted")]
    TokenAlreadyMinted,

    #[error("ERC721: mint to the zero address")]
    MintToZeroAddress,

    #[error("ERC721Metadata: URI query for nonexistent token")]
    UriQueryNonexistent,

    #[error("ERC721URIStorage: URI set of nonexistent token")]
    UriSetNonexistent,

    #[error("Initializable: contract is already initialized")]
    AlreadyInitialized,

    #[error("Initializable: contract is not initialized")]
    NotInitialized,

    // ========================================
    // Input validation
    // ========================================
    #[error("Name too long")]
    NameTooLong,

    #[error("Symbol too long")]
    SymbolTooLong,

    #[error("URI too long")]
    UriTooLong,

    #[error("Arithmetic overflow")]
    Overflow,
}

impl NftError {
    /// Whether the failure is an access-control violation (recoverable by
    /// obtaining the role) as opposed to an invariant violation (terminal
    /// for that call)
    pub fn is_access_violation(&self) -> bool {
        matches!(self, NftError::MissingRole { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ADDRESS_SIZE;
    use crate::nft::DEFAULT_ADMIN_ROLE;

    #[test]
    fn test_missing_role_message() {
        let account = Address::new([0xAB; ADDRESS_SIZE]);
        let err = NftError::MissingRole {
            account,
            role: DEFAULT_ADMIN_ROLE,
        };
        assert_eq!(
            err.to_string(),
            "AccessControl: account 0xabababababababababababababababababababab is missing role \
             0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_invariant_messages() {
        assert_eq!(
            NftError::MaxSupplyExceeded.to_string(),
            "Purchase would exceed max tokens"
        );
        assert_eq!(
            NftError::NonexistentToken.to_string(),
            "ERC721: owner query for nonexistent token"
        );
    }

    #[test]
    fn test_error_kinds() {
        let err = NftError::MissingRole {
            account: Address::zero(),
            role: DEFAULT_ADMIN_ROLE,
        };
        assert!(err.is_access_violation());
        assert!(!NftError::MaxSupplyExceeded.is_access_violation());
    }
}
