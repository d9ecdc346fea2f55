// Core data structures for the token contract model.

use crate::crypto::{keccak256, Address, Hash};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};

use super::error::NftError;

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Maximum base URI length (bytes)
pub const MAX_BASE_URI_LENGTH: usize = 256;

/// Maximum per-token URI override length (bytes)
pub const MAX_TOKEN_URI_LENGTH: usize = 512;

// ========================================
// Roles
// ========================================

/// A role identifier: a named capability group whose members are authorized
/// for specific privileged operations. Derived roles use the keccak256 hash
/// of the role name, matching the on-chain derivation.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct RoleId(Hash);

impl RoleId {
    pub const fn new(hash: Hash) -> Self {
        RoleId(hash)
    }

    /// Derive a role identifier from its name
    pub fn derived(name: &str) -> Self {
        RoleId(keccak256(name.as_bytes()))
    }
}

impl Display for RoleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        Display::fmt(&self.0, f)
    }
}

/// Admin role: manages every other role and the privileged setters
pub const DEFAULT_ADMIN_ROLE: RoleId = RoleId::new(Hash::zero());

lazy_static! {
    /// Role allowed to mint through the sale path
    pub static ref MINTER_ROLE: RoleId = RoleId::derived("MINTER_ROLE");

    /// Role allowed to swap the logic implementation
    pub static ref UPGRADER_ROLE: RoleId = RoleId::derived("UPGRADER_ROLE");
}

// ========================================
// Collection State
// ========================================

/// Initialization parameters, applied once at deployment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitParams {
    /// Token name (max 64 bytes)
    pub name: String,

    /// Token symbol (max 8 bytes)
    pub symbol: String,

    /// Initial base URI (max 256 bytes)
    pub base_uri: String,

    /// Maximum number of tokens that can ever be minted
    pub max_supply: u64,
}

impl InitParams {
    pub fn new(name: &str, symbol: &str, base_uri: &str, max_supply: u64) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            base_uri: base_uri.to_string(),
            max_supply,
        }
    }

    /// Validate the initialization parameters
    pub fn validate(&self) -> Result<(), NftError> {
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(NftError::NameTooLong);
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(NftError::SymbolTooLong);
        }
        if self.base_uri.len() > MAX_BASE_URI_LENGTH {
            return Err(NftError::UriTooLong);
        }
        Ok(())
    }
}

/// Persisted collection state.
///
/// This lives behind the proxy and survives logic upgrades unchanged; the
/// logic implementation never owns any of it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollectionState {
    /// Token name
    pub name: String,

    /// Token symbol
    pub symbol: String,

    /// Deployer address, holder of the initial admin role
    pub owner: Address,

    /// Global base URI (mutable by admin)
    pub base_uri: String,

    /// Maximum supply
    pub max_supply: u64,

    /// Next sequential token ID (starts at 0)
    pub next_token_id: u64,

    /// Current total supply
    pub total_supply: u64,
}

impl CollectionState {
    pub fn new(params: &InitParams, owner: Address) -> Self {
        Self {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            owner,
            base_uri: params.base_uri.clone(),
            max_supply: params.max_supply,
            next_token_id: 0,
            total_supply: 0,
        }
    }

    /// Check if `count` more tokens can be minted
    pub fn can_mint(&self, count: u64) -> Result<(), NftError> {
        let new_supply = self
            .total_supply
            .checked_add(count)
            .ok_or(NftError::Overflow)?;
        if new_supply > self.max_supply {
            return Err(NftError::MaxSupplyExceeded);
        }
        Ok(())
    }
}

// ========================================
// Events
// ========================================

/// Observable events, appended to the storage log only when the emitting
/// call succeeds as a whole
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Token ownership change; mints use the zero address as `from`
    Transfer {
        from: Address,
        to: Address,
        token_id: u64,
    },

    /// Role membership granted to an account
    RoleGranted {
        role: RoleId,
        account: Address,
        sender: Address,
    },

    /// Role membership revoked from an account
    RoleRevoked {
        role: RoleId,
        account: Address,
        sender: Address,
    },

    /// Global base URI replaced
    BaseUriChanged { previous: String, current: String },

    /// Logic implementation swapped
    Upgraded { version: String },
}

impl Event {
    /// Event name as asserted by callers
    pub fn name(&self) -> &'static str {
        match self {
            Event::Transfer { .. } => "Transfer",
            Event::RoleGranted { .. } => "RoleGranted",
            Event::RoleRevoked { .. } => "RoleRevoked",
            Event::BaseUriChanged { .. } => "BaseURIChanged",
            Event::Upgraded { .. } => "Upgraded",
        }
    }
}
