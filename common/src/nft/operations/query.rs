// Read-only queries over the collection state.

use crate::crypto::Address;
use crate::nft::storage::NftStorage;
use crate::nft::{NftError, NftResult};

/// Owner of a token, or the canonical nonexistent-token error
pub fn owner_of<S: NftStorage + ?Sized>(storage: &S, token_id: u64) -> NftResult<Address> {
    storage
        .get_token_owner(token_id)
        .ok_or(NftError::NonexistentToken)
}

/// Number of tokens minted so far
pub fn total_supply<S: NftStorage + ?Sized>(storage: &S) -> u64 {
    storage
        .get_collection()
        .map(|state| state.total_supply)
        .unwrap_or(0)
}

/// Number of tokens held by `account`
pub fn balance_of<S: NftStorage + ?Sized>(storage: &S, account: &Address) -> u64 {
    storage.get_balance(account)
}

/// Deployer address (holder of the initial admin role)
pub fn owner<S: NftStorage + ?Sized>(storage: &S) -> NftResult<Address> {
    storage
        .get_collection()
        .map(|state| state.owner)
        .ok_or(NftError::NotInitialized)
}

/// Collection name
pub fn name<S: NftStorage + ?Sized>(storage: &S) -> NftResult<String> {
    storage
        .get_collection()
        .map(|state| state.name)
        .ok_or(NftError::NotInitialized)
}

/// Collection symbol
pub fn symbol<S: NftStorage + ?Sized>(storage: &S) -> NftResult<String> {
    storage
        .get_collection()
        .map(|state| state.symbol)
        .ok_or(NftError::NotInitialized)
}
