// Mint operations.
//
// Three entry points with distinct gating:
// - `safe_mint`: admin-gated, sequential identifiers
// - `sale_mint`: minter-gated, sequential identifiers
// - `mint`: admin-gated, caller-chosen identifier
//
// All paths count against the collection max supply and emit a `Transfer`
// from the zero address.

use log::debug;

use crate::crypto::Address;
use crate::nft::roles::check_role;
use crate::nft::storage::NftStorage;
use crate::nft::types::{CollectionState, Event, RoleId, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use crate::nft::{NftError, NftResult};

use super::validation::validate_recipient;
use super::RuntimeContext;

/// Mint the next sequential token to `to`. Requires the admin role.
pub fn safe_mint<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: Address,
) -> NftResult<u64> {
    mint_sequential(storage, ctx, to, &DEFAULT_ADMIN_ROLE)
}

/// Mint the next sequential token to `to` through the sale path. Requires
/// the minter role.
pub fn sale_mint<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: Address,
) -> NftResult<u64> {
    mint_sequential(storage, ctx, to, &MINTER_ROLE)
}

fn mint_sequential<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: Address,
    required_role: &RoleId,
) -> NftResult<u64> {
    check_role(storage, required_role, &ctx.caller)?;
    validate_recipient(&to)?;

    let mut state = storage.get_collection().ok_or(NftError::NotInitialized)?;
    state.can_mint(1)?;

    let token_id = state.next_token_id;
    state.next_token_id = state.next_token_id.checked_add(1).ok_or(NftError::Overflow)?;

    commit_mint(storage, state, to, token_id)?;
    Ok(token_id)
}

/// Mint a token with an explicit identifier. Requires the admin role and a
/// previously unused identifier.
pub fn mint<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: Address,
    token_id: u64,
) -> NftResult<u64> {
    check_role(storage, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    validate_recipient(&to)?;

    if storage.token_exists(token_id) {
        return Err(NftError::TokenAlreadyMinted);
    }

    let mut state = storage.get_collection().ok_or(NftError::NotInitialized)?;
    state.can_mint(1)?;

    // Keep the sequential counter ahead of explicitly chosen identifiers so
    // the two paths never collide
    if token_id >= state.next_token_id {
        state.next_token_id = token_id.checked_add(1).ok_or(NftError::Overflow)?;
    }

    commit_mint(storage, state, to, token_id)?;
    Ok(token_id)
}

fn commit_mint<S: NftStorage + ?Sized>(
    storage: &mut S,
    mut state: CollectionState,
    to: Address,
    token_id: u64,
) -> NftResult<()> {
    state.total_supply = state.total_supply.checked_add(1).ok_or(NftError::Overflow)?;

    debug!("minting token {} to {}", token_id, to);
    storage.set_collection(&state)?;
    storage.set_token_owner(token_id, to)?;
    storage.increment_balance(&to)?;
    storage.push_event(Event::Transfer {
        from: Address::zero(),
        to,
        token_id,
    })?;
    Ok(())
}
