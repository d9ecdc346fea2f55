// Contract initialization.
//
// One-shot setup equivalent to the proxy-deploy initializer: records the
// collection parameters, marks the deployer as owner and seeds the
// deployer's roles (admin, minter, upgrader).

use log::debug;

use crate::nft::roles::grant_role_unchecked;
use crate::nft::storage::NftStorage;
use crate::nft::types::{CollectionState, InitParams, DEFAULT_ADMIN_ROLE, MINTER_ROLE, UPGRADER_ROLE};
use crate::nft::{NftError, NftResult};

use super::RuntimeContext;

/// Initialize the collection state. Fails if already initialized.
pub fn initialize<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    params: InitParams,
) -> NftResult<()> {
    params.validate()?;

    if storage.get_collection().is_some() {
        return Err(NftError::AlreadyInitialized);
    }

    let state = CollectionState::new(&params, ctx.caller);
    debug!(
        "initializing collection {} ({}) with max supply {} for {}",
        state.name, state.symbol, state.max_supply, state.owner
    );
    storage.set_collection(&state)?;

    // Deployer holds every distinguished role out of the gate
    grant_role_unchecked(storage, ctx, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    grant_role_unchecked(storage, ctx, &MINTER_ROLE, &ctx.caller)?;
    grant_role_unchecked(storage, ctx, &UPGRADER_ROLE, &ctx.caller)?;

    Ok(())
}
