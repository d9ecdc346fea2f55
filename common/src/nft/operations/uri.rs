// Metadata URI resolution and setters.
//
// Resolution priority for `token_uri`:
// 1. per-token override set: base + override, or the override verbatim when
//    the base is empty
// 2. base non-empty: base + decimal token id
// 3. empty string
//
// The effective base is supplied by the caller because it depends on the
// active logic implementation (see `nft::proxy`); the setters below only
// touch persisted state.

use log::debug;

use crate::nft::roles::check_role;
use crate::nft::storage::NftStorage;
use crate::nft::types::{Event, DEFAULT_ADMIN_ROLE};
use crate::nft::{NftError, NftResult};

use super::validation::{validate_base_uri, validate_token_uri};
use super::RuntimeContext;

/// Resolve the metadata URI of `token_id` against `base`
pub fn token_uri<S: NftStorage + ?Sized>(
    storage: &S,
    base: &str,
    token_id: u64,
) -> NftResult<String> {
    if !storage.token_exists(token_id) {
        return Err(NftError::UriQueryNonexistent);
    }

    if let Some(override_uri) = storage.get_token_uri_override(token_id) {
        if base.is_empty() {
            return Ok(override_uri);
        }
        return Ok(format!("{}{}", base, override_uri));
    }

    if base.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{}{}", base, token_id))
}

/// Replace the stored base URI. Requires the admin role.
pub fn set_base_uri<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    new_base: &str,
) -> NftResult<()> {
    check_role(storage, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    validate_base_uri(new_base)?;

    let mut state = storage.get_collection().ok_or(NftError::NotInitialized)?;
    let previous = std::mem::replace(&mut state.base_uri, new_base.to_string());

    debug!("base URI changed from {:?} to {:?}", previous, new_base);
    storage.set_collection(&state)?;
    storage.push_event(Event::BaseUriChanged {
        previous,
        current: new_base.to_string(),
    })?;
    Ok(())
}

/// Set the per-token URI override of an existing token. Requires the admin
/// role. An empty override clears the stored one.
pub fn set_token_uri<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    token_id: u64,
    uri: &str,
) -> NftResult<()> {
    check_role(storage, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    validate_token_uri(uri)?;

    if !storage.token_exists(token_id) {
        return Err(NftError::UriSetNonexistent);
    }

    storage.set_token_uri_override(token_id, uri.to_string())
}
