// Role-based access control layer.
//
// Roles are capability sets: a mapping from role identifier to member
// addresses, checked before every privileged operation. Grant and revoke
// are admin-gated and idempotent; events are emitted only when membership
// actually changes.

use log::debug;

use crate::crypto::Address;

use super::error::{NftError, NftResult};
use super::operations::RuntimeContext;
use super::storage::NftStorage;
use super::types::{Event, RoleId, DEFAULT_ADMIN_ROLE, MINTER_ROLE};

/// Pure membership query
pub fn has_role<S: NftStorage + ?Sized>(storage: &S, role: &RoleId, account: &Address) -> bool {
    storage.has_role(role, account)
}

/// Fail with the canonical access-control message if `account` is not a
/// member of `role`
pub fn check_role<S: NftStorage + ?Sized>(
    storage: &S,
    role: &RoleId,
    account: &Address,
) -> NftResult<()> {
    if storage.has_role(role, account) {
        Ok(())
    } else {
        Err(NftError::MissingRole {
            account: *account,
            role: role.clone(),
        })
    }
}

/// Grant `role` to `account`. Requires the caller to hold the admin role.
/// Idempotent: granting an existing member succeeds without an event.
pub fn grant_role<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    role: &RoleId,
    account: &Address,
) -> NftResult<()> {
    check_role(storage, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    grant_role_unchecked(storage, ctx, role, account)
}

/// Grant without the admin check. Used during initialization to seed the
/// deployer's roles.
pub(super) fn grant_role_unchecked<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    role: &RoleId,
    account: &Address,
) -> NftResult<()> {
    if storage.add_role_member(role, account)? {
        debug!("role {} granted to {} by {}", role, account, ctx.caller);
        storage.push_event(Event::RoleGranted {
            role: role.clone(),
            account: *account,
            sender: ctx.caller,
        })?;
    }
    Ok(())
}

/// Revoke `role` from `account`. Requires the caller to hold the admin
/// role. Idempotent: revoking a non-member succeeds without an event.
pub fn revoke_role<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    role: &RoleId,
    account: &Address,
) -> NftResult<()> {
    check_role(storage, &DEFAULT_ADMIN_ROLE, &ctx.caller)?;
    if storage.remove_role_member(role, account)? {
        debug!("role {} revoked from {} by {}", role, account, ctx.caller);
        storage.push_event(Event::RoleRevoked {
            role: role.clone(),
            account: *account,
            sender: ctx.caller,
        })?;
    }
    Ok(())
}

/// Admin convenience wrapper: add `account` to the minter role
pub fn set_minter<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    account: &Address,
) -> NftResult<()> {
    grant_role(storage, ctx, &MINTER_ROLE, account)
}

/// Admin convenience wrapper: remove `account` from the minter role
pub fn remove_from_minter<S: NftStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    account: &Address,
) -> NftResult<()> {
    revoke_role(storage, ctx, &MINTER_ROLE, account)
}
