// Storage layer for the token contract model.
//
// Storage is abstracted behind a trait so the operation logic stays
// runtime-agnostic, and so the proxy can swap logic implementations without
// touching persisted state. `MemoryStorage` is the in-process backend used
// by the proxy and by tests; providers backed by a database implement the
// same trait.

use std::collections::HashMap;

use anyhow::Context;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

use super::error::{NftError, NftResult};
use super::types::{CollectionState, Event, RoleId};

/// Abstract storage interface for token operations
pub trait NftStorage {
    // Collection state
    fn get_collection(&self) -> Option<CollectionState>;
    fn set_collection(&mut self, state: &CollectionState) -> NftResult<()>;

    // Token ownership
    fn get_token_owner(&self, token_id: u64) -> Option<Address>;
    fn set_token_owner(&mut self, token_id: u64, owner: Address) -> NftResult<()>;
    fn token_exists(&self, token_id: u64) -> bool;

    // Owner balances
    fn get_balance(&self, owner: &Address) -> u64;
    fn increment_balance(&mut self, owner: &Address) -> NftResult<u64>;

    // Per-token URI overrides (empty = unset, never stored)
    fn get_token_uri_override(&self, token_id: u64) -> Option<String>;
    fn set_token_uri_override(&mut self, token_id: u64, uri: String) -> NftResult<()>;

    // Role membership
    fn has_role(&self, role: &RoleId, account: &Address) -> bool;
    /// Returns true if the account was not yet a member
    fn add_role_member(&mut self, role: &RoleId, account: &Address) -> NftResult<bool>;
    /// Returns true if the account was a member
    fn remove_role_member(&mut self, role: &RoleId, account: &Address) -> NftResult<bool>;
    fn role_members(&self, role: &RoleId) -> Vec<Address>;

    // Event log
    fn push_event(&mut self, event: Event) -> NftResult<()>;
    fn events(&self) -> Vec<Event>;
    fn drain_events(&mut self) -> Vec<Event>;
}

/// In-memory storage backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStorage {
    collection: Option<CollectionState>,
    owners: HashMap<u64, Address>,
    balances: HashMap<Address, u64>,
    token_uris: HashMap<u64, String>,
    // IndexMap keeps membership iteration deterministic
    roles: IndexMap<RoleId, IndexSet<Address>>,
    events: Vec<Event>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the full persisted state. This is what survives a logic
    /// swap, so snapshots taken before and after an upgrade compare equal.
    pub fn snapshot(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing storage snapshot")
    }

    /// Restore a backend from a snapshot
    pub fn from_snapshot(snapshot: &str) -> anyhow::Result<Self> {
        serde_json::from_str(snapshot).context("deserializing storage snapshot")
    }
}

impl NftStorage for MemoryStorage {
    fn get_collection(&self) -> Option<CollectionState> {
        self.collection.clone()
    }

    fn set_collection(&mut self, state: &CollectionState) -> NftResult<()> {
        self.collection = Some(state.clone());
        Ok(())
    }

    fn get_token_owner(&self, token_id: u64) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }

    fn set_token_owner(&mut self, token_id: u64, owner: Address) -> NftResult<()> {
        self.owners.insert(token_id, owner);
        Ok(())
    }

    fn token_exists(&self, token_id: u64) -> bool {
        self.owners.contains_key(&token_id)
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn increment_balance(&mut self, owner: &Address) -> NftResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_add(1).ok_or(NftError::Overflow)?;
        Ok(*balance)
    }

    fn get_token_uri_override(&self, token_id: u64) -> Option<String> {
        self.token_uris.get(&token_id).cloned()
    }

    fn set_token_uri_override(&mut self, token_id: u64, uri: String) -> NftResult<()> {
        if uri.is_empty() {
            self.token_uris.remove(&token_id);
        } else {
            self.token_uris.insert(token_id, uri);
        }
        Ok(())
    }

    fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.roles
            .get(role)
            .map(|members| members.contains(account))
            .unwrap_or(false)
    }

    fn add_role_member(&mut self, role: &RoleId, account: &Address) -> NftResult<bool> {
        Ok(self.roles.entry(role.clone()).or_default().insert(*account))
    }

    fn remove_role_member(&mut self, role: &RoleId, account: &Address) -> NftResult<bool> {
        Ok(self
            .roles
            .get_mut(role)
            .map(|members| members.shift_remove(account))
            .unwrap_or(false))
    }

    fn role_members(&self, role: &RoleId) -> Vec<Address> {
        self.roles
            .get(role)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    fn push_event(&mut self, event: Event) -> NftResult<()> {
        self.events.push(event);
        Ok(())
    }

    fn events(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
