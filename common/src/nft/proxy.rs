// Upgrade gate.
//
// The proxy is a stable handle referencing a replaceable logic
// implementation, with storage held outside the logic so a swap can never
// corrupt persisted state. Only the URI base derivation differs between the
// shipped implementations; everything else delegates to the shared
// operations.

use log::info;

use crate::crypto::Address;

use super::error::NftResult;
use super::operations::{self, RuntimeContext};
use super::roles;
use super::storage::{MemoryStorage, NftStorage};
use super::types::{CollectionState, Event, InitParams, RoleId, UPGRADER_ROLE};

/// Replaceable logic implementation behind the proxy
pub trait TokenLogic: Send + Sync {
    /// Implementation version label
    fn version(&self) -> &'static str;

    /// Effective base URI under this implementation
    fn base_uri(&self, state: &CollectionState) -> String;
}

/// Initial implementation: the base URI is the stored one
#[derive(Debug, Default, Clone, Copy)]
pub struct LogicV0;

impl TokenLogic for LogicV0 {
    fn version(&self) -> &'static str {
        "v0"
    }

    fn base_uri(&self, state: &CollectionState) -> String {
        state.base_uri.clone()
    }
}

/// Base path pinned by the v1 implementation
pub const V1_BASE_URI: &str = "https://mvlnft.io/metadata/";

/// Replacement implementation: pins its own metadata path and ignores the
/// stored base, reproducing the observed post-upgrade behavior
#[derive(Debug, Default, Clone, Copy)]
pub struct LogicV1;

impl TokenLogic for LogicV1 {
    fn version(&self) -> &'static str {
        "v1"
    }

    fn base_uri(&self, _state: &CollectionState) -> String {
        V1_BASE_URI.to_string()
    }
}

/// Stable handle over storage and the current logic implementation.
///
/// Every entry point of the modeled contract surface is exposed here; the
/// caller address is passed per call, mirroring the transaction signer.
pub struct NftProxy<S: NftStorage> {
    storage: S,
    logic: Box<dyn TokenLogic>,
}

impl NftProxy<MemoryStorage> {
    /// Deploy over fresh in-memory storage with the v0 implementation,
    /// running the initializer as `deployer`
    pub fn deploy(deployer: Address, params: InitParams) -> NftResult<Self> {
        let mut storage = MemoryStorage::new();
        let ctx = RuntimeContext::new(deployer);
        operations::initialize(&mut storage, &ctx, params)?;
        Ok(Self::with_storage(storage, Box::new(LogicV0)))
    }
}

impl<S: NftStorage> NftProxy<S> {
    /// Wrap existing storage with the given logic implementation
    pub fn with_storage(storage: S, logic: Box<dyn TokenLogic>) -> Self {
        Self { storage, logic }
    }

    /// Current implementation version
    pub fn version(&self) -> &'static str {
        self.logic.version()
    }

    /// Direct storage access (assertions, snapshots)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Drain the accumulated event log
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.storage.drain_events()
    }

    // ========================================
    // Minting
    // ========================================

    pub fn safe_mint(&mut self, caller: Address, to: Address) -> NftResult<u64> {
        operations::safe_mint(&mut self.storage, &RuntimeContext::new(caller), to)
    }

    pub fn sale_mint(&mut self, caller: Address, to: Address) -> NftResult<u64> {
        operations::sale_mint(&mut self.storage, &RuntimeContext::new(caller), to)
    }

    pub fn mint(&mut self, caller: Address, to: Address, token_id: u64) -> NftResult<u64> {
        operations::mint(&mut self.storage, &RuntimeContext::new(caller), to, token_id)
    }

    // ========================================
    // Queries
    // ========================================

    pub fn owner_of(&self, token_id: u64) -> NftResult<Address> {
        operations::owner_of(&self.storage, token_id)
    }

    pub fn owner(&self) -> NftResult<Address> {
        operations::owner(&self.storage)
    }

    pub fn name(&self) -> NftResult<String> {
        operations::name(&self.storage)
    }

    pub fn symbol(&self) -> NftResult<String> {
        operations::symbol(&self.storage)
    }

    pub fn total_supply(&self) -> u64 {
        operations::total_supply(&self.storage)
    }

    pub fn balance_of(&self, account: &Address) -> u64 {
        operations::balance_of(&self.storage, account)
    }

    // ========================================
    // URI surface
    // ========================================

    pub fn base_uri(&self) -> NftResult<String> {
        let state = self
            .storage
            .get_collection()
            .ok_or(super::error::NftError::NotInitialized)?;
        Ok(self.logic.base_uri(&state))
    }

    pub fn token_uri(&self, token_id: u64) -> NftResult<String> {
        let base = self.base_uri()?;
        operations::token_uri(&self.storage, &base, token_id)
    }

    pub fn set_base_uri(&mut self, caller: Address, new_base: &str) -> NftResult<()> {
        operations::set_base_uri(&mut self.storage, &RuntimeContext::new(caller), new_base)
    }

    pub fn set_token_uri(&mut self, caller: Address, token_id: u64, uri: &str) -> NftResult<()> {
        operations::set_token_uri(
            &mut self.storage,
            &RuntimeContext::new(caller),
            token_id,
            uri,
        )
    }

    // ========================================
    // Roles
    // ========================================

    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        roles::has_role(&self.storage, role, account)
    }

    pub fn grant_role(&mut self, caller: Address, role: &RoleId, account: &Address) -> NftResult<()> {
        roles::grant_role(&mut self.storage, &RuntimeContext::new(caller), role, account)
    }

    pub fn revoke_role(
        &mut self,
        caller: Address,
        role: &RoleId,
        account: &Address,
    ) -> NftResult<()> {
        roles::revoke_role(&mut self.storage, &RuntimeContext::new(caller), role, account)
    }

    pub fn set_minter(&mut self, caller: Address, account: &Address) -> NftResult<()> {
        roles::set_minter(&mut self.storage, &RuntimeContext::new(caller), account)
    }

    pub fn remove_from_minter(&mut self, caller: Address, account: &Address) -> NftResult<()> {
        roles::remove_from_minter(&mut self.storage, &RuntimeContext::new(caller), account)
    }

    // ========================================
    // Upgrade
    // ========================================

    /// Swap the logic implementation. Requires the upgrader role. The swap
    /// is atomic from the caller's perspective: either the new logic serves
    /// every subsequent call, or nothing changed.
    pub fn upgrade_to(&mut self, caller: Address, new_logic: Box<dyn TokenLogic>) -> NftResult<()> {
        roles::check_role(&self.storage, &UPGRADER_ROLE, &caller)?;

        let version = new_logic.version().to_string();
        info!(
            "upgrading logic from {} to {}",
            self.logic.version(),
            version
        );
        self.logic = new_logic;
        self.storage.push_event(Event::Upgraded { version })?;
        Ok(())
    }
}
