use anyhow::Result;
use onion_common::crypto::{Address, ADDRESS_SIZE};
use onion_common::nft::{InitParams, MemoryStorage, NftProxy};
use rand::RngCore;

/// The deployment parameters used throughout the acceptance scenarios
pub const NAME: &str = "ONiON";
pub const SYMBOL: &str = "ONiON";
pub const BASE_URI: &str = "https://mvlnft.io/meta/";
pub const MAX_SUPPLY: u64 = 3;

/// Named signers used across the scenarios
#[derive(Clone, Copy, Debug)]
pub struct Accounts {
    pub owner: Address,
    pub bob: Address,
    pub jane: Address,
    pub sara: Address,
}

impl Accounts {
    pub fn new() -> Self {
        Self {
            owner: Address::new([0x11; ADDRESS_SIZE]),
            bob: Address::new([0x22; ADDRESS_SIZE]),
            jane: Address::new([0x33; ADDRESS_SIZE]),
            sara: Address::new([0x44; ADDRESS_SIZE]),
        }
    }
}

impl Default for Accounts {
    fn default() -> Self {
        Self::new()
    }
}

/// A random, non-zero address
pub fn random_address() -> Address {
    let mut bytes = [0u8; ADDRESS_SIZE];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes[0] |= 1;
    Address::new(bytes)
}

/// Deploy the proxy as `owner` with the standard parameters
pub fn deploy(accounts: &Accounts) -> Result<NftProxy<MemoryStorage>> {
    let proxy = NftProxy::deploy(
        accounts.owner,
        InitParams::new(NAME, SYMBOL, BASE_URI, MAX_SUPPLY),
    )?;
    log::debug!("deployed {} as {}", NAME, accounts.owner);
    Ok(proxy)
}

/// The access-control error string a caller observes, as rendered by the
/// contract surface
pub fn access_control_err(account: &Address, role: &onion_common::nft::RoleId) -> String {
    format!(
        "AccessControl: account {} is missing role {}",
        account, role
    )
}
