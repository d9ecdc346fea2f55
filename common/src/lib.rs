pub mod crypto;
pub mod nft;
pub mod shuffle;
