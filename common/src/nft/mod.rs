// Token contract reference model.
//
// Models the observable surface of an upgradeable, role-gated NFT token:
// role-gated minting against a maximum supply, base/override URI
// resolution, role grant/revoke, and a logic-swap upgrade gate over stable
// storage.
//
// Module Structure:
// - error: Error types with the exact contract-surface messages
// - types: Core data structures (roles, collection state, events)
// - storage: Storage trait and in-memory backend
// - roles: Role-based access control layer
// - operations: Operation logic (initialize, mint, uri, query)
// - proxy: Upgrade gate (replaceable logic over stable storage)

mod error;
pub mod operations;
mod proxy;
mod roles;
mod storage;
mod types;

pub use error::*;
pub use proxy::*;
pub use roles::*;
pub use storage::*;
pub use types::*;
