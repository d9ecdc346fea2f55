// Token contract operations.
//
// The operations are runtime-agnostic: storage is abstracted via the
// `NftStorage` trait and the caller is passed in as a context, so the same
// logic runs under the proxy and under tests. Every operation validates all
// of its preconditions before the first write, which gives per-call
// atomicity: a failed call leaves storage untouched.

mod init;
mod mint;
mod query;
mod uri;
mod validation;

pub use init::*;
pub use mint::*;
pub use query::*;
pub use uri::*;
pub use validation::*;

use crate::crypto::Address;

/// Runtime context providing caller information
#[derive(Clone, Debug)]
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}
