use serde::{Deserialize, Serialize};

use cfl_types::AccountId;

/// Default ceiling on the number of campaigns ever created.
pub const DEFAULT_MAX_CAMPAIGNS: u64 = 1000;
/// Default fee charged to the creator on each successful creation.
pub const DEFAULT_CREATION_FEE: u64 = 1000;

/// Static configuration of a campaign ledger instance.
///
/// The `pool` account is the contract-held escrow that receives every
/// contribution and pays out releases. It is fixed for the lifetime of the
/// ledger; only the creation fee is adjustable at runtime (by the
/// authority-gated `set_creation_fee` operation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Hard ceiling on campaigns ever created (ids are never reused).
    pub max_campaigns: u64,
    /// Initial creation fee, transferred from creator to authority.
    pub creation_fee: u64,
    /// Contract-held account pooling contributions until release.
    pub pool: AccountId,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_campaigns: DEFAULT_MAX_CAMPAIGNS,
            creation_fee: DEFAULT_CREATION_FEE,
            pool: AccountId::named("cfl-pool"),
        }
    }
}

impl LedgerConfig {
    /// Configuration with an explicit pool account and defaults elsewhere.
    pub fn with_pool(pool: AccountId) -> Self {
        Self {
            pool,
            ..Default::default()
        }
    }
}
