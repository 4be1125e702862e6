use std::collections::HashMap;

use cfl_types::{AccountId, CampaignId};

use crate::records::{Campaign, CampaignUpdate};

/// Process-wide ledger state: record store plus indexes, no behavior.
///
/// Constructed once at system start and mutated exclusively through the
/// operations on the campaign ledger. Id allocation is dense from 0;
/// removed entries do not exist (campaign deletion is out of scope), so
/// `next_campaign_id` doubles as the count of campaigns ever created.
#[derive(Debug, Default)]
pub struct LedgerState {
    /// Next campaign id to allocate. Monotone, never reused.
    pub(crate) next_campaign_id: u64,
    /// Current creation fee; seeded from config, adjustable by the
    /// authority gate.
    pub(crate) creation_fee: u64,
    /// The single authority account. Settable at most once.
    pub(crate) authority: Option<AccountId>,
    /// Campaign records by id.
    pub(crate) campaigns: HashMap<CampaignId, Campaign>,
    /// Latest update audit record by campaign id.
    pub(crate) updates: HashMap<CampaignId, CampaignUpdate>,
    /// Unique-name index.
    pub(crate) by_name: HashMap<String, CampaignId>,
    /// Cumulative contribution per (campaign, contributor). Never
    /// decremented.
    pub(crate) contributions: HashMap<(CampaignId, AccountId), u64>,
}

impl LedgerState {
    pub(crate) fn new(creation_fee: u64) -> Self {
        Self {
            creation_fee,
            ..Default::default()
        }
    }
}
