use cfl_types::{AccountId, BlockHeight, CampaignId};

use crate::error::LedgerError;
use crate::records::{Campaign, CampaignUpdate, CreateCampaignRequest};

/// Write boundary for campaign ledger mutations.
///
/// Every method executes atomically: it either applies all of its described
/// mutations or none. The host supplies `caller` and `now` as fixed inputs
/// for the whole call.
pub trait CampaignWriter: Send + Sync {
    /// Set the single authority account. Succeeds at most once per ledger;
    /// the burn sentinel is rejected. Any caller may perform this — the
    /// embedding system may add a stronger gate.
    fn set_authority(
        &self,
        caller: &AccountId,
        candidate: &AccountId,
    ) -> Result<(), LedgerError>;

    /// Replace the creation fee. Requires an authority to be set; the new
    /// fee itself is not bounds-checked.
    fn set_creation_fee(&self, caller: &AccountId, new_fee: u64) -> Result<(), LedgerError>;

    /// Validate and store a new campaign, charging the creation fee from
    /// the caller to the authority. Returns the allocated id.
    fn create_campaign(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        request: &CreateCampaignRequest,
    ) -> Result<CampaignId, LedgerError>;

    /// Record a contribution within the campaign's per-contribution bounds,
    /// moving the amount from the caller into the pool.
    fn contribute(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        id: CampaignId,
        amount: u64,
    ) -> Result<(), LedgerError>;

    /// Release the full raised amount to the recipient and close the
    /// campaign. Creator-only; requires the goal to be met. Terminal.
    fn release_funds(&self, caller: &AccountId, id: CampaignId) -> Result<(), LedgerError>;

    /// Replace name, goal, and deadline of an existing campaign in place,
    /// re-indexing the name and overwriting the update audit record.
    /// Creator-only.
    fn update_campaign(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        id: CampaignId,
        new_name: &str,
        new_goal: u64,
        new_deadline: BlockHeight,
    ) -> Result<(), LedgerError>;
}

/// Read boundary for campaign ledger queries.
///
/// Queries are infallible and side-effect free; absence is signaled by
/// `Option`/`bool`/zero values, never by error codes.
pub trait CampaignReader: Send + Sync {
    /// The campaign record, if the id was ever allocated.
    fn campaign(&self, id: CampaignId) -> Option<Campaign>;

    /// Number of campaigns ever created (ids are dense from 0).
    fn campaign_count(&self) -> u64;

    /// Whether `name` is currently indexed.
    fn campaign_exists(&self, name: &str) -> bool;

    /// The latest update audit record for a campaign, if any.
    fn last_update(&self, id: CampaignId) -> Option<CampaignUpdate>;

    /// Cumulative amount `contributor` has put into the campaign; 0 when
    /// no contribution was ever recorded.
    fn contribution(&self, id: CampaignId, contributor: &AccountId) -> u64;

    /// The authority account, once set.
    fn authority(&self) -> Option<AccountId>;

    /// The creation fee currently in force.
    fn creation_fee(&self) -> u64;
}
