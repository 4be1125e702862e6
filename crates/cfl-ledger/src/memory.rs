use std::sync::{Arc, PoisonError, RwLock};

use cfl_types::{AccountId, BlockHeight, CampaignId};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::records::{Campaign, CampaignStatus, CampaignUpdate, CreateCampaignRequest, NAME_MAX_LEN};
use crate::state::LedgerState;
use crate::traits::{CampaignReader, CampaignWriter};
use crate::transfer::ValueTransfer;
use crate::validation::{text_in_bounds, validate_create};

/// In-memory campaign ledger for hosts, local demos, and tests.
///
/// One write-lock acquisition per mutating operation is the single
/// mutual-exclusion boundary required by the serialized execution model:
/// on a multi-threaded host, operations still apply one at a time. All
/// validation and the host transfer happen before any mutation, so a
/// failed operation leaves the state exactly as it was.
pub struct InMemoryCampaignLedger {
    config: LedgerConfig,
    transfer: Arc<dyn ValueTransfer>,
    inner: RwLock<LedgerState>,
}

impl InMemoryCampaignLedger {
    pub fn new(config: LedgerConfig, transfer: Arc<dyn ValueTransfer>) -> Self {
        let state = LedgerState::new(config.creation_fee);
        Self {
            config,
            transfer,
            inner: RwLock::new(state),
        }
    }

    /// The static configuration this ledger was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, LedgerState>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, LedgerState> {
        // Queries are infallible: a poisoned lock only means another
        // thread panicked while holding it, and writers never panic
        // between mutations, so the state is still consistent.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CampaignWriter for InMemoryCampaignLedger {
    fn set_authority(
        &self,
        _caller: &AccountId,
        candidate: &AccountId,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        if candidate.is_burn() {
            return Err(LedgerError::Rejected);
        }
        if state.authority.is_some() {
            return Err(LedgerError::Rejected);
        }
        state.authority = Some(*candidate);
        tracing::debug!(authority = %candidate, "authority account set");
        Ok(())
    }

    fn set_creation_fee(&self, _caller: &AccountId, new_fee: u64) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        if state.authority.is_none() {
            return Err(LedgerError::Rejected);
        }
        state.creation_fee = new_fee;
        Ok(())
    }

    fn create_campaign(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        request: &CreateCampaignRequest,
    ) -> Result<CampaignId, LedgerError> {
        let mut state = self.write_state()?;
        let (campaign_type, currency) =
            validate_create(&state, &self.config, caller, now, request)?;
        let Some(authority) = state.authority else {
            // Unreachable past validation; kept as a guard rather than an
            // unwrap so a future reordering cannot panic.
            return Err(LedgerError::Rejected);
        };

        self.transfer
            .transfer(state.creation_fee, caller, &authority)?;

        let id = CampaignId::new(state.next_campaign_id);
        let campaign = Campaign {
            name: request.name.clone(),
            goal: request.goal,
            raised: 0,
            deadline: request.deadline,
            min_contrib: request.min_contrib,
            max_contrib: request.max_contrib,
            created_at: now,
            creator: *caller,
            campaign_type,
            recipient: request.recipient,
            description: request.description.clone(),
            location: request.location.clone(),
            currency,
            status: CampaignStatus::Active,
        };
        state.campaigns.insert(id, campaign);
        state.by_name.insert(request.name.clone(), id);
        state.next_campaign_id += 1;

        tracing::debug!(%id, name = %request.name, "campaign created");
        Ok(id)
    }

    fn contribute(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        id: CampaignId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        let Some(campaign) = state.campaigns.get(&id) else {
            return Err(LedgerError::Rejected);
        };
        if !campaign.status.is_active() {
            return Err(LedgerError::Rejected);
        }
        if now >= campaign.deadline {
            return Err(LedgerError::Rejected);
        }
        if amount < campaign.min_contrib || amount > campaign.max_contrib {
            return Err(LedgerError::Rejected);
        }

        // Overflow would leave moved funds unrecorded, so check before
        // the transfer executes.
        let new_raised = campaign
            .raised
            .checked_add(amount)
            .ok_or(LedgerError::Rejected)?;
        let key = (id, *caller);
        let new_total = state
            .contributions
            .get(&key)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(LedgerError::Rejected)?;

        self.transfer.transfer(amount, caller, &self.config.pool)?;

        if let Some(campaign) = state.campaigns.get_mut(&id) {
            campaign.raised = new_raised;
        }
        state.contributions.insert(key, new_total);
        Ok(())
    }

    fn release_funds(&self, caller: &AccountId, id: CampaignId) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        let Some(campaign) = state.campaigns.get(&id) else {
            return Err(LedgerError::Rejected);
        };
        if campaign.creator != *caller {
            return Err(LedgerError::Rejected);
        }
        if !campaign.status.is_active() {
            return Err(LedgerError::Rejected);
        }
        if campaign.raised < campaign.goal {
            return Err(LedgerError::Rejected);
        }

        let amount = campaign.raised;
        let recipient = campaign.recipient;
        self.transfer.transfer(amount, &self.config.pool, &recipient)?;

        if let Some(campaign) = state.campaigns.get_mut(&id) {
            campaign.status = CampaignStatus::Closed;
        }
        tracing::debug!(%id, amount, recipient = %recipient, "funds released, campaign closed");
        Ok(())
    }

    fn update_campaign(
        &self,
        caller: &AccountId,
        now: BlockHeight,
        id: CampaignId,
        new_name: &str,
        new_goal: u64,
        new_deadline: BlockHeight,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        let Some(campaign) = state.campaigns.get(&id) else {
            return Err(LedgerError::Rejected);
        };
        if campaign.creator != *caller {
            return Err(LedgerError::Rejected);
        }
        if !text_in_bounds(new_name, NAME_MAX_LEN) {
            return Err(LedgerError::Rejected);
        }
        if new_goal == 0 {
            return Err(LedgerError::Rejected);
        }
        if new_deadline <= now {
            return Err(LedgerError::Rejected);
        }
        if state
            .by_name
            .get(new_name)
            .is_some_and(|indexed| *indexed != id)
        {
            return Err(LedgerError::Rejected);
        }

        // Build the replacement record first, then swap atomically:
        // record, name index, and audit entry move together.
        let old_name = campaign.name.clone();
        let mut replacement = campaign.clone();
        replacement.name = new_name.to_string();
        replacement.goal = new_goal;
        replacement.deadline = new_deadline;
        replacement.created_at = now;

        state.by_name.remove(&old_name);
        state.by_name.insert(new_name.to_string(), id);
        state.campaigns.insert(id, replacement);
        state.updates.insert(
            id,
            CampaignUpdate {
                name: new_name.to_string(),
                goal: new_goal,
                deadline: new_deadline,
                updated_at: now,
                updater: *caller,
            },
        );
        Ok(())
    }
}

impl CampaignReader for InMemoryCampaignLedger {
    fn campaign(&self, id: CampaignId) -> Option<Campaign> {
        self.read_state().campaigns.get(&id).cloned()
    }

    fn campaign_count(&self) -> u64 {
        self.read_state().next_campaign_id
    }

    fn campaign_exists(&self, name: &str) -> bool {
        self.read_state().by_name.contains_key(name)
    }

    fn last_update(&self, id: CampaignId) -> Option<CampaignUpdate> {
        self.read_state().updates.get(&id).cloned()
    }

    fn contribution(&self, id: CampaignId, contributor: &AccountId) -> u64 {
        self.read_state()
            .contributions
            .get(&(id, *contributor))
            .copied()
            .unwrap_or(0)
    }

    fn authority(&self) -> Option<AccountId> {
        self.read_state().authority
    }

    fn creation_fee(&self) -> u64 {
        self.read_state().creation_fee
    }
}
