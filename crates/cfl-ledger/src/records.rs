use serde::{Deserialize, Serialize};

use cfl_types::{AccountId, BlockHeight, CampaignType, Currency};

/// Maximum length of a campaign name, in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of a campaign description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;
/// Maximum length of a campaign location, in characters.
pub const LOCATION_MAX_LEN: usize = 100;

/// Lifecycle state of a campaign.
///
/// A campaign transitions from `Active` to `Closed` exactly once, via a
/// successful fund release. There is no transition back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Closed,
}

impl CampaignStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// One fundraising campaign record.
///
/// `raised` is monotonically non-decreasing while the campaign is active and
/// always equals the sum of recorded contributions. `creator` is immutable
/// after creation; `created_at` is refreshed by an in-place update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub goal: u64,
    pub raised: u64,
    pub deadline: BlockHeight,
    pub min_contrib: u64,
    pub max_contrib: u64,
    pub created_at: BlockHeight,
    pub creator: AccountId,
    pub campaign_type: CampaignType,
    pub recipient: AccountId,
    pub description: String,
    pub location: String,
    pub currency: Currency,
    pub status: CampaignStatus,
}

/// Audit record for the latest in-place update of a campaign.
///
/// At most one per campaign; each successful update overwrites the previous
/// record. This is an audit trail, not a history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignUpdate {
    pub name: String,
    pub goal: u64,
    pub deadline: BlockHeight,
    pub updated_at: BlockHeight,
    pub updater: AccountId,
}

/// Argument bundle for campaign creation.
///
/// `campaign_type` and `currency` arrive as wire names and are parsed during
/// validation, so that a non-member name surfaces as the corresponding
/// creation error code rather than failing at the type boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub goal: u64,
    pub deadline: BlockHeight,
    pub min_contrib: u64,
    pub max_contrib: u64,
    pub campaign_type: String,
    pub recipient: AccountId,
    pub description: String,
    pub location: String,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions_are_observable() {
        assert!(CampaignStatus::Active.is_active());
        assert!(!CampaignStatus::Closed.is_active());
    }

    #[test]
    fn status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Closed).unwrap(),
            "\"closed\""
        );
    }

    #[test]
    fn campaign_serde_roundtrip() {
        let campaign = Campaign {
            name: "Alpha".into(),
            goal: 1000,
            raised: 250,
            deadline: BlockHeight::new(100),
            min_contrib: 10,
            max_contrib: 500,
            created_at: BlockHeight::zero(),
            creator: AccountId::named("creator"),
            campaign_type: CampaignType::Charity,
            recipient: AccountId::named("recipient"),
            description: "Help the needy".into(),
            location: "CityX".into(),
            currency: Currency::Stx,
            status: CampaignStatus::Active,
        };
        let json = serde_json::to_string(&campaign).unwrap();
        let parsed: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(campaign, parsed);
    }
}
