use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Dense campaign identifier.
///
/// Ids are allocated by the registry starting at 0, strictly increasing,
/// and never reused — the count of campaigns ever created equals the next
/// id to be allocated.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CampaignId(pub u64);

impl CampaignId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CampaignId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CampaignId({})", self.0)
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmp:{}", self.0)
    }
}

/// Fixed classification of a fundraising effort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Charity,
    Project,
    Community,
}

impl CampaignType {
    /// Wire name as recorded by the ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charity => "charity",
            Self::Project => "project",
            Self::Community => "community",
        }
    }

    /// Parse a wire name. Names are case-sensitive.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s {
            "charity" => Ok(Self::Charity),
            "project" => Ok(Self::Project),
            "community" => Ok(Self::Community),
            other => Err(TypeError::UnknownName {
                kind: "campaign type",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denomination a campaign is recorded in. Recorded, never converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    /// Wire name as recorded by the ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stx => "STX",
            Self::Usd => "USD",
            Self::Btc => "BTC",
        }
    }

    /// Parse a wire name. Names are case-sensitive.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s {
            "STX" => Ok(Self::Stx),
            "USD" => Ok(Self::Usd),
            "BTC" => Ok(Self::Btc),
            other => Err(TypeError::UnknownName {
                kind: "currency",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_id_ordering_and_display() {
        assert!(CampaignId::new(0) < CampaignId::new(1));
        assert_eq!(format!("{}", CampaignId::new(7)), "cmp:7");
    }

    #[test]
    fn campaign_type_roundtrip() {
        for ty in [
            CampaignType::Charity,
            CampaignType::Project,
            CampaignType::Community,
        ] {
            assert_eq!(CampaignType::parse(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn campaign_type_rejects_unknown_names() {
        let error = CampaignType::parse("invalid").unwrap_err();
        assert_eq!(
            error,
            TypeError::UnknownName {
                kind: "campaign type",
                name: "invalid".into()
            }
        );
    }

    #[test]
    fn campaign_type_is_case_sensitive() {
        assert!(CampaignType::parse("Charity").is_err());
    }

    #[test]
    fn currency_roundtrip() {
        for currency in [Currency::Stx, Currency::Usd, Currency::Btc] {
            assert_eq!(Currency::parse(currency.as_str()).unwrap(), currency);
        }
    }

    #[test]
    fn currency_rejects_lowercase() {
        assert!(Currency::parse("stx").is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&CampaignType::Charity).unwrap();
        assert_eq!(json, "\"charity\"");
        let json = serde_json::to_string(&Currency::Stx).unwrap();
        assert_eq!(json, "\"STX\"");
    }
}
