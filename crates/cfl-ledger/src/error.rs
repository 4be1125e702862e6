use thiserror::Error;

/// Failure from the host's value-transfer capability.
///
/// A transfer is all-or-nothing; any failure aborts the surrounding
/// operation before it mutates ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("transfer refused by host: {0}")]
    Refused(String),
}

/// Specific campaign-creation failure.
///
/// Variant order mirrors the validation order, which is observable: the
/// first failing check decides the returned variant. Each variant carries
/// the stable numeric code the hosting runtime reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("maximum campaign count reached")]
    MaxCampaignsExceeded,

    #[error("campaign name must be non-empty and at most 100 characters")]
    InvalidName,

    #[error("goal must be positive")]
    InvalidGoal,

    #[error("deadline must be strictly in the future")]
    InvalidDeadline,

    #[error("minimum contribution must be positive")]
    InvalidMinContrib,

    #[error("maximum contribution must be positive")]
    InvalidMaxContrib,

    #[error("campaign type is not a member of the fixed set")]
    InvalidCampaignType,

    #[error("recipient must differ from the creator")]
    InvalidRecipient,

    #[error("description must be non-empty and at most 500 characters")]
    InvalidDescription,

    #[error("location must be non-empty and at most 100 characters")]
    InvalidLocation,

    #[error("currency is not a member of the fixed set")]
    InvalidCurrency,

    #[error("a campaign with this name already exists")]
    CampaignAlreadyExists,

    #[error("no authority account is set")]
    AuthorityNotVerified,
}

impl CreateError {
    /// Stable numeric code for host-facing error reporting.
    pub fn code(&self) -> u32 {
        match self {
            Self::MaxCampaignsExceeded => 114,
            Self::InvalidName => 113,
            Self::InvalidGoal => 101,
            Self::InvalidDeadline => 102,
            Self::InvalidMinContrib => 110,
            Self::InvalidMaxContrib => 111,
            Self::InvalidCampaignType => 115,
            Self::InvalidRecipient => 116,
            Self::InvalidDescription => 117,
            Self::InvalidLocation => 118,
            Self::InvalidCurrency => 119,
            Self::CampaignAlreadyExists => 106,
            Self::AuthorityNotVerified => 109,
        }
    }
}

/// Errors produced by ledger operations.
///
/// Only campaign creation reports a specific cause; the other mutating
/// operations collapse every authorization, validation, and state failure
/// into the opaque [`LedgerError::Rejected`]. The asymmetry is inherited
/// from the source behavior and preserved deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Create(#[from] CreateError),

    #[error("operation rejected")]
    Rejected,

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("ledger state lock poisoned")]
    LockPoisoned,
}
