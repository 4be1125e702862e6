//! Record-keeping and authorization core of the Crowdfund Ledger (CFL).
//!
//! This crate is the heart of CFL. It provides:
//! - Campaign and audit record types
//! - The process-wide [`LedgerState`] with its indexes
//! - Creation-time validation with stable, ordered error codes
//! - `CampaignWriter` / `CampaignReader` trait boundaries
//! - [`InMemoryCampaignLedger`] implementation for hosts and tests
//! - The [`ValueTransfer`] capability boundary to the hosting runtime
//!
//! Every operation is atomic with respect to the shared state: it either
//! applies all of its mutations or, on any validation or transfer failure,
//! none of them. The host supplies the caller identity and the current
//! logical clock as fixed inputs per call.

pub mod config;
pub mod error;
pub mod memory;
pub mod records;
pub mod state;
pub mod traits;
pub mod transfer;
pub mod validation;

pub use config::LedgerConfig;
pub use error::{CreateError, LedgerError, TransferError};
pub use memory::InMemoryCampaignLedger;
pub use records::{
    Campaign, CampaignStatus, CampaignUpdate, CreateCampaignRequest, DESCRIPTION_MAX_LEN,
    LOCATION_MAX_LEN, NAME_MAX_LEN,
};
pub use state::LedgerState;
pub use traits::{CampaignReader, CampaignWriter};
pub use transfer::{RecordingTransfer, TransferRecord, ValueTransfer};
