//! Foundation types for the Crowdfund Ledger (CFL).
//!
//! This crate provides the identity, temporal, and classification types used
//! throughout the CFL system. Every other CFL crate depends on `cfl-types`.
//!
//! # Key Types
//!
//! - [`AccountId`] — Opaque account identity derived from account material
//! - [`BlockHeight`] — Logical clock value supplied by the host per operation
//! - [`CampaignId`] — Dense campaign identifier allocated by the registry
//! - [`CampaignType`] — Fixed classification of a fundraising effort
//! - [`Currency`] — Recorded denomination of a campaign (never converted)

pub mod account;
pub mod campaign;
pub mod error;
pub mod temporal;

pub use account::{AccountId, AccountMaterial};
pub use campaign::{CampaignId, CampaignType, Currency};
pub use error::TypeError;
pub use temporal::BlockHeight;
