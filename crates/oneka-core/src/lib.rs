//! # oneka-core
//!
//! Core types for ONEKA infrastructure audit data.
//!
//! This crate provides the foundational types shared across all ONEKA crates:
//! - Entity structs for projects and their owned sub-records (milestones,
//!   procurement data, bidders)
//! - Risk, status, and procurement enums with their wire strings
//! - Derived progress and bid-variance metrics
//! - KES currency formatting
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod money;

pub use entities::{BID_VARIANCE_TOLERANCE_PCT, Bidder, Milestone, ProcurementData, Project};
pub use enums::{BidderStatus, ProcurementMethod, ProcurementStatus, ProjectStatus, RiskLevel};
pub use errors::CoreError;
pub use money::format_kes;
