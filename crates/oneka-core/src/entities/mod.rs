//! Entity structs for ONEKA project audit data.
//!
//! A [`Project`] exclusively owns its milestones and optional procurement
//! record. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! and use camelCase field names on the wire.

mod milestone;
mod procurement;
mod project;

pub use milestone::Milestone;
pub use procurement::{BID_VARIANCE_TOLERANCE_PCT, Bidder, ProcurementData};
pub use project::Project;

/// `part / whole * 100`, or `0.0` when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
