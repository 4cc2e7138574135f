//! KES currency formatting used by list and detail views.

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;

/// Format a whole-shilling amount as `KES 4.85B` (billions, two decimals)
/// or `KES 890M` (millions, rounded).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_kes(amount: u64) -> String {
    if amount >= BILLION {
        format!("KES {:.2}B", amount as f64 / BILLION as f64)
    } else {
        format!("KES {:.0}M", amount as f64 / MILLION as f64)
    }
}
