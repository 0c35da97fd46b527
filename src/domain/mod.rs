pub mod material;
pub mod order;
pub mod invoice;
pub mod project;
pub mod user;
pub mod dashboard;
pub mod expenditure;

pub use material::*;
pub use order::*;
pub use invoice::*;
pub use project::*;
pub use user::*;
pub use dashboard::*;
pub use expenditure::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Aggregates computed by the backend's SQL layer arrive either as JSON
/// numbers or as numeric strings (`"1500000"`). Anything else reads as zero.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer).map(|n| if n.is_finite() && n > 0.0 { n as u64 } else { 0 })
}
