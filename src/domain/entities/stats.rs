use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate view of the whole directory, computed in a single scan.
/// Served by the status endpoint; not part of the query engine.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_profiles: i64,
    pub available_profiles: i64,
    pub unavailable_profiles: i64,
    pub average_experience: f64,
    pub min_experience: i32,
    pub max_experience: i32,
    pub average_rate: Decimal,
    pub min_rate: Decimal,
    pub max_rate: Decimal,
}
