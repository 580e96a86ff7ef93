//! Data types produced by the ranking queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Total pickups recorded for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Pickups recorded for one zone during one hour of the day (0-23).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

/// Combined ranking result for an analysis run, emitted as JSON.
#[derive(Debug, Serialize)]
pub struct HotspotReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub top_zones: Vec<ZoneCount>,
    pub top_slots: Vec<SlotCount>,
}
