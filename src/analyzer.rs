//! In-memory pickup aggregation and top-K ranking queries.

use std::collections::HashMap;

use crate::types::{SlotCount, ZoneCount};

/// Number of hourly slots tracked per zone.
pub const HOURS_PER_DAY: usize = 24;

/// Accumulates pickup counts per zone and per zone/hour slot.
///
/// Both tables grow lazily as zones are first observed and are only ever
/// incremented, one paired increment per recorded pickup, so the per-zone
/// total always equals the sum of that zone's 24 hourly counters.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    zone_counts: HashMap<String, u64>,
    zone_hourly_counts: HashMap<String, [u64; HOURS_PER_DAY]>,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one valid pickup in both tables.
    ///
    /// An hour outside 0-23 is ignored, keeping the tables consistent no
    /// matter what a caller passes.
    pub fn record_pickup(&mut self, zone: &str, hour: usize) {
        if hour >= HOURS_PER_DAY {
            return;
        }
        *self.zone_counts.entry(zone.to_string()).or_insert(0) += 1;
        self.zone_hourly_counts
            .entry(zone.to_string())
            .or_insert([0; HOURS_PER_DAY])[hour] += 1;
    }

    /// True if no pickup has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.zone_counts.is_empty()
    }

    /// Number of distinct zones observed so far.
    pub fn distinct_zones(&self) -> usize {
        self.zone_counts.len()
    }

    /// Ranks zones by total pickups: count descending, zone ascending.
    ///
    /// Truncates the ranking to `k` entries; a negative `k` means no limit.
    /// Read-only, so repeated calls between ingestions return identical
    /// results.
    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        let mut results: Vec<ZoneCount> = self
            .zone_counts
            .iter()
            .map(|(zone, &count)| ZoneCount {
                zone: zone.clone(),
                count,
            })
            .collect();

        results.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.zone.cmp(&b.zone)));

        truncate_to(&mut results, k);
        results
    }

    /// Ranks zone/hour slots by pickups: count descending, zone ascending,
    /// hour ascending. Slots that never saw a pickup are not emitted.
    ///
    /// Same truncation semantics as [`top_zones`](Self::top_zones).
    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        let mut results: Vec<SlotCount> = Vec::new();

        for (zone, hours) in &self.zone_hourly_counts {
            for (hour, &count) in hours.iter().enumerate() {
                if count > 0 {
                    results.push(SlotCount {
                        zone: zone.clone(),
                        hour: hour as u8,
                        count,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.zone.cmp(&b.zone))
                .then_with(|| a.hour.cmp(&b.hour))
        });

        truncate_to(&mut results, k);
        results
    }
}

/// Keeps the first `k` entries; a negative `k` disables truncation.
fn truncate_to<T>(results: &mut Vec<T>, k: i64) {
    if k >= 0 && (k as usize) < results.len() {
        results.truncate(k as usize);
    }
}
