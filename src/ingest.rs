//! Tolerant line-by-line ingestion of trip-record CSV files.
//!
//! Input rows look like `TripID,PickupZoneID,DropoffZoneID,PickupDateTime,
//! DistanceKm,FareAmount`. Fields are split on a literal comma with no
//! quoting or escaping support; a comma inside a field is a documented
//! limitation, not a bug. Every malformed unit (row or whole file) is
//! skipped silently so that dirty real-world exports never abort a run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::analyzer::TripAnalyzer;

/// Minimum comma-separated columns a row must carry:
/// TripID, PickupZoneID, DropoffZoneID, PickupDateTime.
const MIN_COLUMNS: usize = 4;

/// Column index of the pickup zone identifier.
const ZONE_COLUMN: usize = 1;

/// Column index of the pickup timestamp.
const TIMESTAMP_COLUMN: usize = 3;

/// Reads one trip-record CSV file into `analyzer`.
///
/// Never fails: an unopenable file is a no-op and malformed rows are
/// dropped while ingestion continues with the next line. Zone identifiers
/// are kept exactly as written (no case normalization), minus surrounding
/// whitespace.
pub fn ingest_file(analyzer: &mut TripAnalyzer, path: impl AsRef<Path>) {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            debug!(path = %path.display(), %error, "Input file unreadable, ingesting nothing");
            return;
        }
    };

    let mut ingested = 0u64;
    let mut skipped = 0u64;
    let mut header_pending = true;

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => {
                // Undecodable bytes drop this line only
                skipped += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_COLUMNS {
            skipped += 1;
            continue;
        }

        // Header heuristic, applied once to the first row with enough
        // columns: a leading token that does not start with a digit is
        // taken to be a column-name row.
        if header_pending {
            header_pending = false;
            if !starts_with_ascii_digit(fields[0].trim()) {
                debug!(path = %path.display(), "Discarding header row");
                continue;
            }
        }

        let zone = fields[ZONE_COLUMN].trim();
        let timestamp = fields[TIMESTAMP_COLUMN].trim();
        if zone.is_empty() || timestamp.is_empty() {
            skipped += 1;
            continue;
        }

        let Some(hour) = parse_pickup_hour(timestamp) else {
            skipped += 1;
            continue;
        };

        analyzer.record_pickup(zone, usize::from(hour));
        ingested += 1;
    }

    debug!(path = %path.display(), ingested, skipped, "Ingestion finished");
}

fn starts_with_ascii_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Extracts the hour of day from a `YYYY-MM-DD HH:MM` style timestamp.
///
/// The hour is the run of characters between the first space and the next
/// `:` (or end of string); it must be all ASCII digits and parse into the
/// range 0-23. Anything else rejects the row.
fn parse_pickup_hour(timestamp: &str) -> Option<u8> {
    let (_, time) = timestamp.split_once(' ')?;
    let hour_digits = match time.split_once(':') {
        Some((digits, _)) => digits,
        None => time,
    };
    if hour_digits.is_empty() || !hour_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = hour_digits.parse().ok()?;
    (hour <= 23).then_some(hour)
}
