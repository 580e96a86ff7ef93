//! Output formatting and persistence for ranking results.
//!
//! Supports aligned stdout tables, pretty-printed JSON, and CSV export.

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::types::{HotspotReport, SlotCount, ZoneCount};

/// Prints a zone ranking as an aligned table on stdout.
pub fn print_zone_table(rows: &[ZoneCount]) {
    for (rank, row) in rows.iter().enumerate() {
        println!("{:>4}  {:<24} {:>10}", rank + 1, row.zone, row.count);
    }
}

/// Prints a zone/hour slot ranking as an aligned table on stdout.
pub fn print_slot_table(rows: &[SlotCount]) {
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:02}:00 {:>10}",
            rank + 1,
            row.zone,
            row.hour,
            row.count
        );
    }
}

/// Prints a combined report as pretty JSON on stdout.
pub fn print_json(report: &HotspotReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a ranking to a CSV file, one serialized row per entry.
///
/// Overwrites any existing file at `path`.
pub fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV ranking");

    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_zones() -> Vec<ZoneCount> {
        vec![
            ZoneCount {
                zone: "Midtown".to_string(),
                count: 3,
            },
            ZoneCount {
                zone: "Harbor".to_string(),
                count: 1,
            },
        ]
    }

    #[test]
    fn test_print_tables_do_not_panic() {
        print_zone_table(&sample_zones());
        print_slot_table(&[SlotCount {
            zone: "Midtown".to_string(),
            hour: 8,
            count: 3,
        }]);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = HotspotReport {
            schema_version: 1,
            generated_at: Utc::now(),
            top_zones: sample_zones(),
            top_slots: vec![],
        };
        print_json(&report).unwrap();
    }

    #[test]
    fn test_write_csv_creates_file_with_header_and_rows() {
        let path = temp_path("trip_hotspots_test_zones.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_csv(&path, &sample_zones()).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        // 1 header + 2 data rows
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "zone,count");
        assert_eq!(lines[1], "Midtown,3");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_csv_slot_rows() {
        let path = temp_path("trip_hotspots_test_slots.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![SlotCount {
            zone: "Harbor".to_string(),
            hour: 17,
            count: 4,
        }];
        write_csv(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("zone,hour,count"));
        assert!(content.contains("Harbor,17,4"));

        fs::remove_file(&path).unwrap();
    }
}
