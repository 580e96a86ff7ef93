use trip_hotspots::analyzer::TripAnalyzer;
use trip_hotspots::ingest::ingest_file;

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/trips.csv",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_full_pipeline() {
    let mut analyzer = TripAnalyzer::new();
    ingest_file(&mut analyzer, fixture_path());

    // The fixture carries a header, an empty zone, an hour of 25, a broken
    // timestamp and a short row; only five rows survive.
    let zones = analyzer.top_zones(10);
    let flat: Vec<(&str, u64)> = zones.iter().map(|z| (z.zone.as_str(), z.count)).collect();
    assert_eq!(flat, vec![("Midtown", 3), ("Harbor", 2)]);

    let slots = analyzer.top_busy_slots(10);
    let flat: Vec<(&str, u8, u64)> = slots
        .iter()
        .map(|s| (s.zone.as_str(), s.hour, s.count))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("Harbor", 8, 2),
            ("Midtown", 8, 1),
            ("Midtown", 9, 1),
            ("Midtown", 17, 1),
        ]
    );
}

#[test]
fn test_slot_counts_sum_to_zone_totals() {
    let mut analyzer = TripAnalyzer::new();
    ingest_file(&mut analyzer, fixture_path());

    let zones = analyzer.top_zones(-1);
    let slots = analyzer.top_busy_slots(-1);

    for zone in &zones {
        let slot_sum: u64 = slots
            .iter()
            .filter(|s| s.zone == zone.zone)
            .map(|s| s.count)
            .sum();
        assert_eq!(slot_sum, zone.count, "mismatch for zone {}", zone.zone);
    }
}

#[test]
fn test_rankings_are_sorted_and_truncated() {
    let mut analyzer = TripAnalyzer::new();
    ingest_file(&mut analyzer, fixture_path());

    let zones = analyzer.top_zones(-1);
    for pair in zones.windows(2) {
        assert!(
            pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].zone < pair[1].zone)
        );
    }

    assert!(analyzer.top_zones(0).is_empty());
    assert_eq!(analyzer.top_zones(1).len(), 1);
    assert_eq!(analyzer.top_busy_slots(2).len(), 2);
}
