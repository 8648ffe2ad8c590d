mod common;

use common::{sample_itinerary, sample_preferences};

use tripplan_api::models::itinerary::ItineraryRecord;
use tripplan_api::services::export_service::render_markdown;

fn sample_record() -> ItineraryRecord {
    ItineraryRecord {
        id: 42,
        user_id: "alice@example.com".to_string(),
        destination: "Lisbon".to_string(),
        start_date: "2026-09-01".to_string(),
        end_date: "2026-09-05".to_string(),
        preferences: sample_preferences(),
        itinerary: sample_itinerary(2),
        created_at: "2026-08-28 12:00:00".to_string(),
    }
}

#[test]
fn markdown_carries_title_dates_and_days() {
    let markdown = render_markdown(&sample_record());

    assert!(markdown.starts_with("# Lisbon Itinerary"));
    assert!(markdown.contains("**Dates:** 2026-09-01 to 2026-09-05"));
    assert!(markdown.contains("## Overview"));
    assert!(markdown.contains("## Day 1: Day 1 in Lisbon"));
    assert!(markdown.contains("## Day 2: Day 2 in Lisbon"));
    assert!(markdown.contains("- **Morning:** Visit the old market on day 1"));
    assert!(markdown.contains("- **Notes:** Notes for day 2"));
}

#[test]
fn empty_fields_are_omitted() {
    let mut record = sample_record();
    record.itinerary.overview.clear();
    record.itinerary.days[0].food.clear();
    record.itinerary.days[0].title.clear();

    let markdown = render_markdown(&record);

    assert!(!markdown.contains("## Overview"));
    // Only day 2 still has a food line.
    assert_eq!(markdown.matches("- **Food:**").count(), 1);
    // Untitled days fall back to the bare day heading.
    assert!(markdown.contains("## Day 1\n"));
}
