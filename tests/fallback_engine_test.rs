mod common;

use common::{make_day, sample_itinerary, sample_preferences};
use tripplan_api::services::fallback_service::apply_fallback_edit;

#[test]
fn add_relaxing_day_appends_relaxation_template() {
    let itinerary = sample_itinerary(2);
    let prefs = sample_preferences();

    let result = apply_fallback_edit("add one more day, make it relaxing", &itinerary, &prefs);

    assert_eq!(result.updated_itinerary.days.len(), 3);
    let new_day = &result.updated_itinerary.days[2];
    assert_eq!(new_day.day, 3);
    assert!(new_day.title.contains("Relaxation"));
    assert!(new_day.morning.contains("Lisbon"));
    assert!(result.updated_itinerary.overview.contains("3 days"));
    assert!(result.response_message.contains("Added day 3"));
    assert!(result.response_message.contains("temporarily unavailable"));
}

#[test]
fn add_day_without_relax_uses_exploration_template() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit(
        "can you add an extra day at the end?",
        &itinerary,
        &sample_preferences(),
    );

    assert_eq!(result.updated_itinerary.days.len(), 3);
    assert!(result.updated_itinerary.days[2].title.contains("Extra Day"));
    assert!(!result.updated_itinerary.days[2].title.contains("Relaxation"));
}

#[test]
fn explicit_high_day_number_is_kept_without_renumbering() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit("please add day 7", &itinerary, &sample_preferences());

    // Appended, not inserted: the day field may not match list position.
    assert_eq!(result.updated_itinerary.days.len(), 3);
    assert_eq!(result.updated_itinerary.days[2].day, 7);
    assert!(result.response_message.contains("Added day 7"));
}

#[test]
fn add_day_on_empty_itinerary_is_a_no_op() {
    let mut itinerary = sample_itinerary(1);
    itinerary.days.clear();

    let result = apply_fallback_edit("add one more day", &itinerary, &sample_preferences());

    assert!(result.updated_itinerary.days.is_empty());
    assert!(result.response_message.contains("unchanged"));
}

#[test]
fn targeted_luxury_edit_leaves_other_days_untouched() {
    let itinerary = sample_itinerary(3);
    let result = apply_fallback_edit("update day 2 to be luxury", &itinerary, &sample_preferences());

    let updated = &result.updated_itinerary;
    assert_eq!(updated.days.len(), 3);
    assert_eq!(updated.days[0], itinerary.days[0]);
    assert_eq!(updated.days[2], itinerary.days[2]);

    let day2 = &updated.days[1];
    assert_ne!(day2, &itinerary.days[1]);
    assert!(day2.notes.starts_with("VIP concierge service"));
    // "market" in the morning text gets the opulent substitution.
    assert!(day2.morning.contains("artisan market"));
}

#[test]
fn targeted_relax_edit_is_idempotent() {
    let itinerary = sample_itinerary(3);
    let prefs = sample_preferences();

    let once = apply_fallback_edit("change day 2 to be relaxing", &itinerary, &prefs);
    let twice = apply_fallback_edit("change day 2 to be relaxing", &once.updated_itinerary, &prefs);

    assert_eq!(twice.updated_itinerary.days[1].title, "Relaxation Day 2");
    assert_eq!(once.updated_itinerary.days[1], twice.updated_itinerary.days[1]);
}

#[test]
fn targeted_edit_out_of_range_changes_nothing() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit("update day 9 to be luxury", &itinerary, &sample_preferences());

    // Day 9 does not exist, so the targeted pass skips. The message still
    // says "luxury", so the whole-itinerary pass takes over instead.
    assert_eq!(result.updated_itinerary.days.len(), 2);
    for day in &result.updated_itinerary.days {
        assert!(day.notes.starts_with("VIP concierge service"));
    }
}

#[test]
fn low_budget_request_downgrades_every_day() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit("make it low budget", &itinerary, &sample_preferences());

    for day in &result.updated_itinerary.days {
        assert!(day.food.starts_with("Budget-friendly:"));
        assert_eq!(
            day.notes,
            "Budget tips: look for lunch specials, free walking tours, and day passes for public transport."
        );
    }
    assert!(result.response_message.contains("budget-friendly"));
}

#[test]
fn luxury_request_upgrades_every_day() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit(
        "upgrade the trip to luxury please",
        &itinerary,
        &sample_preferences(),
    );

    for day in &result.updated_itinerary.days {
        assert!(day.notes.starts_with("VIP concierge service"));
    }
}

#[test]
fn keyword_swaps_match_case_insensitively() {
    let mut itinerary = sample_itinerary(1);
    itinerary.days[0] = make_day(1, "Old Town", "Tour the Market district");

    let result = apply_fallback_edit(
        "upgrade everything to luxury",
        &itinerary,
        &sample_preferences(),
    );

    let morning = &result.updated_itinerary.days[0].morning;
    assert!(morning.contains("private guided tour"));
    assert!(morning.contains("artisan market visit"));
}

#[test]
fn cascade_adjusts_pacing_before_a_new_rest_day() {
    let mut itinerary = sample_itinerary(2);
    itinerary.days[1] = make_day(2, "Ridge Day", "Morning hike to the ridge");

    let result = apply_fallback_edit(
        "add an extra day to relax and update the rest accordingly",
        &itinerary,
        &sample_preferences(),
    );

    assert_eq!(result.updated_itinerary.days.len(), 3);
    // The second-to-last day (the old hiking day) gets a pacing note
    // prepended, non-destructively.
    let adjusted = &result.updated_itinerary.days[1];
    assert!(adjusted.notes.starts_with("Pacing adjusted:"));
    assert!(adjusted.notes.contains("Notes for day 2"));
}

#[test]
fn cascade_skips_days_without_hike_or_busy_markers() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit(
        "add an extra day to relax and update the rest accordingly",
        &itinerary,
        &sample_preferences(),
    );

    assert_eq!(result.updated_itinerary.days[1].notes, "Notes for day 2");
}

#[test]
fn unmatched_message_returns_itinerary_unchanged() {
    let itinerary = sample_itinerary(2);
    let result = apply_fallback_edit("what's the weather like", &itinerary, &sample_preferences());

    assert_eq!(result.updated_itinerary, itinerary);
    assert!(result.response_message.contains("what's the weather like"));
    assert!(result.response_message.contains("unchanged"));
}
