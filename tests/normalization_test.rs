use serde_json::json;

use tripplan_api::models::itinerary::Itinerary;

#[test]
fn missing_day_numbers_fall_back_to_position() {
    let value = json!({
        "overview": "Two days.",
        "days": [
            { "title": "First" },
            { "day": 5, "title": "Second" }
        ]
    });

    let itinerary = Itinerary::from_model_value(&value).unwrap();
    assert_eq!(itinerary.days[0].day, 1);
    assert_eq!(itinerary.days[1].day, 5);
}

#[test]
fn out_of_range_day_numbers_fall_back_to_position() {
    // Larger than u32 can hold; treated like any other malformed field.
    let value = json!({
        "days": [
            { "day": 9_000_000_000u64, "title": "Oversized" }
        ]
    });

    let itinerary = Itinerary::from_model_value(&value).unwrap();
    assert_eq!(itinerary.days[0].day, 1);
    assert_eq!(itinerary.days[0].title, "Oversized");
}

#[test]
fn missing_text_fields_become_empty_strings() {
    let value = json!({ "days": [{ "day": 1 }] });

    let itinerary = Itinerary::from_model_value(&value).unwrap();
    let day = &itinerary.days[0];
    assert_eq!(day.day, 1);
    assert!(day.title.is_empty());
    assert!(day.morning.is_empty());
    assert!(day.food.is_empty());
    assert!(day.notes.is_empty());
}

#[test]
fn values_without_a_days_array_are_rejected() {
    assert!(Itinerary::from_model_value(&json!({ "overview": "x" })).is_none());
    assert!(Itinerary::from_model_value(&json!([1, 2, 3])).is_none());
    assert!(Itinerary::from_model_value(&json!({ "days": "not an array" })).is_none());
}
