#![allow(dead_code)]

use serde_json::{json, Value};

use tripplan_api::models::itinerary::{Day, Itinerary};

pub fn make_day(number: u32, title: &str, morning: &str) -> Day {
    Day {
        day: number,
        title: title.to_string(),
        morning: morning.to_string(),
        afternoon: format!("Afternoon plan for day {}", number),
        evening: format!("Evening plan for day {}", number),
        food: format!("Food plan for day {}", number),
        notes: format!("Notes for day {}", number),
    }
}

pub fn sample_itinerary(day_count: u32) -> Itinerary {
    Itinerary {
        overview: format!("A {}-day trip around Lisbon.", day_count),
        days: (1..=day_count)
            .map(|n| {
                make_day(
                    n,
                    &format!("Day {} in Lisbon", n),
                    &format!("Visit the old market on day {}", n),
                )
            })
            .collect(),
    }
}

pub fn sample_preferences() -> Value {
    json!({
        "destination": "Lisbon",
        "start_date": "2026-09-01",
        "end_date": "2026-09-05",
        "travel_style": "relaxed",
        "food_preferences": ["seafood"],
        "interests": ["history", "architecture"],
        "budget": "medium",
        "group_size": 2,
        "special_requirements": null
    })
}
