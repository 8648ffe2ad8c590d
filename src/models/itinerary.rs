use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry in an itinerary. Every text field is guaranteed present
/// (possibly empty) once the value has passed through `from_model_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub day: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub morning: String,
    #[serde(default)]
    pub afternoon: String,
    #[serde(default)]
    pub evening: String,
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub notes: String,
}

/// The structured multi-day travel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Normalize a model-produced JSON value into a fully-populated itinerary.
    ///
    /// Returns `None` unless the value is an object carrying a `days` array.
    /// Within each day, a missing or non-numeric `day` field becomes
    /// `index + 1`; missing text fields become empty strings. Running an
    /// already-normalized itinerary through this again changes nothing.
    pub fn from_model_value(value: &Value) -> Option<Itinerary> {
        let obj = value.as_object()?;
        let raw_days = obj.get("days")?.as_array()?;

        let overview = obj
            .get("overview")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let days = raw_days
            .iter()
            .enumerate()
            .map(|(index, raw)| Day {
                day: raw
                    .get("day")
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(index as u32 + 1),
                title: text_field(raw, "title"),
                morning: text_field(raw, "morning"),
                afternoon: text_field(raw, "afternoon"),
                evening: text_field(raw, "evening"),
                food: text_field(raw, "food"),
                notes: text_field(raw, "notes"),
            })
            .collect();

        Some(Itinerary { overview, days })
    }
}

fn text_field(raw: &Value, key: &str) -> String {
    raw.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

/// A stored itinerary row, owned by the user who created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRecord {
    pub id: i64,
    pub user_id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub preferences: Value,
    pub itinerary: Itinerary,
    pub created_at: String,
}

/// Listing shape: what the dashboard needs, without preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItinerarySummary {
    pub id: i64,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub itinerary: Itinerary,
    pub created_at: String,
}
