use serde::{Deserialize, Serialize};

/// Travel preferences captured when an itinerary is first generated.
/// Stored as free-form JSON afterwards so chat edits can reshape fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPreferenceRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travel_style: String,
    pub food_preferences: Vec<String>,
    pub interests: Vec<String>,
    pub budget: String,
    pub group_size: u32,
    pub special_requirements: Option<String>,
}
