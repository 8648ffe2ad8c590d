use serde_json::Value;

use crate::models::chat::ChatMessage;
use crate::models::itinerary::Itinerary;
use crate::models::preferences::TravelPreferenceRequest;

/// How many prior chat turns (a user message plus its assistant reply)
/// ride along with an edit prompt. Older history stays in the database
/// but is deliberately not forwarded, which keeps the prompt bounded.
const HISTORY_CONTEXT_TURNS: usize = 2;
const MESSAGES_PER_TURN: usize = 2;

/// Instruction for the initial one-shot generation.
pub fn build_itinerary_prompt(data: &TravelPreferenceRequest) -> String {
    format!(
        r#"You are a professional travel planner. Return ONLY valid JSON.

Destination: {destination}
Dates: {start_date} to {end_date}
Travel style: {travel_style}
Food preferences: {food_preferences}
Interests: {interests}
Budget: {budget}
Group size: {group_size}
Special requirements: {special_requirements}

JSON format:
{{
  "overview": "short summary",
  "days": [
    {{
      "day": 1,
      "title": "",
      "morning": "",
      "afternoon": "",
      "evening": "",
      "food": "",
      "notes": ""
    }}
  ]
}}"#,
        destination = data.destination,
        start_date = data.start_date,
        end_date = data.end_date,
        travel_style = data.travel_style,
        food_preferences = data.food_preferences.join(", "),
        interests = data.interests.join(", "),
        budget = data.budget,
        group_size = data.group_size,
        special_requirements = data
            .special_requirements
            .as_deref()
            .unwrap_or("None"),
    )
}

/// Instruction for a chat-driven edit. Embeds the full current itinerary
/// and preferences so the model edits in place, plus the tail of the
/// conversation for context.
pub fn build_chat_prompt(
    preferences: &Value,
    itinerary: &Itinerary,
    history: &[ChatMessage],
    user_message: &str,
) -> String {
    let itinerary_json = serde_json::to_string_pretty(itinerary)
        .unwrap_or_else(|_| "{}".to_string());
    let preferences_json = serde_json::to_string_pretty(preferences)
        .unwrap_or_else(|_| "{}".to_string());

    let mut recent = String::new();
    let tail_start = history
        .len()
        .saturating_sub(HISTORY_CONTEXT_TURNS * MESSAGES_PER_TURN);
    for message in &history[tail_start..] {
        recent.push_str(&format!("{}: {}\n", message.role, message.content));
    }
    if recent.is_empty() {
        recent.push_str("(no prior messages)\n");
    }

    format!(
        r#"You are a professional travel planner helping a user revise an existing itinerary.
Return ONLY a valid JSON object, with no surrounding text.

Current preferences:
{preferences_json}

Current itinerary:
{itinerary_json}

Recent conversation:
{recent}
User request: {user_message}

Respond with JSON of this exact shape:
{{
  "response_message": "short reply to the user",
  "updated_itinerary": {{
    "overview": "",
    "days": [
      {{
        "day": 1,
        "title": "",
        "morning": "",
        "afternoon": "",
        "evening": "",
        "food": "",
        "notes": ""
      }}
    ]
  }},
  "updated_preferences": {{}}
}}

Return the FULL updated itinerary, not a diff. Keep days the user did not
mention unchanged."#,
    )
}
