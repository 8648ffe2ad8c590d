use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::itinerary::Itinerary;

/// A persisted chat turn half. Append-only; removed only when the owning
/// itinerary is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub itinerary_id: i64,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response_message: String,
    pub updated_itinerary: Itinerary,
    pub updated_preferences: Value,
    pub chat_history: Vec<ChatMessage>,
}
