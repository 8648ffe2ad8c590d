use std::error::Error;
use std::fmt;

use serde_json::Value;

use crate::db::sqlite::Database;
use crate::models::chat::ChatMessage;
use crate::models::itinerary::Itinerary;
use crate::services::fallback_service::apply_fallback_edit;
use crate::services::gemini_service::{ChatTurn, GeminiClient, GeminiError};
use crate::services::itinerary_service::{
    append_chat_message, get_chat_history, get_itinerary_by_id, update_itinerary_content,
};
use crate::services::prompt_service::build_chat_prompt;
use crate::services::response_parser::extract_structured_result;

#[derive(Debug)]
pub enum ChatError {
    /// Missing itinerary or an owner mismatch; callers cannot tell which.
    NotFound,
    Storage(Box<dyn Error>),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::NotFound => write!(f, "Itinerary not found"),
            ChatError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl Error for ChatError {}

impl From<Box<dyn Error>> for ChatError {
    fn from(err: Box<dyn Error>) -> Self {
        ChatError::Storage(err)
    }
}

/// The post-state of one chat turn.
pub struct ChatOutcome {
    pub response_message: String,
    pub updated_itinerary: Itinerary,
    pub updated_preferences: Value,
    pub chat_history: Vec<ChatMessage>,
}

struct ResolvedEdit {
    response_message: String,
    updated_itinerary: Itinerary,
    updated_preferences: Value,
}

/// Handle one chat turn against an itinerary.
///
/// The user message is persisted before the model is called, so it is on
/// record even if everything downstream fails. Any AI failure (network,
/// timeout, unusable JSON, or AI not configured at all) falls through to
/// the deterministic fallback engine; that path never surfaces an error
/// to the user.
pub async fn process_chat_and_update(
    db: &Database,
    gemini: Option<&GeminiClient>,
    itinerary_id: i64,
    owner: &str,
    user_message: &str,
) -> Result<ChatOutcome, ChatError> {
    let record = get_itinerary_by_id(db, itinerary_id, owner)?.ok_or(ChatError::NotFound)?;

    append_chat_message(db, itinerary_id, "user", user_message)?;
    let history = get_chat_history(db, itinerary_id)?;

    let resolved = match attempt_ai_edit(
        gemini,
        user_message,
        &record.itinerary,
        &record.preferences,
        &history,
    )
    .await
    {
        Ok(edit) => edit,
        Err(err) => {
            eprintln!(
                "AI edit failed for itinerary {}, using fallback: {}",
                itinerary_id, err
            );
            let fallback =
                apply_fallback_edit(user_message, &record.itinerary, &record.preferences);
            ResolvedEdit {
                response_message: fallback.response_message,
                updated_itinerary: fallback.updated_itinerary,
                updated_preferences: record.preferences.clone(),
            }
        }
    };

    append_chat_message(db, itinerary_id, "assistant", &resolved.response_message)?;
    update_itinerary_content(
        db,
        itinerary_id,
        &resolved.updated_itinerary,
        &resolved.updated_preferences,
    )?;

    // Re-read so the caller sees both new messages with their stored ids.
    let chat_history = get_chat_history(db, itinerary_id)?;

    Ok(ChatOutcome {
        response_message: resolved.response_message,
        updated_itinerary: resolved.updated_itinerary,
        updated_preferences: resolved.updated_preferences,
        chat_history,
    })
}

/// AI-driven edit attempt. Every failure mode collapses into a
/// `GeminiError` the caller recovers from.
async fn attempt_ai_edit(
    gemini: Option<&GeminiClient>,
    user_message: &str,
    itinerary: &Itinerary,
    preferences: &Value,
    history: &[ChatMessage],
) -> Result<ResolvedEdit, GeminiError> {
    let client = gemini.ok_or_else(|| {
        GeminiError::EnvironmentError("AI client not configured".to_string())
    })?;

    // History excluding the user message we just saved; the prompt embeds
    // the tail itself.
    let prior = &history[..history.len().saturating_sub(1)];
    let prompt = build_chat_prompt(preferences, itinerary, prior, user_message);

    let raw = client
        .chat_complete(&[ChatTurn {
            role: "user".to_string(),
            text: prompt,
        }])
        .await?;

    let parsed = extract_structured_result(&raw);

    let response_message = parsed
        .get("response_message")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GeminiError::ResponseError("Edit result missing response_message".to_string())
        })?
        .to_string();

    let updated_itinerary = parsed
        .get("updated_itinerary")
        .and_then(Itinerary::from_model_value)
        .ok_or_else(|| {
            GeminiError::ResponseError(
                "Edit result missing a usable updated_itinerary".to_string(),
            )
        })?;

    let updated_preferences = parsed
        .get("updated_preferences")
        .filter(|v| v.is_object())
        .cloned()
        .ok_or_else(|| {
            GeminiError::ResponseError("Edit result missing updated_preferences".to_string())
        })?;

    Ok(ResolvedEdit {
        response_message,
        updated_itinerary,
        updated_preferences,
    })
}
