use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::db::sqlite::Database;
use crate::middleware::auth::Claims;
use crate::models::chat::{ChatMessageRequest, ChatResponse};
use crate::services::chat_service::{process_chat_and_update, ChatError};
use crate::services::gemini_service::GeminiClient;
use crate::services::itinerary_service::{get_chat_history, get_itinerary_by_id};

/*
    POST /api/itineraries/{id}/chat
*/
pub async fn post_message(
    claims: web::ReqData<Claims>,
    path: web::Path<i64>,
    db: web::Data<Database>,
    gemini: web::Data<Option<GeminiClient>>,
    input: web::Json<ChatMessageRequest>,
) -> impl Responder {
    let itinerary_id = path.into_inner();

    match process_chat_and_update(
        &db,
        gemini.get_ref().as_ref(),
        itinerary_id,
        &claims.sub,
        &input.message,
    )
    .await
    {
        Ok(outcome) => HttpResponse::Ok().json(ChatResponse {
            success: true,
            response_message: outcome.response_message,
            updated_itinerary: outcome.updated_itinerary,
            updated_preferences: outcome.updated_preferences,
            chat_history: outcome.chat_history,
        }),
        Err(ChatError::NotFound) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Chat turn failed for itinerary {}: {}", itinerary_id, err);
            HttpResponse::InternalServerError().body("Failed to process chat message")
        }
    }
}

/*
    GET /api/itineraries/{id}/chat
*/
pub async fn get_history(
    claims: web::ReqData<Claims>,
    path: web::Path<i64>,
    db: web::Data<Database>,
) -> impl Responder {
    let itinerary_id = path.into_inner();

    // Ownership gate first; history is only visible through an itinerary
    // the caller owns.
    match get_itinerary_by_id(&db, itinerary_id, &claims.sub) {
        Ok(Some(_)) => match get_chat_history(&db, itinerary_id) {
            Ok(history) => HttpResponse::Ok().json(json!({
                "success": true,
                "data": history,
            })),
            Err(err) => {
                eprintln!("Failed to load chat history {}: {:?}", itinerary_id, err);
                HttpResponse::InternalServerError().body("Failed to retrieve chat history")
            }
        },
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Failed to retrieve itinerary {}: {:?}", itinerary_id, err);
            HttpResponse::InternalServerError().body("Failed to retrieve chat history")
        }
    }
}
