use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

use crate::db::sqlite::Database;
use crate::middleware::auth::Claims;
use crate::models::itinerary::Itinerary;
use crate::models::preferences::TravelPreferenceRequest;
use crate::services::gemini_service::GeminiClient;
use crate::services::itinerary_service::{
    delete_itinerary, get_itineraries_by_user, get_itinerary_by_id, save_itinerary,
};
use crate::services::prompt_service::build_itinerary_prompt;
use crate::services::response_parser::extract_structured_result;

/*
    POST /api/generate-itinerary
*/
pub async fn generate(
    claims: web::ReqData<Claims>,
    db: web::Data<Database>,
    gemini: web::Data<Option<GeminiClient>>,
    input: web::Json<TravelPreferenceRequest>,
) -> impl Responder {
    let client = match gemini.get_ref() {
        Some(client) => client,
        None => {
            return HttpResponse::InternalServerError().body("Google API key not configured")
        }
    };

    let data = input.into_inner();
    let prompt = build_itinerary_prompt(&data);

    // No fallback on this path: a failed generation is surfaced as a
    // server error, unlike chat edits.
    let raw = match client.generate(&prompt).await {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("Itinerary generation failed: {}", err);
            return HttpResponse::InternalServerError().body("Failed to generate itinerary");
        }
    };

    let parsed = extract_structured_result(&raw);
    let itinerary = match Itinerary::from_model_value(&Value::Object(parsed)) {
        Some(itinerary) => itinerary,
        None => {
            eprintln!("Generation returned unusable JSON: {}", raw);
            return HttpResponse::InternalServerError().body("AI returned invalid JSON");
        }
    };

    let preferences = match serde_json::to_value(&data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to serialize preferences: {}", err);
            return HttpResponse::InternalServerError().body("Failed to save itinerary");
        }
    };

    match save_itinerary(
        &db,
        &claims.sub,
        &data.destination,
        &data.start_date,
        &data.end_date,
        &preferences,
        &itinerary,
    ) {
        Ok(itinerary_id) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Itinerary generated successfully",
            "data": {
                "itinerary_id": itinerary_id,
                "user_email": claims.sub,
                "itinerary": itinerary,
            }
        })),
        Err(err) => {
            eprintln!("Failed to save itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save itinerary")
        }
    }
}

/*
    GET /api/itineraries
*/
pub async fn get_all(claims: web::ReqData<Claims>, db: web::Data<Database>) -> impl Responder {
    match get_itineraries_by_user(&db, &claims.sub) {
        Ok(summaries) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": summaries,
        })),
        Err(err) => {
            eprintln!("Failed to list itineraries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve itineraries")
        }
    }
}

/*
    GET /api/itineraries/{id}
*/
pub async fn get_by_id(
    claims: web::ReqData<Claims>,
    path: web::Path<i64>,
    db: web::Data<Database>,
) -> impl Responder {
    let id = path.into_inner();
    match get_itinerary_by_id(&db, id, &claims.sub) {
        Ok(Some(record)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": record,
        })),
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Failed to retrieve itinerary {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to retrieve itinerary")
        }
    }
}

/*
    DELETE /api/itineraries/{id}
*/
pub async fn delete(
    claims: web::ReqData<Claims>,
    path: web::Path<i64>,
    db: web::Data<Database>,
) -> impl Responder {
    let id = path.into_inner();
    if delete_itinerary(&db, id, &claims.sub) {
        HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Itinerary deleted",
        }))
    } else {
        HttpResponse::NotFound().body("Itinerary not found")
    }
}
