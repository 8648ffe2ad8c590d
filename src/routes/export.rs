use actix_web::{web, HttpResponse, Responder};

use crate::db::sqlite::Database;
use crate::middleware::auth::Claims;
use crate::services::export_service::render_markdown;
use crate::services::itinerary_service::get_itinerary_by_id;

/*
    GET /api/itineraries/{id}/export
*/
pub async fn export_markdown(
    claims: web::ReqData<Claims>,
    path: web::Path<i64>,
    db: web::Data<Database>,
) -> impl Responder {
    let id = path.into_inner();

    match get_itinerary_by_id(&db, id, &claims.sub) {
        Ok(Some(record)) => {
            let markdown = render_markdown(&record);
            HttpResponse::Ok()
                .content_type("text/markdown; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"itinerary_{}.md\"", id),
                ))
                .body(markdown)
        }
        Ok(None) => HttpResponse::NotFound().body("Itinerary not found"),
        Err(err) => {
            eprintln!("Failed to export itinerary {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to export itinerary")
        }
    }
}
