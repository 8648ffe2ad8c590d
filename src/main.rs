use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripplan_api::db::sqlite::Database;
use tripplan_api::middleware::auth::AuthMiddleware;
use tripplan_api::routes;
use tripplan_api::services::gemini_service::{GeminiClient, GeminiConfig};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "itineraries.db";
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,http://localhost:4173";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
    println!("Opening database at {}", db_path);
    let database = Database::open(&db_path).expect("Failed to initialize database");

    // Model configuration is resolved once here and handed to the client;
    // nothing downstream reads the environment for it. A missing API key
    // disables generation and leaves chat on the fallback engine.
    let gemini: Option<GeminiClient> = match GeminiConfig::from_env() {
        Ok(config) => match GeminiClient::new(config) {
            Ok(client) => Some(client),
            Err(err) => {
                eprintln!("Failed to build Gemini client: {}", err);
                None
            }
        },
        Err(err) => {
            println!(
                "Warning: {}. AI generation disabled; chat edits will use the fallback engine.",
                err
            );
            None
        }
    };

    let allowed_origins: Vec<String> =
        env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(database.clone()))
            .app_data(web::Data::new(gemini.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .route(
                        "/generate-itinerary",
                        web::post().to(routes::itinerary::generate),
                    )
                    .route("/itineraries", web::get().to(routes::itinerary::get_all))
                    .route(
                        "/itineraries/{id}",
                        web::get().to(routes::itinerary::get_by_id),
                    )
                    .route(
                        "/itineraries/{id}",
                        web::delete().to(routes::itinerary::delete),
                    )
                    .route(
                        "/itineraries/{id}/chat",
                        web::post().to(routes::chat::post_message),
                    )
                    .route(
                        "/itineraries/{id}/chat",
                        web::get().to(routes::chat::get_history),
                    )
                    .route(
                        "/itineraries/{id}/export",
                        web::get().to(routes::export::export_markdown),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
