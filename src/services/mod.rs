pub mod chat_service;
pub mod export_service;
pub mod fallback_service;
pub mod gemini_service;
pub mod itinerary_service;
pub mod prompt_service;
pub mod response_parser;
