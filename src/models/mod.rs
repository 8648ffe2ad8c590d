pub mod chat;
pub mod itinerary;
pub mod preferences;
