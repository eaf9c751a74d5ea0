pub mod itinerary_engine;
pub mod proximity_service;
pub mod save_service;
