pub mod health;
pub mod itinerary;
pub mod property;
pub mod proximity;
pub mod selection;
pub mod session;
