pub mod addon;
pub mod itinerary;
pub mod property;
pub mod selection;
