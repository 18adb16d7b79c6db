//! Domain models shared by pricing, itinerary and proposal rendering

pub mod catalog;
pub mod trip;

pub use catalog::{ActivityDef, Catalog};
pub use trip::{ParticipantCount, TripDuration, TripRequest};
