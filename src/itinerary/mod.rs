//! Itinerary builder.
//!
//! Turns a trip duration and activity selection into a time-labelled day plan.

pub mod builder;
pub mod routes;

pub use builder::{build_itinerary, build_itinerary_with, ItineraryEntry, ItinerarySettings, SlotTime};
pub use routes::router;
