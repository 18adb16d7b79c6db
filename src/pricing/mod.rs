//! Pricing engine module.
//!
//! Prices a trip from the catalog: a per-duration base rate plus a per-person
//! rate for every selected activity, each multiplied by the participant count.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{apply_discount, compute_cost, round_money, CostBreakdown, LineItem};
pub use routes::router;
pub use services::{PricingError, Quote, UnknownInputPolicy};
