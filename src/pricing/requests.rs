//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use crate::models::{ParticipantCount, TripDuration};

/// Request to calculate a trip quote
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub duration: TripDuration,
    #[serde(default)]
    pub participants: ParticipantCount,
    #[serde(default)]
    pub activities: Vec<String>,
    /// Accepted for compatibility; does not affect pricing
    #[serde(default)]
    pub designation: Option<String>,
}

