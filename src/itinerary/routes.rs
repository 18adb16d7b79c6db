//! Itinerary API routes

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::Json;
use crate::models::TripDuration;
use crate::pricing::routes::method_not_allowed;
use crate::pricing::services::{apply_policy, find_unrecognized};
use crate::AppState;

use super::builder::{build_itinerary, ItineraryEntry};

/// Request to build an itinerary
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    pub duration: TripDuration,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Timeline entry as sent to the client
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryEntryResponse {
    pub time: String,
    /// Minutes after midnight of the trip day
    pub minutes: i64,
    pub title: String,
    pub description: String,
}

impl From<&ItineraryEntry> for ItineraryEntryResponse {
    fn from(entry: &ItineraryEntry) -> Self {
        Self {
            time: entry.start.label(),
            minutes: entry.start.minutes(),
            title: entry.title.clone(),
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub entries: Vec<ItineraryEntryResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/itinerary", post(itinerary).fallback(method_not_allowed))
}

/// Lay out the day timeline for a selection
async fn itinerary(
    State(state): State<AppState>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>> {
    let unrecognized = find_unrecognized(&state.catalog, request.duration, &request.activities);
    let warnings = apply_policy(state.config.unknown_input_policy, &unrecognized)?;

    let entries = build_itinerary(&state.catalog, request.duration, &request.activities);

    Ok(Json(ItineraryResponse {
        entries: entries.iter().map(ItineraryEntryResponse::from).collect(),
        warnings,
    }))
}
