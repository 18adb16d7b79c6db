//! Activity and price catalog.
//!
//! One table drives both pricing and itinerary text: every activity tag maps to
//! its per-person rate and the names shown to the traveller. The built-in
//! catalog can be replaced by a JSON file of the same shape.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::AppError;

use super::TripDuration;

/// A bookable activity
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityDef {
    /// Per-person price
    pub rate: Decimal,
    /// Short name used in summaries ("Team Building")
    pub display_name: String,
    /// Itinerary entry title ("Sightseeing Tour")
    pub title: String,
    /// Itinerary entry description
    pub description: String,
}

/// Static price table: duration (hours) -> per-person base rate, tag -> activity
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub base_rates: BTreeMap<u32, Decimal>,
    pub activities: BTreeMap<String, ActivityDef>,
}

impl Catalog {
    /// Per-person base rate for a trip duration; only whole hours are listed
    pub fn base_rate(&self, duration: TripDuration) -> Option<Decimal> {
        duration
            .whole_hours()
            .and_then(|hours| self.base_rates.get(&hours))
            .copied()
    }

    /// Look up an activity by tag
    pub fn activity(&self, tag: &str) -> Option<&ActivityDef> {
        self.activities.get(tag)
    }

    pub fn is_known_duration(&self, duration: TripDuration) -> bool {
        self.base_rate(duration).is_some()
    }

    pub fn is_known_activity(&self, tag: &str) -> bool {
        self.activities.contains_key(tag)
    }

    /// Parse and check a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("invalid catalog: {}", e)))?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} durations, {} activities",
            path.display(),
            catalog.base_rates.len(),
            catalog.activities.len()
        );
        Ok(catalog)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.base_rates.is_empty() {
            return Err(AppError::Config("catalog has no base rates".to_string()));
        }
        if self.activities.is_empty() {
            return Err(AppError::Config("catalog has no activities".to_string()));
        }
        if let Some((duration, _)) = self.base_rates.iter().find(|(_, r)| r.is_sign_negative()) {
            return Err(AppError::Config(format!(
                "negative base rate for {} hour trips",
                duration
            )));
        }
        if let Some((tag, _)) = self.activities.iter().find(|(_, a)| a.rate.is_sign_negative()) {
            return Err(AppError::Config(format!("negative rate for activity '{}'", tag)));
        }
        Ok(())
    }
}

fn activity(rate: Decimal, display_name: &str, title: &str, description: &str) -> ActivityDef {
    ActivityDef {
        rate,
        display_name: display_name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let base_rates = BTreeMap::from([(8, dec!(50)), (10, dec!(100))]);

        let activities = BTreeMap::from([
            (
                "sightseeing".to_string(),
                activity(
                    dec!(25),
                    "Sightseeing",
                    "Sightseeing Tour",
                    "Explore local landmarks and attractions",
                ),
            ),
            (
                "adventure".to_string(),
                activity(
                    dec!(45),
                    "Adventure",
                    "Adventure Activities",
                    "Thrilling outdoor experiences",
                ),
            ),
            (
                "teambuilding".to_string(),
                activity(
                    dec!(35),
                    "Team Building",
                    "Team Building",
                    "Group activities and challenges",
                ),
            ),
            (
                "cultural".to_string(),
                activity(
                    dec!(30),
                    "Cultural Experience",
                    "Cultural Experience",
                    "Museums and local culture",
                ),
            ),
            (
                "meals".to_string(),
                activity(
                    dec!(20),
                    "Meals",
                    "Meals & Refreshments",
                    "Lunch and refreshment breaks",
                ),
            ),
            (
                "transport".to_string(),
                activity(
                    dec!(15),
                    "Transport",
                    "Transportation",
                    "Round-trip transportation",
                ),
            ),
        ]);

        Self {
            base_rates,
            activities,
        }
    }
}
