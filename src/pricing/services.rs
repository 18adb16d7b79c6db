//! Pricing service functions.
//!
//! Wraps the pure calculator with the quote cache and the deployment's policy
//! for inputs the catalog does not recognise.

use std::str::FromStr;
use std::sync::Arc;

use crate::cache::{AppCache, QuoteKey};
use crate::error::AppError;
use crate::models::{Catalog, ParticipantCount, TripDuration};
use crate::validation;

use super::calculators::{compute_cost, CostBreakdown, UnrecognizedInput};

/// What to do with durations or activity tags missing from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownInputPolicy {
    /// Price them at zero (itinerary: skip them) and report a warning
    #[default]
    ZeroPrice,
    /// Refuse the request
    Reject,
}

impl FromStr for UnknownInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "zero_price" | "lenient" => Ok(UnknownInputPolicy::ZeroPrice),
            "reject" | "strict" => Ok(UnknownInputPolicy::Reject),
            other => Err(format!(
                "unknown input policy '{}' (expected 'zero' or 'reject')",
                other
            )),
        }
    }
}

/// Pricing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    UnknownDuration { duration: TripDuration },
    UnknownActivity { tag: String },
}

impl PricingError {
    /// Short machine-readable error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::UnknownDuration { .. } => "Unknown duration",
            PricingError::UnknownActivity { .. } => "Unknown activity",
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::UnknownDuration { duration } => {
                write!(f, "No base rate for a {} hour trip", duration)
            }
            PricingError::UnknownActivity { tag } => {
                write!(f, "Activity '{}' is not in the catalog", tag)
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl From<&UnrecognizedInput> for PricingError {
    fn from(input: &UnrecognizedInput) -> Self {
        match input {
            UnrecognizedInput::Duration(duration) => PricingError::UnknownDuration {
                duration: *duration,
            },
            UnrecognizedInput::Activity(tag) => PricingError::UnknownActivity { tag: tag.clone() },
        }
    }
}

/// Apply the unknown-input policy to a list of unrecognised inputs.
///
/// Returns the warnings to show under `ZeroPrice`, or the first offending
/// input as an error under `Reject`.
pub fn apply_policy(
    policy: UnknownInputPolicy,
    unrecognized: &[UnrecognizedInput],
) -> Result<Vec<String>, PricingError> {
    match (policy, unrecognized.first()) {
        (_, None) => Ok(Vec::new()),
        (UnknownInputPolicy::Reject, Some(first)) => Err(PricingError::from(first)),
        (UnknownInputPolicy::ZeroPrice, Some(_)) => {
            for input in unrecognized {
                tracing::warn!("{}", input);
            }
            Ok(unrecognized.iter().map(ToString::to_string).collect())
        }
    }
}

/// Collect inputs the catalog does not know, without pricing anything
pub fn find_unrecognized(
    catalog: &Catalog,
    duration: TripDuration,
    activities: &[String],
) -> Vec<UnrecognizedInput> {
    let mut unrecognized = Vec::new();
    if !catalog.is_known_duration(duration) {
        unrecognized.push(UnrecognizedInput::Duration(duration));
    }
    unrecognized.extend(
        activities
            .iter()
            .filter(|tag| !catalog.is_known_activity(tag))
            .map(|tag| UnrecognizedInput::Activity(tag.clone())),
    );
    unrecognized
}

/// A priced trip plus any policy warnings
#[derive(Debug, Clone)]
pub struct Quote {
    pub breakdown: Arc<CostBreakdown>,
    pub warnings: Vec<String>,
}

/// Price a trip.
///
/// Rejects an empty activity selection, serves identical requests from the
/// quote cache, then applies the unknown-input policy.
///
/// # Arguments
/// * `cache` - Application cache (quotes)
/// * `catalog` - Price table
/// * `policy` - Unknown-input policy
/// * `currency_symbol` - Symbol used in line item labels
/// * `duration` - Trip length in hours
/// * `participants` - Number of travellers
/// * `activities` - Activity tags in selection order
pub async fn quote(
    cache: &AppCache,
    catalog: &Catalog,
    policy: UnknownInputPolicy,
    currency_symbol: &str,
    duration: TripDuration,
    participants: ParticipantCount,
    activities: &[String],
) -> Result<Quote, AppError> {
    validation::require_activities(activities)?;

    let key = QuoteKey::new(duration, participants, activities);
    let breakdown = cache
        .quote_or_compute(key, || {
            compute_cost(catalog, duration, participants, activities, currency_symbol)
        })
        .await;

    let warnings = apply_policy(policy, &breakdown.unrecognized)?;

    tracing::debug!(
        "Quoted {}h trip for {} participant(s), {} activities: total {}",
        duration,
        participants.get(),
        activities.len(),
        breakdown.total
    );

    Ok(Quote { breakdown, warnings })
}
