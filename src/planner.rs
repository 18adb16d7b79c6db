//! Trip planning service.
//!
//! Runs a full submission through validation, pricing and itinerary layout and
//! collects everything a summary or proposal needs into one `TripPlan`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::itinerary::{build_itinerary, ItineraryEntry};
use crate::models::{ParticipantCount, TripDuration, TripRequest};
use crate::pricing::calculators::DiscountedTotal;
use crate::pricing::{apply_discount, round_money, services, Quote};
use crate::validation::validate_trip;
use crate::AppState;

/// A selected activity with its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedActivity {
    pub tag: String,
    pub display_name: String,
}

/// A validated, priced and scheduled trip
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub reference: Uuid,
    pub date: NaiveDate,
    pub duration: TripDuration,
    pub participants: ParticipantCount,
    pub designation: String,
    pub notes: String,
    pub activities: Vec<PlannedActivity>,
    pub quote: Quote,
    pub discount: DiscountedTotal,
    pub itinerary: Vec<ItineraryEntry>,
    pub currency_symbol: String,
    pub generated_at: DateTime<Utc>,
}

impl TripPlan {
    /// Amount due after discount, rounded to whole currency units
    pub fn display_total(&self) -> Decimal {
        round_money(self.discount.total, 0)
    }

    pub fn has_discount(&self) -> bool {
        !self.discount.discount.is_zero()
    }

    /// Long-form trip date, e.g. "Wednesday, May 1, 2030"
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    /// Currency symbol followed by a whole-unit amount
    pub fn money(&self, amount: Decimal) -> String {
        format!("{}{}", self.currency_symbol, round_money(amount, 0).normalize())
    }
}

/// Validate, price and schedule a trip submission.
///
/// # Arguments
/// * `state` - Application state (catalog, cache, config)
/// * `request` - The submitted trip
/// * `today` - Current date, for the earliest-booking rule
pub async fn plan_trip(state: &AppState, request: &TripRequest, today: NaiveDate) -> Result<TripPlan> {
    let trip = validate_trip(request, today)?;

    let quote = services::quote(
        &state.cache,
        &state.catalog,
        state.config.unknown_input_policy,
        &state.config.currency_symbol,
        request.duration,
        request.participants,
        &request.activities,
    )
    .await?;

    let discount = apply_discount(quote.breakdown.total, request.discount_percent);
    let itinerary = build_itinerary(&state.catalog, request.duration, &request.activities);

    let activities = request
        .activities
        .iter()
        .map(|tag| PlannedActivity {
            tag: tag.clone(),
            display_name: state
                .catalog
                .activity(tag)
                .map(|def| def.display_name.clone())
                .unwrap_or_else(|| tag.clone()),
        })
        .collect();

    let plan = TripPlan {
        reference: Uuid::new_v4(),
        date: trip.date,
        duration: request.duration,
        participants: request.participants,
        designation: request.designation.trim().to_string(),
        notes: request.notes.trim().to_string(),
        activities,
        quote,
        discount,
        itinerary,
        currency_symbol: state.config.currency_symbol.clone(),
        generated_at: Utc::now(),
    };

    tracing::info!(
        "Planned trip {} for {} on {}: {} participant(s), total {}",
        plan.reference,
        plan.designation,
        plan.date,
        plan.participants.get(),
        plan.display_total()
    );

    Ok(plan)
}
