//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state. The same inputs
//! always produce the same breakdown.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Catalog, ParticipantCount, TripDuration};

/// Round to specified decimal places, halves away from zero.
///
/// Matches how totals are shown to travellers (`Math.round` on positive
/// amounts). Only used for display; breakdowns keep the exact value.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use trip_estimator::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(189.49), 0), dec!(189));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// One labelled row of a cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

/// An input the catalog does not know; it was priced at zero
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnrecognizedInput {
    Duration(TripDuration),
    Activity(String),
}

impl std::fmt::Display for UnrecognizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnrecognizedInput::Duration(hours) => {
                write!(f, "Unknown duration {} hours priced at 0", hours)
            }
            UnrecognizedInput::Activity(tag) => {
                write!(f, "Unknown activity '{}' priced at 0", tag)
            }
        }
    }
}

/// Result of pricing a trip
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub base_cost: Decimal,
    pub activity_cost: Decimal,
    pub total: Decimal,
    /// Base cost first, then one item per activity in input order
    pub line_items: Vec<LineItem>,
    pub unrecognized: Vec<UnrecognizedInput>,
}

impl CostBreakdown {
    /// Total rounded to whole currency units for display
    pub fn display_total(&self) -> Decimal {
        round_money(self.total, 0)
    }
}

/// Price a trip against the catalog.
///
/// Unknown durations and activity tags contribute zero and are recorded in
/// `unrecognized`; callers decide whether that is acceptable. Duplicate tags
/// are priced and listed once per occurrence.
///
/// # Arguments
/// * `catalog` - Price table
/// * `duration` - Trip length in hours
/// * `participants` - Number of travellers
/// * `activities` - Activity tags in selection order
/// * `currency_symbol` - Symbol used in line item labels (e.g. "₹")
pub fn compute_cost(
    catalog: &Catalog,
    duration: TripDuration,
    participants: ParticipantCount,
    activities: &[String],
    currency_symbol: &str,
) -> CostBreakdown {
    let count = Decimal::from(participants.get());
    let mut unrecognized = Vec::new();

    let base_rate = catalog.base_rate(duration).unwrap_or_else(|| {
        unrecognized.push(UnrecognizedInput::Duration(duration));
        Decimal::ZERO
    });
    let base_cost = base_rate * count;

    let mut line_items = Vec::with_capacity(activities.len() + 1);
    line_items.push(LineItem {
        label: rate_label("Base Cost", participants, base_rate, currency_symbol),
        amount: base_cost,
    });

    let mut activity_cost = Decimal::ZERO;
    for tag in activities {
        let rate = match catalog.activity(tag) {
            Some(def) => def.rate,
            None => {
                unrecognized.push(UnrecognizedInput::Activity(tag.clone()));
                Decimal::ZERO
            }
        };
        let cost = rate * count;
        activity_cost += cost;
        line_items.push(LineItem {
            label: rate_label(&capitalize(tag), participants, rate, currency_symbol),
            amount: cost,
        });
    }

    CostBreakdown {
        base_cost,
        activity_cost,
        total: base_cost + activity_cost,
        line_items,
        unrecognized,
    }
}

fn rate_label(name: &str, participants: ParticipantCount, rate: Decimal, symbol: &str) -> String {
    format!(
        "{} ({} × {}{})",
        name,
        participants.get(),
        symbol,
        rate.normalize()
    )
}

/// Uppercase the first character of an activity tag
pub fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Total after a percentage discount
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountedTotal {
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Apply a percentage discount to a subtotal.
///
/// The percentage is clamped to 0..=100 so a discount never produces a
/// negative or inflated total.
pub fn apply_discount(subtotal: Decimal, percent: Decimal) -> DiscountedTotal {
    let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let discount = subtotal * percent / Decimal::ONE_HUNDRED;

    DiscountedTotal {
        subtotal,
        discount_percent: percent,
        discount,
        total: subtotal - discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn price(duration: u32, participants: u32, activities: &[&str]) -> CostBreakdown {
        compute_cost(
            &Catalog::default(),
            duration.into(),
            ParticipantCount::new(participants),
            &tags(activities),
            "₹",
        )
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(189.5), 0), dec!(190));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(189.49), 0), dec!(189));
    }

    #[test]
    fn test_round_money_zero() {
        assert_eq!(round_money(dec!(0), 0), dec!(0));
    }

    // ==================== compute_cost tests ====================

    #[test]
    fn test_compute_cost_sightseeing_and_meals() {
        let result = price(8, 2, &["sightseeing", "meals"]);

        assert_eq!(result.base_cost, dec!(100));
        assert_eq!(result.activity_cost, dec!(90));
        assert_eq!(result.total, dec!(190));
        assert_eq!(result.line_items.len(), 3);
        assert!(result.unrecognized.is_empty());

        assert_eq!(result.line_items[0].label, "Base Cost (2 × ₹50)");
        assert_eq!(result.line_items[0].amount, dec!(100));
        assert_eq!(result.line_items[1].label, "Sightseeing (2 × ₹25)");
        assert_eq!(result.line_items[1].amount, dec!(50));
        assert_eq!(result.line_items[2].label, "Meals (2 × ₹20)");
        assert_eq!(result.line_items[2].amount, dec!(40));
    }

    #[test]
    fn test_compute_cost_unknown_duration() {
        let result = price(99, 3, &["adventure"]);

        assert_eq!(result.base_cost, dec!(0));
        assert_eq!(result.activity_cost, dec!(135));
        assert_eq!(result.total, dec!(135));
        assert_eq!(result.unrecognized, vec![UnrecognizedInput::Duration(TripDuration::from(99))]);
        assert_eq!(result.line_items[0].label, "Base Cost (3 × ₹0)");
    }

    #[test]
    fn test_compute_cost_fractional_and_negative_durations() {
        for hours in [dec!(8.5), dec!(-1)] {
            let duration = TripDuration::new(hours);
            let result = compute_cost(
                &Catalog::default(),
                duration,
                ParticipantCount::new(1),
                &tags(&["meals"]),
                "₹",
            );

            assert_eq!(result.base_cost, dec!(0));
            assert_eq!(result.total, dec!(20));
            assert_eq!(result.unrecognized, vec![UnrecognizedInput::Duration(duration)]);
        }
        assert_eq!(
            UnrecognizedInput::Duration(TripDuration::new(dec!(8.5))).to_string(),
            "Unknown duration 8.5 hours priced at 0"
        );
    }

    #[test]
    fn test_compute_cost_unknown_activity_priced_at_zero() {
        let result = price(10, 2, &["skydiving", "transport"]);

        assert_eq!(result.base_cost, dec!(200));
        assert_eq!(result.activity_cost, dec!(30));
        assert_eq!(result.line_items.len(), 3);
        assert_eq!(result.line_items[1].label, "Skydiving (2 × ₹0)");
        assert_eq!(result.line_items[1].amount, dec!(0));
        assert_eq!(
            result.unrecognized,
            vec![UnrecognizedInput::Activity("skydiving".to_string())]
        );
    }

    #[test]
    fn test_compute_cost_duplicates_priced_each_time() {
        let result = price(8, 1, &["meals", "meals"]);

        assert_eq!(result.activity_cost, dec!(40));
        assert_eq!(result.line_items.len(), 3);
        assert_eq!(result.line_items[1], result.line_items[2]);
    }

    #[test]
    fn test_compute_cost_base_is_linear_in_participants() {
        let catalog = Catalog::default();
        for duration in [8, 10] {
            let rate = catalog.base_rate(duration.into()).unwrap();
            for n in 1..=20 {
                let result = price(duration, n, &["cultural"]);
                assert_eq!(result.base_cost, rate * Decimal::from(n));
            }
        }
    }

    #[test]
    fn test_compute_cost_total_is_sum_of_line_items() {
        let result = price(10, 7, &["sightseeing", "adventure", "teambuilding", "bogus"]);
        let sum: Decimal = result.line_items.iter().map(|item| item.amount).sum();
        assert_eq!(result.total, sum);
        assert_eq!(result.total, result.base_cost + result.activity_cost);
    }

    #[test]
    fn test_compute_cost_is_idempotent() {
        let first = price(8, 4, &["adventure", "meals"]);
        let second = price(8, 4, &["adventure", "meals"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_cost_fractional_rates_kept_exact() {
        let catalog = Catalog::from_json(
            r#"{
                "base_rates": {"8": "12.25"},
                "activities": {"meals": {"rate": "0.5", "display_name": "Meals", "title": "Meals", "description": ""}}
            }"#,
        )
        .unwrap();
        let result = compute_cost(
            &catalog,
            TripDuration::from(8),
            ParticipantCount::new(3),
            &tags(&["meals"]),
            "$",
        );

        assert_eq!(result.total, dec!(38.25));
        assert_eq!(result.display_total(), dec!(38));
        assert_eq!(result.line_items[0].label, "Base Cost (3 × $12.25)");
        assert_eq!(result.line_items[1].label, "Meals (3 × $0.5)");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sightseeing"), "Sightseeing");
        assert_eq!(capitalize("éco"), "Éco");
        assert_eq!(capitalize(""), "");
    }

    // ==================== apply_discount tests ====================

    #[test]
    fn test_apply_discount() {
        let result = apply_discount(dec!(190), dec!(10));
        assert_eq!(result.discount, dec!(19));
        assert_eq!(result.total, dec!(171));
        assert_eq!(result.subtotal, dec!(190));
    }

    #[test]
    fn test_apply_discount_zero() {
        let result = apply_discount(dec!(190), dec!(0));
        assert_eq!(result.discount, dec!(0));
        assert_eq!(result.total, dec!(190));
    }

    #[test]
    fn test_apply_discount_clamped() {
        assert_eq!(apply_discount(dec!(100), dec!(150)).total, dec!(0));
        assert_eq!(apply_discount(dec!(100), dec!(-20)).total, dec!(100));
    }
}
