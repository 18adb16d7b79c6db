//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CostBreakdown, DiscountedTotal, LineItem};

/// A breakdown row as sent to the client
#[derive(Debug, Clone, Serialize)]
pub struct LineItemResponse {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            label: item.label.clone(),
            value: item.amount,
        }
    }
}

/// Response for cost calculation
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdownResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub base: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub activities: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub breakdown: Vec<LineItemResponse>,
    /// Inputs that were priced at zero because the catalog does not know them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CostBreakdownResponse {
    pub fn new(breakdown: &CostBreakdown, warnings: Vec<String>) -> Self {
        Self {
            base: breakdown.base_cost,
            activities: breakdown.activity_cost,
            total: breakdown.total,
            breakdown: breakdown.line_items.iter().map(LineItemResponse::from).collect(),
            warnings,
        }
    }
}

/// Discount applied on top of a breakdown
#[derive(Debug, Clone, Serialize)]
pub struct DiscountResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Total rounded to whole currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub display_total: Decimal,
}

impl From<&DiscountedTotal> for DiscountResponse {
    fn from(d: &DiscountedTotal) -> Self {
        Self {
            percent: d.discount_percent,
            amount: d.discount,
            total: d.total,
            display_total: super::round_money(d.total, 0),
        }
    }
}

/// Generic error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
