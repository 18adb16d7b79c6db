//! Catalog listing for building the trip form

use axum::{extract::State, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Catalog;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DurationOption {
    pub hours: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ActivityOption {
    pub tag: String,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub currency_symbol: String,
    pub durations: Vec<DurationOption>,
    pub activities: Vec<ActivityOption>,
}

impl CatalogResponse {
    pub fn new(catalog: &Catalog, currency_symbol: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
            durations: catalog
                .base_rates
                .iter()
                .map(|(hours, rate)| DurationOption {
                    hours: *hours,
                    rate: *rate,
                })
                .collect(),
            activities: catalog
                .activities
                .iter()
                .map(|(tag, def)| ActivityOption {
                    tag: tag.clone(),
                    name: def.display_name.clone(),
                    title: def.title.clone(),
                    description: def.description.clone(),
                    rate: def.rate,
                })
                .collect(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/catalog", get(catalog))
}

async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::new(&state.catalog, &state.config.currency_symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_response_lists_everything() {
        let response = CatalogResponse::new(&Catalog::default(), "₹");

        let hours: Vec<u32> = response.durations.iter().map(|d| d.hours).collect();
        assert_eq!(hours, vec![8, 10]);
        assert_eq!(response.activities.len(), 6);
        assert!(response.activities.iter().any(|a| a.tag == "teambuilding" && a.name == "Team Building"));
    }
}
