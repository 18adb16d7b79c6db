//! Trip request model.
//!
//! A `TripRequest` is built once per submission and passed by reference to the
//! pricing, itinerary and proposal functions. Nothing mutates it afterwards.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Participant count, always at least 1.
///
/// The form field is free text, so the wire value may be a number or a string.
/// Anything that does not parse to a positive integer becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantCount(u32);

impl ParticipantCount {
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn from_lenient(value: &serde_json::Value) -> Self {
        let parsed = match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            serde_json::Value::String(s) => parse_leading_int(s),
            _ => None,
        };

        match parsed {
            Some(n) if n >= 1 => Self(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => {
                tracing::debug!("Defaulting participant count to 1 (got {})", value);
                Self(1)
            }
        }
    }
}

impl Default for ParticipantCount {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u32> for ParticipantCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl<'de> Deserialize<'de> for ParticipantCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_lenient(&value))
    }
}

/// Leading integer of a string, ignoring surrounding whitespace ("3 people" -> 3)
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Trip length in hours, as submitted.
///
/// Any number is accepted (numeric strings too). Only a whole, non-negative
/// number of hours can match a catalog rate; anything else is an unknown
/// duration and is left to the pricing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripDuration(Decimal);

/// Bound on itinerary arithmetic, far beyond any real trip
const MAX_DURATION_MINUTES: i64 = i32::MAX as i64;

impl TripDuration {
    pub fn new(hours: Decimal) -> Self {
        Self(hours.normalize())
    }

    pub fn hours(self) -> Decimal {
        self.0
    }

    /// The duration as a catalog key, if it is a whole number of hours
    pub fn whole_hours(self) -> Option<u32> {
        if self.0.fract().is_zero() {
            self.0.to_u32()
        } else {
            None
        }
    }

    /// Length in minutes, rounded to the nearest minute
    pub fn minutes(self) -> i64 {
        self.0
            .checked_mul(Decimal::from(60))
            .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|m| m.to_i64())
            .unwrap_or(if self.0.is_sign_negative() { i64::MIN } else { i64::MAX })
            .clamp(-MAX_DURATION_MINUTES, MAX_DURATION_MINUTES)
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        let hours = match value {
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Some(Decimal::from(i)),
                (None, Some(u)) => Some(Decimal::from(u)),
                (None, None) => n.as_f64().and_then(Decimal::from_f64),
            },
            serde_json::Value::String(s) => s.trim().parse::<Decimal>().ok(),
            _ => None,
        };
        hours.map(Self::new)
    }
}

impl From<u32> for TripDuration {
    fn from(hours: u32) -> Self {
        Self(Decimal::from(hours))
    }
}

impl std::fmt::Display for TripDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TripDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.whole_hours() {
            Some(hours) => serializer.serialize_u32(hours),
            None => rust_decimal::serde::float::serialize(&self.0, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TripDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("duration must be a number of hours, got {}", value))
        })
    }
}

/// A complete trip submission
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    /// Trip length in hours
    pub duration: TripDuration,
    #[serde(default)]
    pub participants: ParticipantCount,
    /// Activity tags in selection order
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub designation: String,
    #[serde(default, alias = "customNotes")]
    pub notes: String,
    #[serde(default, alias = "discount")]
    pub discount_percent: Decimal,
}

fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", s, e))),
    }
}
