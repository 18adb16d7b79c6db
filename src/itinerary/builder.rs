//! Itinerary timeline generation.
//!
//! The day opens with an arrival slot, then the selected activities share the
//! remaining time evenly, and the departure entry is pinned to
//! `day start + duration`. Times are kept as whole minutes from midnight of
//! the trip day and rounded from the exact slot offset, so they do not drift.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::models::{Catalog, TripDuration};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Timeline layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItinerarySettings {
    /// Start of the day, minutes after midnight (09:00)
    pub day_start_minutes: i64,
    /// Length of the arrival and setup slot
    pub arrival_slot_minutes: i64,
    /// Time held back from the trip duration before activities are spread.
    /// This is a full hour even though the arrival slot is half that; the
    /// published timelines were generated this way.
    pub reserved_minutes: i64,
}

impl Default for ItinerarySettings {
    fn default() -> Self {
        Self {
            day_start_minutes: 9 * 60,
            arrival_slot_minutes: 30,
            reserved_minutes: 60,
        }
    }
}

/// Start time of an entry, in minutes after midnight of the trip day.
///
/// May exceed one day (or be negative) for unusual durations; only the
/// rendered label wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotTime(i64);

impl SlotTime {
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> i64 {
        self.0
    }

    /// Wall-clock time, wrapped into a single day
    pub fn time_of_day(self) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes(self.0.rem_euclid(MINUTES_PER_DAY))
    }

    /// 12-hour clock label, e.g. "9:30 AM" or "12:00 PM"
    pub fn label(self) -> String {
        self.time_of_day().format("%-I:%M %p").to_string()
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// One block in the day timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryEntry {
    pub start: SlotTime,
    pub title: String,
    pub description: String,
}

impl ItineraryEntry {
    fn new(start: i64, title: &str, description: &str) -> Self {
        Self {
            start: SlotTime::from_minutes(start),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Build the timeline with the standard layout
pub fn build_itinerary(catalog: &Catalog, duration: TripDuration, activities: &[String]) -> Vec<ItineraryEntry> {
    build_itinerary_with(catalog, &ItinerarySettings::default(), duration, activities)
}

/// Build the timeline for a trip.
///
/// No activities means no timeline at all, not even arrival and departure.
/// Tags missing from the catalog get no entry and do not advance the clock,
/// but still count when the available time is divided.
pub fn build_itinerary_with(
    catalog: &Catalog,
    settings: &ItinerarySettings,
    duration: TripDuration,
    activities: &[String],
) -> Vec<ItineraryEntry> {
    if activities.is_empty() {
        return Vec::new();
    }

    let duration_minutes = duration.minutes();
    let available = duration_minutes - settings.reserved_minutes;
    let slots = activities.len() as i64;
    let first_activity = settings.day_start_minutes + settings.arrival_slot_minutes;

    let mut entries = Vec::with_capacity(activities.len() + 2);
    entries.push(ItineraryEntry::new(
        settings.day_start_minutes,
        "Arrival & Setup",
        "Meet at designated location and brief overview",
    ));

    let mut placed = 0i64;
    for tag in activities {
        let Some(def) = catalog.activity(tag) else {
            tracing::debug!("No itinerary entry for unknown activity '{}'", tag);
            continue;
        };
        let offset = round_div(placed * available, slots);
        entries.push(ItineraryEntry::new(first_activity + offset, &def.title, &def.description));
        placed += 1;
    }

    entries.push(ItineraryEntry::new(
        settings.day_start_minutes + duration_minutes,
        "Departure",
        "Trip conclusion and departure",
    ));

    entries
}

/// `numerator / denominator` rounded to the nearest integer, halves up
fn round_div(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn labels(entries: &[ItineraryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.start.label()).collect()
    }

    fn build(duration: u32, activities: &[&str]) -> Vec<ItineraryEntry> {
        build_itinerary(&Catalog::default(), duration.into(), &tags(activities))
    }

    // ==================== SlotTime tests ====================

    #[test]
    fn test_slot_labels() {
        assert_eq!(SlotTime::from_minutes(9 * 60).label(), "9:00 AM");
        assert_eq!(SlotTime::from_minutes(9 * 60 + 5).label(), "9:05 AM");
        assert_eq!(SlotTime::from_minutes(12 * 60).label(), "12:00 PM");
        assert_eq!(SlotTime::from_minutes(13 * 60 + 30).label(), "1:30 PM");
        assert_eq!(SlotTime::from_minutes(0).label(), "12:00 AM");
        assert_eq!(SlotTime::from_minutes(23 * 60 + 59).label(), "11:59 PM");
    }

    #[test]
    fn test_slot_labels_wrap() {
        assert_eq!(SlotTime::from_minutes(24 * 60 + 9 * 60).label(), "9:00 AM");
        assert_eq!(SlotTime::from_minutes(-30).label(), "11:30 PM");
    }

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(420, 9), 47); // 46.67
        assert_eq!(round_div(3, 2), 2); // 1.5
        assert_eq!(round_div(-3, 2), -1); // -1.5
        assert_eq!(round_div(840, 3), 280);
    }

    // ==================== build_itinerary tests ====================

    #[test]
    fn test_empty_selection_yields_nothing() {
        assert!(build(8, &[]).is_empty());
    }

    #[test]
    fn test_two_activities_eight_hours() {
        let entries = build(8, &["sightseeing", "meals"]);

        assert_eq!(entries.len(), 4);
        assert_eq!(labels(&entries), vec!["9:00 AM", "9:30 AM", "1:00 PM", "5:00 PM"]);
        assert_eq!(entries[0].title, "Arrival & Setup");
        assert_eq!(entries[1].title, "Sightseeing Tour");
        assert_eq!(entries[1].description, "Explore local landmarks and attractions");
        assert_eq!(entries[2].title, "Meals & Refreshments");
        assert_eq!(entries[3].title, "Departure");
    }

    #[test]
    fn test_three_activities_ten_hours() {
        let entries = build(10, &["adventure", "cultural", "transport"]);
        assert_eq!(
            labels(&entries),
            vec!["9:00 AM", "9:30 AM", "12:30 PM", "3:30 PM", "7:00 PM"]
        );
    }

    #[test]
    fn test_fractional_slots_round_to_minutes() {
        let entries = build(8, &["sightseeing", "adventure", "meals"]);
        // 7h / 3 = 2h20m per activity
        assert_eq!(
            labels(&entries),
            vec!["9:00 AM", "9:30 AM", "11:50 AM", "2:10 PM", "5:00 PM"]
        );
    }

    #[test]
    fn test_nine_activities_round_up() {
        let nine = ["meals"; 9];
        let entries = build(8, &nine);
        assert_eq!(entries.len(), 11);
        // 420 / 9 = 46.67 minutes
        assert_eq!(entries[2].start.minutes(), 9 * 60 + 30 + 47);
        assert_eq!(entries[2].start.label(), "10:17 AM");
    }

    #[test]
    fn test_entry_count_and_order() {
        for n in 1..=6 {
            let activities: Vec<&str> = ["sightseeing", "adventure", "teambuilding", "cultural", "meals", "transport"][..n].to_vec();
            for duration in [8, 10] {
                let entries = build(duration, &activities);
                assert_eq!(entries.len(), n + 2);

                let activity_times: Vec<i64> = entries[..=n].iter().map(|e| e.start.minutes()).collect();
                assert!(activity_times.windows(2).all(|w| w[0] <= w[1]));

                let departure = entries.last().unwrap();
                assert_eq!(departure.start.minutes(), 9 * 60 + i64::from(duration) * 60);
            }
        }
    }

    #[test]
    fn test_unknown_activity_skipped_without_advancing() {
        let entries = build(8, &["sightseeing", "bogus", "meals"]);

        assert_eq!(entries.len(), 4);
        // slot is still 7h / 3 because the unknown tag counts toward the split
        assert_eq!(labels(&entries), vec!["9:00 AM", "9:30 AM", "11:50 AM", "5:00 PM"]);
    }

    #[test]
    fn test_departure_anchored_for_unknown_duration() {
        let entries = build(99, &["adventure"]);
        assert_eq!(entries.last().unwrap().start.minutes(), 108 * 60);
        assert_eq!(entries.last().unwrap().start.label(), "12:00 PM");
    }

    #[test]
    fn test_fractional_duration_departs_on_the_half_hour() {
        let entries = build_itinerary(
            &Catalog::default(),
            TripDuration::new(rust_decimal_macros::dec!(8.5)),
            &tags(&["meals"]),
        );
        assert_eq!(labels(&entries), vec!["9:00 AM", "9:30 AM", "5:30 PM"]);
    }

    #[test]
    fn test_negative_duration_departs_before_arrival() {
        let entries = build_itinerary(
            &Catalog::default(),
            TripDuration::new(rust_decimal_macros::dec!(-1)),
            &tags(&["meals"]),
        );
        assert_eq!(entries.last().unwrap().start.minutes(), 8 * 60);
        assert_eq!(entries.last().unwrap().start.label(), "8:00 AM");
    }

    #[test]
    fn test_custom_settings() {
        let settings = ItinerarySettings {
            day_start_minutes: 8 * 60,
            arrival_slot_minutes: 15,
            reserved_minutes: 30,
        };
        let entries = build_itinerary_with(
            &Catalog::default(),
            &settings,
            TripDuration::from(8),
            &tags(&["meals", "transport"]),
        );
        // 450 / 2 = 225 minutes per activity
        assert_eq!(labels(&entries), vec!["8:00 AM", "8:15 AM", "12:00 PM", "4:00 PM"]);
    }
}
