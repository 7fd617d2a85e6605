//! Delivery and pickup slot generation
//!
//! Delivery orders get hourly windows generated from the vendor's shop
//! hours; service (pickup) orders get the vendor's preset windows.
//! Both modes are bounded by "now" when the target date is today, and
//! a weekly off day short-circuits either mode.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::calendar::is_weekly_off_day;
use crate::models::vendor::{ShopTiming, VendorScheduleConfig};

/// A selectable half-open time window `[start, end)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    /// Wire value, `"HH:MM-HH:MM"`
    pub value: String,
    /// Display label, `"h:mm AM/PM - h:mm AM/PM"`
    pub label: String,
}

impl Slot {
    /// Start and end `"HH:MM"` halves of the wire value
    pub fn bounds(&self) -> Option<(&str, &str)> {
        self.value.split_once('-')
    }
}

/// Slot availability for one calendar day
///
/// A weekly off day is distinct from an open day with nothing left:
/// the reschedule flow shows a dedicated "weekly off day" message for
/// the former and a generic "no slots" message for the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySlots {
    /// The vendor does not operate on this day at all
    WeeklyOff,
    /// Selectable windows, possibly empty
    Open(Vec<Slot>),
}

impl DaySlots {
    pub fn slots(&self) -> &[Slot] {
        match self {
            Self::WeeklyOff => &[],
            Self::Open(slots) => slots,
        }
    }

    pub fn is_weekly_off(&self) -> bool {
        matches!(self, Self::WeeklyOff)
    }
}

/// Format an `"HH:MM"` time for display as `"h:mm AM/PM"`
///
/// Returns the input unchanged when it does not parse.
pub fn format_display_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

fn range_label(start: &str, end: &str) -> String {
    format!("{} - {}", format_display_time(start), format_display_time(end))
}

fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}

/// Hourly delivery slots for `date`, bounded by shop hours and by
/// `now` when `date` is today
///
/// The hour in progress is never offered: once the shop has opened,
/// the first slot on the target day starts at `now.hour() + 1`, which
/// can empty the list entirely. Shops closing after midnight extend
/// the loop bound past 24 and wrap each emitted hour back onto the
/// clock.
pub fn hourly_slots(timing: &ShopTiming, date: NaiveDate, now: NaiveDateTime) -> Vec<Slot> {
    let (Some(start_raw), Some(end_raw)) = (timing.start.as_deref(), timing.end.as_deref()) else {
        return Vec::new();
    };
    let (Some(start_hour), Some(end_hour)) = (parse_hour(start_raw), parse_hour(end_raw)) else {
        return Vec::new();
    };

    let mut from = start_hour;
    if date == now.date() && now.hour() >= start_hour {
        from = now.hour() + 1;
    }
    // Overnight shops: treat the close as next-day hours for the bound
    let until = if end_hour < start_hour {
        end_hour + 24
    } else {
        end_hour
    };

    let mut slots = Vec::new();
    for hour in from..until {
        let begin = hour % 24;
        let finish = (hour + 1) % 24;
        let begin_raw = format!("{begin:02}:00");
        let finish_raw = format!("{finish:02}:00");
        slots.push(Slot {
            value: format!("{begin_raw}-{finish_raw}"),
            label: range_label(&begin_raw, &finish_raw),
        });
    }
    slots
}

/// Preset pickup slots for `date`, filtered to future windows when
/// `date` is today
///
/// Only presets whose start hour is strictly later than the current
/// hour survive the today filter.
pub fn preset_slots(presets: &[String], date: NaiveDate, now: NaiveDateTime) -> Vec<Slot> {
    presets
        .iter()
        .filter_map(|preset| {
            let (start, end) = preset.split_once('-')?;
            if date == now.date() && parse_hour(start)? <= now.hour() {
                return None;
            }
            Some(Slot {
                value: preset.clone(),
                label: range_label(start, end),
            })
        })
        .collect()
}

/// Selectable windows for `date` under the vendor's configuration
///
/// Weekly off days short-circuit to [`DaySlots::WeeklyOff`] regardless
/// of mode. Otherwise service orders draw from the vendor's preset
/// pickup windows and delivery orders from hourly generation.
pub fn slots_for_date(
    config: &VendorScheduleConfig,
    date: NaiveDate,
    now: NaiveDateTime,
    is_service: bool,
) -> DaySlots {
    if is_weekly_off_day(date, &config.weekly_off_day) {
        return DaySlots::WeeklyOff;
    }
    let slots = if is_service {
        preset_slots(&config.service_slots, date, now)
    } else {
        hourly_slots(&config.shop_timing, date, now)
    };
    DaySlots::Open(slots)
}
