//! Calendar rules for vendor availability

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{ScheduleError, ScheduleResult};

/// Upper bound for open-day searches. A vendor configured with all
/// seven days off yields [`ScheduleError::NoOpenDay`] instead of
/// looping forever.
pub const MAX_DAY_SEARCH: u32 = 366;

/// Number of dates offered by the reschedule picker
pub const AVAILABLE_DATE_COUNT: usize = 7;

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Whether `date` falls on one of the vendor's weekly off days
///
/// `config` is a semicolon-joined list of English day names, matched
/// case-insensitively after trimming. An empty config has no off days.
pub fn is_weekly_off_day(date: NaiveDate, config: &str) -> bool {
    if config.trim().is_empty() {
        return false;
    }
    let name = weekday_name(date.weekday());
    config
        .split(';')
        .any(|day| day.trim().eq_ignore_ascii_case(name))
}

/// First non-off day at or after `start`
pub fn next_open_date(start: NaiveDate, config: &str) -> ScheduleResult<NaiveDate> {
    let mut date = start;
    for _ in 0..MAX_DAY_SEARCH {
        if !is_weekly_off_day(date, config) {
            return Ok(date);
        }
        date = date + Duration::days(1);
    }
    Err(ScheduleError::NoOpenDay(MAX_DAY_SEARCH))
}

/// The next seven open days strictly after `today`
///
/// Today itself is never offered; off days are skipped, not counted.
pub fn next_available_dates(today: NaiveDate, config: &str) -> ScheduleResult<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(AVAILABLE_DATE_COUNT);
    let mut date = today;
    for _ in 0..MAX_DAY_SEARCH {
        date = date + Duration::days(1);
        if is_weekly_off_day(date, config) {
            continue;
        }
        dates.push(date);
        if dates.len() == AVAILABLE_DATE_COUNT {
            return Ok(dates);
        }
    }
    Err(ScheduleError::NoOpenDay(MAX_DAY_SEARCH))
}
