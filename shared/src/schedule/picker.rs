//! Reschedule picker state
//!
//! Mirrors the reschedule flow: the customer picks one of the next
//! seven open dates, the slot list recomputes for that date, and the
//! first slot is selected by default. Validation gates live here too,
//! so a submission is rejected before any network call.

use chrono::{NaiveDate, NaiveDateTime};

use super::calendar::next_available_dates;
use super::slots::{DaySlots, Slot, slots_for_date};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::vendor::VendorScheduleConfig;

/// State for the reschedule date/slot picker
#[derive(Debug, Clone)]
pub struct SlotPicker {
    config: VendorScheduleConfig,
    is_service: bool,
    dates: Vec<NaiveDate>,
    selected_date: Option<NaiveDate>,
    day: DaySlots,
    selected_slot: Option<Slot>,
}

impl SlotPicker {
    /// Build a picker offering the vendor's next seven open days
    pub fn new(
        config: VendorScheduleConfig,
        is_service: bool,
        today: NaiveDate,
    ) -> ScheduleResult<Self> {
        let dates = next_available_dates(today, &config.weekly_off_day)?;
        Ok(Self {
            config,
            is_service,
            dates,
            selected_date: None,
            day: DaySlots::Open(Vec::new()),
            selected_slot: None,
        })
    }

    /// Dates offered to the customer, strictly after today
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Slot availability for the currently selected date
    pub fn day(&self) -> &DaySlots {
        &self.day
    }

    pub fn slots(&self) -> &[Slot] {
        self.day.slots()
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected_slot.as_ref()
    }

    /// Select a date and recompute its slots
    ///
    /// The first slot is auto-selected when the list is non-empty;
    /// otherwise the selection is cleared.
    pub fn select_date(&mut self, date: NaiveDate, now: NaiveDateTime) {
        self.selected_date = Some(date);
        self.day = slots_for_date(&self.config, date, now, self.is_service);
        self.selected_slot = self.day.slots().first().cloned();
    }

    /// Select a specific slot on the current date
    pub fn select_slot(&mut self, slot: Slot) {
        self.selected_slot = Some(slot);
    }

    /// Pre-flight validation for submitting a reschedule
    ///
    /// A date is always required; a slot is required whenever the
    /// chosen day offers any.
    pub fn validate(&self) -> ScheduleResult<(NaiveDate, Option<&Slot>)> {
        let date = self.selected_date.ok_or(ScheduleError::DateNotSelected)?;
        if !self.day.slots().is_empty() && self.selected_slot.is_none() {
            return Err(ScheduleError::SlotNotSelected);
        }
        Ok((date, self.selected_slot.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vendor::ShopTiming;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2025, 3, 8).and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    }

    fn config() -> VendorScheduleConfig {
        VendorScheduleConfig {
            shop_timing: ShopTiming::new("09:00", "12:00"),
            weekly_off_day: "Sunday".to_string(),
            service_slots: Vec::new(),
        }
    }

    #[test]
    fn test_new_offers_seven_open_dates() {
        let picker = SlotPicker::new(config(), false, date(2025, 3, 8)).unwrap();
        assert_eq!(picker.dates().len(), 7);
        assert!(picker.selected_date().is_none());
        assert!(picker.selected_slot().is_none());
    }

    #[test]
    fn test_all_days_off_fails_construction() {
        let mut cfg = config();
        cfg.weekly_off_day =
            "monday;tuesday;wednesday;thursday;friday;saturday;sunday".to_string();
        let result = SlotPicker::new(cfg, false, date(2025, 3, 8));
        assert!(matches!(result, Err(ScheduleError::NoOpenDay(_))));
    }

    #[test]
    fn test_select_date_auto_selects_first_slot() {
        let mut picker = SlotPicker::new(config(), false, date(2025, 3, 8)).unwrap();
        picker.select_date(date(2025, 3, 10), now());

        assert_eq!(picker.slots().len(), 3);
        assert_eq!(picker.selected_slot().unwrap().value, "09:00-10:00");
    }

    #[test]
    fn test_select_off_day_clears_selection() {
        let mut picker = SlotPicker::new(config(), false, date(2025, 3, 8)).unwrap();
        picker.select_date(date(2025, 3, 10), now());
        assert!(picker.selected_slot().is_some());

        // 2025-03-09 is a Sunday
        picker.select_date(date(2025, 3, 9), now());
        assert!(picker.day().is_weekly_off());
        assert!(picker.selected_slot().is_none());
    }

    #[test]
    fn test_validate_requires_date() {
        let picker = SlotPicker::new(config(), false, date(2025, 3, 8)).unwrap();
        assert_eq!(picker.validate(), Err(ScheduleError::DateNotSelected));
    }

    #[test]
    fn test_validate_allows_empty_day_without_slot() {
        // Service order with no presets: every open day is empty
        let mut cfg = config();
        cfg.service_slots = Vec::new();
        let mut picker = SlotPicker::new(cfg, true, date(2025, 3, 8)).unwrap();
        picker.select_date(date(2025, 3, 10), now());

        let (chosen, slot) = picker.validate().unwrap();
        assert_eq!(chosen, date(2025, 3, 10));
        assert!(slot.is_none());
    }

    #[test]
    fn test_validate_requires_slot_when_day_has_slots() {
        let mut picker = SlotPicker::new(config(), false, date(2025, 3, 8)).unwrap();
        picker.select_date(date(2025, 3, 10), now());

        // Simulate a cleared selection with slots still on offer
        picker.selected_slot = None;
        assert_eq!(picker.validate(), Err(ScheduleError::SlotNotSelected));
    }
}
