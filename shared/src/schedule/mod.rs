//! Delivery and pickup scheduling
//!
//! Calendar rules (weekly off days, bounded open-day search) and slot
//! generation for the reschedule flow. Everything here is a derived
//! view: recomputed per date and vendor configuration, never persisted.

pub mod calendar;
pub mod picker;
pub mod slots;

pub use calendar::{is_weekly_off_day, next_available_dates, next_open_date};
pub use picker::SlotPicker;
pub use slots::{DaySlots, Slot, format_display_time, slots_for_date};
