//! Vendor schedule configuration
//!
//! Shop hours, weekly off days and preset pickup slots arrive as
//! attribute values, some of them JSON-encoded strings. Malformed
//! configuration is never surfaced to the customer: parsing falls back
//! to safe defaults and logs a warning.

use serde::{Deserialize, Serialize};

use super::attribute::{AttributeTable, names};

/// Fallback business hours applied when "Shop Timing" fails to parse
pub const DEFAULT_SHOP_OPEN: &str = "08:00";
pub const DEFAULT_SHOP_CLOSE: &str = "20:00";

/// Shop operating hours as "HH:MM" strings
///
/// A missing bound disables hourly slot generation for the day; the
/// default is fully closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopTiming {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl ShopTiming {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// The fixed 08:00-20:00 fallback
    pub fn business_hours() -> Self {
        Self::new(DEFAULT_SHOP_OPEN, DEFAULT_SHOP_CLOSE)
    }
}

/// "Delivery Slots" attribute payload: `{"service": ["HH:MM-HH:MM", ..]}`
#[derive(Debug, Clone, Default, Deserialize)]
struct DeliverySlotsValue {
    #[serde(default)]
    service: Vec<String>,
}

/// Vendor-level scheduling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorScheduleConfig {
    pub shop_timing: ShopTiming,
    /// Semicolon-joined English day names, case-insensitive
    /// (e.g. "Sunday" or "sunday; Monday")
    pub weekly_off_day: String,
    /// Preset pickup windows ("HH:MM-HH:MM"), used for service orders only
    pub service_slots: Vec<String>,
}

impl VendorScheduleConfig {
    /// Read scheduling configuration out of an attribute table
    ///
    /// Works for both order-scoped and vendor-scoped tables; the
    /// attribute names are the same in either context.
    pub fn from_attributes(attributes: &AttributeTable) -> Self {
        let shop_timing = match attributes.get(names::SHOP_TIMING) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "malformed Shop Timing attribute, using business hours");
                ShopTiming::business_hours()
            }),
            None => ShopTiming::default(),
        };

        let service_slots = match attributes.get(names::DELIVERY_SLOTS) {
            Some(raw) => serde_json::from_str::<DeliverySlotsValue>(raw)
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "malformed Delivery Slots attribute, ignoring");
                    DeliverySlotsValue::default()
                })
                .service,
            None => Vec::new(),
        };

        Self {
            shop_timing,
            weekly_off_day: attributes.weekly_off_day().unwrap_or_default().to_string(),
            service_slots,
        }
    }
}
