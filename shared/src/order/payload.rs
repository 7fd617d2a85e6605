//! Status mutation payloads
//!
//! Builders for the `PUT /order/status` body. They rewrite the
//! attribute list in memory and perform no network I/O; the caller
//! treats any non-2xx response as "update failed" and re-fetches the
//! order instead of mutating local state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::OrderStatus;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::attribute::{AttributeTable, names};
use crate::schedule::slots::{Slot, format_display_time};
use crate::util::now_iso;

/// Fallback delivery time when the chosen day had no selectable slots
const DEFAULT_DELIVERY_TIME: &str = "20:00";

/// Body of `PUT /order/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    pub attribute_models: AttributeTable,
}

/// Human form of a calendar date in mutation strings ("Mon Mar 10 2025")
fn date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Build the cancellation request for an order
///
/// Stamps "Cancelled On" with the current time; every other attribute
/// passes through untouched. The reason travels as a top-level field,
/// never inside the attribute list, and is required.
pub fn cancel_order(
    order_id: impl Into<String>,
    attributes: &AttributeTable,
    reason: &str,
) -> ScheduleResult<StatusUpdateRequest> {
    if reason.trim().is_empty() {
        return Err(ScheduleError::ReasonMissing);
    }
    Ok(StatusUpdateRequest {
        order_id: order_id.into(),
        status: OrderStatus::Cancelled,
        cancellation_reason: Some(reason.to_string()),
        attribute_models: attributes.with_value(names::CANCELLED_ON, now_iso()),
    })
}

/// Build the reschedule request for an order
///
/// Delivery orders rewrite "Delivery Time"; service (pickup) orders
/// rewrite "Service Pickup Time". With a chosen slot the value is the
/// formatted window on the chosen date; when the day offered no slots
/// the 20:00 default applies — delivery strings keep the "by" framing,
/// pickup strings use the bare time. "Rescheduled On" is stamped
/// either way.
pub fn reschedule_order(
    order_id: impl Into<String>,
    attributes: &AttributeTable,
    date: NaiveDate,
    slot: Option<&Slot>,
    is_service: bool,
) -> StatusUpdateRequest {
    let target = if is_service {
        names::SERVICE_PICKUP_TIME
    } else {
        names::DELIVERY_TIME
    };

    let value = match slot.and_then(Slot::bounds) {
        Some((start, end)) => format!(
            "{} - {} on {}",
            format_display_time(start),
            format_display_time(end),
            date_string(date),
        ),
        None => {
            let time = format_display_time(DEFAULT_DELIVERY_TIME);
            if is_service {
                format!("{} on {}", time, date_string(date))
            } else {
                format!("by {} on {}", time, date_string(date))
            }
        }
    };

    let rebuilt = attributes
        .with_value(target, value)
        .with_value(names::RESCHEDULED_ON, now_iso());

    StatusUpdateRequest {
        order_id: order_id.into(),
        status: OrderStatus::Rescheduled,
        cancellation_reason: None,
        attribute_models: rebuilt,
    }
}
