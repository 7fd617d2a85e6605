//! Order model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attribute::AttributeTable;
use super::vendor::VendorScheduleConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::order::payload::{self, StatusUpdateRequest};
use crate::order::status::OrderStatus;
use crate::order::timeline::{self, TrackingStep};
use crate::schedule::slots::Slot;

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// List price in currency unit
    pub mrp: f64,
    /// Discount amount in currency unit
    pub discount: f64,
    pub quantity: i32,
}

/// Order entity as returned by the backend
///
/// Created server-side on checkout; the client never deletes an order,
/// it only requests status transitions via `PUT /order/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend id, addressed by mutation calls
    pub id: String,
    /// Display id shown to the customer
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub attribute_models: AttributeTable,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    #[serde(default)]
    pub total: f64,
    /// List price total in currency unit
    #[serde(default)]
    pub mrp: f64,
    /// Discount total in currency unit
    #[serde(default)]
    pub discount: f64,
}

impl Order {
    /// Subtotal before delivery charges
    pub fn subtotal(&self) -> f64 {
        self.mrp - self.discount
    }

    /// Whether this order is fulfilled by customer pickup
    pub fn is_service(&self) -> bool {
        self.attribute_models.is_service()
    }

    /// Dine-in orders are identified by a "Table Number" attribute
    pub fn is_table_order(&self) -> bool {
        self.attribute_models.table_number().is_some()
    }

    /// Whether the Reschedule and Cancel actions are offered
    ///
    /// Requires a modifiable status and excludes dine-in orders, which
    /// have no delivery to move.
    pub fn allows_modification(&self) -> bool {
        self.status.allows_modification() && !self.is_table_order()
    }

    /// Derive the tracking timeline from the attribute stamps
    pub fn timeline(&self) -> Vec<TrackingStep> {
        timeline::build_timeline(self.status, &self.attribute_models)
    }

    /// Scheduling configuration carried on this order's attributes
    pub fn schedule_config(&self) -> VendorScheduleConfig {
        VendorScheduleConfig::from_attributes(&self.attribute_models)
    }

    /// Build the cancellation request for this order
    ///
    /// Fails when the order is no longer modifiable or is a dine-in
    /// order, or when the reason is empty.
    pub fn cancel(&self, reason: &str) -> ScheduleResult<StatusUpdateRequest> {
        if !self.allows_modification() {
            return Err(ScheduleError::NotActionable(self.status.as_str()));
        }
        payload::cancel_order(self.id.as_str(), &self.attribute_models, reason)
    }

    /// Build the reschedule request for this order
    ///
    /// `slot` is `None` when the chosen day offered no slots; the
    /// 20:00 default time applies in that case.
    pub fn reschedule(
        &self,
        date: NaiveDate,
        slot: Option<&Slot>,
    ) -> ScheduleResult<StatusUpdateRequest> {
        if !self.allows_modification() {
            return Err(ScheduleError::NotActionable(self.status.as_str()));
        }
        Ok(payload::reschedule_order(
            self.id.as_str(),
            &self.attribute_models,
            date,
            slot,
            self.is_service(),
        ))
    }
}
