//! Attribute side-table
//!
//! Orders carry a flexible name/value extension list (`attributeModels`)
//! alongside the core schema: per-step timestamps, vendor configuration
//! blobs, and derived flags. The backend round-trips the list as an
//! ordered array; every consumer reads it as a map where the first
//! matching name wins.

use serde::{Deserialize, Serialize};

// ============================================================================
// Known attribute names
// ============================================================================

/// Attribute names shared with the backend (case-sensitive, exact match)
pub mod names {
    pub const ORDER_DATE: &str = "Order Date";
    pub const APPROVED_ON: &str = "Approved On";
    pub const RESCHEDULED_ON: &str = "Rescheduled On";
    pub const OUT_FOR_DELIVERY_ON: &str = "Out For Delivery On";
    pub const DELIVERED_ON: &str = "Delivered On";
    pub const CANCELLED_ON: &str = "Cancelled On";
    pub const DELIVERY_TIME: &str = "Delivery Time";
    pub const SERVICE_PICKUP_TIME: &str = "Service Pickup Time";
    pub const DELIVERY_CHARGE: &str = "Delivery Charge";
    pub const PAYMENT_METHOD: &str = "Payment Method";
    pub const DELIVERY_METHOD: &str = "Delivery Method";
    pub const IS_SERVICE: &str = "Is Service";
    pub const TABLE_NUMBER: &str = "Table Number";
    pub const DELIVERY_SLOTS: &str = "Delivery Slots";
    pub const SHOP_TIMING: &str = "Shop Timing";
    pub const WEEKLY_OFF_DAY: &str = "Weekly Off Day";
}

/// A single name/value attribute entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeModel {
    pub name: String,
    pub value: String,
}

impl AttributeModel {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered attribute table with first-match-wins lookup
///
/// Names are not unique by contract. The table never deduplicates or
/// reorders: the backend expects the array back byte-for-byte except
/// for the entries an action deliberately rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AttributeTable(Vec<AttributeModel>);

impl AttributeTable {
    pub fn new(entries: Vec<AttributeModel>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[AttributeModel] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<AttributeModel> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the first entry with a matching name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Whether any entry carries this name
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Copy of the table with the first matching entry's value replaced
    ///
    /// Map, don't filter: same length, same order, every other entry
    /// untouched. A missing name is a no-op.
    pub fn with_value(&self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut replaced = false;
        let entries = self
            .0
            .iter()
            .map(|attr| {
                if !replaced && attr.name == name {
                    replaced = true;
                    AttributeModel::new(attr.name.clone(), value.clone())
                } else {
                    attr.clone()
                }
            })
            .collect();
        Self(entries)
    }

    // ==================== Typed accessors ====================

    pub fn order_date(&self) -> Option<&str> {
        self.get(names::ORDER_DATE)
    }

    pub fn approved_on(&self) -> Option<&str> {
        self.get(names::APPROVED_ON)
    }

    pub fn rescheduled_on(&self) -> Option<&str> {
        self.get(names::RESCHEDULED_ON)
    }

    pub fn out_for_delivery_on(&self) -> Option<&str> {
        self.get(names::OUT_FOR_DELIVERY_ON)
    }

    pub fn delivered_on(&self) -> Option<&str> {
        self.get(names::DELIVERED_ON)
    }

    pub fn cancelled_on(&self) -> Option<&str> {
        self.get(names::CANCELLED_ON)
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.get(names::PAYMENT_METHOD)
    }

    pub fn delivery_method(&self) -> Option<&str> {
        self.get(names::DELIVERY_METHOD)
    }

    pub fn delivery_charge(&self) -> Option<&str> {
        self.get(names::DELIVERY_CHARGE)
    }

    /// "Is Service" arrives as the string "true"/"false"
    pub fn is_service(&self) -> bool {
        self.get(names::IS_SERVICE)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Dine-in orders carry a table number and are exempt from
    /// delivery-oriented actions
    pub fn table_number(&self) -> Option<&str> {
        self.get(names::TABLE_NUMBER)
    }

    /// Raw semicolon-joined weekly off day configuration
    pub fn weekly_off_day(&self) -> Option<&str> {
        self.get(names::WEEKLY_OFF_DAY)
    }
}

impl From<Vec<AttributeModel>> for AttributeTable {
    fn from(entries: Vec<AttributeModel>) -> Self {
        Self(entries)
    }
}
