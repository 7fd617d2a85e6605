//! Shared types for the Bazaar storefront client
//!
//! Domain core used across the client crates: order models, the
//! attribute side-table, vendor schedule configuration, delivery and
//! pickup slot generation, and the order lifecycle (status machine,
//! tracking timeline, status-mutation payloads).
//!
//! Everything in this crate is pure and synchronous; network I/O lives
//! in `bazaar-client`.

pub mod error;
pub mod models;
pub mod order;
pub mod schedule;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ScheduleError, ScheduleResult};
pub use models::{AttributeModel, AttributeTable, Order, OrderItem, VendorScheduleConfig};
pub use order::{OrderStatus, StatusUpdateRequest, TrackingStep};
pub use schedule::{DaySlots, Slot, SlotPicker};
