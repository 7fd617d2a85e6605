//! Order lifecycle
//!
//! The status state machine, the derived tracking timeline, and the
//! builders for the `PUT /order/status` mutation body.

pub mod payload;
pub mod status;
pub mod timeline;

pub use payload::{StatusUpdateRequest, cancel_order, reschedule_order};
pub use status::OrderStatus;
pub use timeline::{StepKind, StepState, TrackingStep, build_timeline};
