//! Error types for the scheduling and order lifecycle core

use thiserror::Error;

/// Scheduling and pre-flight validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No open day within the search window. A vendor that marks every
    /// day as a weekly off day ends up here instead of looping forever.
    #[error("no open day found within {0} days")]
    NoOpenDay(u32),

    /// A reschedule was submitted without choosing a date
    #[error("no reschedule date selected")]
    DateNotSelected,

    /// The chosen date offers slots but none was selected
    #[error("no delivery slot selected")]
    SlotNotSelected,

    /// A cancellation was submitted without a reason
    #[error("no cancellation reason provided")]
    ReasonMissing,

    /// The order's current status does not allow the requested action
    #[error("order status {0} does not allow this action")]
    NotActionable(&'static str),
}

/// Result type for scheduling operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
