//! Order tracking timeline
//!
//! A derived view: the backend stamps per-step timestamp attributes
//! ("Approved On", "Delivered On", ...) and the client rebuilds the
//! step sequence from them on every render. Nothing here is persisted,
//! and no ordering of the stamps is enforced client-side — the server
//! is the sole authority and this module only reflects the evidence it
//! receives.

use serde::{Deserialize, Serialize};

use super::status::OrderStatus;
use crate::models::attribute::AttributeTable;

/// Identity of a tracking step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepKind {
    Received,
    Accepted,
    Rescheduled,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl StepKind {
    /// Display label for the step
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Accepted => "Accepted",
            Self::Rescheduled => "Rescheduled",
            Self::OutForDelivery => "Out For Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Completion state of a tracking step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Pending,
    Cancelled,
}

/// One entry in the tracking timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingStep {
    pub kind: StepKind,
    pub state: StepState,
    /// Raw timestamp attribute value, when stamped. `None` on the
    /// Received step means the caller falls back to the order's
    /// creation time; `None` on a Cancelled step falls back to the
    /// last-update time.
    pub timestamp: Option<String>,
}

impl TrackingStep {
    fn completed(kind: StepKind, timestamp: Option<&str>) -> Self {
        Self {
            kind,
            state: StepState::Completed,
            timestamp: timestamp.map(str::to_string),
        }
    }

    fn pending(kind: StepKind) -> Self {
        Self {
            kind,
            state: StepState::Pending,
            timestamp: None,
        }
    }
}

/// Build the tracking timeline for an order
///
/// The Received step is always present and always completed. On the
/// cancelled path only steps that actually completed before
/// cancellation survive, followed by a terminal Cancelled step —
/// never-completed steps are dropped, not rendered pending.
pub fn build_timeline(status: OrderStatus, attributes: &AttributeTable) -> Vec<TrackingStep> {
    let mut steps = vec![TrackingStep::completed(
        StepKind::Received,
        attributes.order_date(),
    )];

    let approved = attributes.approved_on();
    let rescheduled = attributes.rescheduled_on();
    let out_for_delivery = attributes.out_for_delivery_on();
    let delivered = attributes.delivered_on();

    if status == OrderStatus::Cancelled {
        if approved.is_some() {
            steps.push(TrackingStep::completed(StepKind::Accepted, approved));
        }
        if rescheduled.is_some() {
            steps.push(TrackingStep::completed(StepKind::Rescheduled, rescheduled));
        }
        if out_for_delivery.is_some() {
            steps.push(TrackingStep::completed(
                StepKind::OutForDelivery,
                out_for_delivery,
            ));
        }
        if delivered.is_some() {
            steps.push(TrackingStep::completed(StepKind::Delivered, delivered));
        }
        steps.push(TrackingStep {
            kind: StepKind::Cancelled,
            state: StepState::Cancelled,
            timestamp: attributes.cancelled_on().map(str::to_string),
        });
        return steps;
    }

    steps.push(match approved {
        Some(ts) => TrackingStep::completed(StepKind::Accepted, Some(ts)),
        None => TrackingStep::pending(StepKind::Accepted),
    });

    // The reschedule step only appears when evidenced or current
    if status == OrderStatus::Rescheduled || rescheduled.is_some() {
        steps.push(TrackingStep::completed(StepKind::Rescheduled, rescheduled));
    }

    steps.push(match out_for_delivery {
        Some(ts) => TrackingStep::completed(StepKind::OutForDelivery, Some(ts)),
        None => TrackingStep::pending(StepKind::OutForDelivery),
    });

    steps.push(match delivered {
        Some(ts) => TrackingStep::completed(StepKind::Delivered, Some(ts)),
        None => TrackingStep::pending(StepKind::Delivered),
    });

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attribute::{AttributeModel, names};

    fn attrs(entries: Vec<(&str, &str)>) -> AttributeTable {
        AttributeTable::new(
            entries
                .into_iter()
                .map(|(n, v)| AttributeModel::new(n, v))
                .collect(),
        )
    }

    fn kinds(steps: &[TrackingStep]) -> Vec<StepKind> {
        steps.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_fresh_pending_order() {
        let table = attrs(vec![(names::ORDER_DATE, "2025-03-01T10:00:00.000Z")]);
        let steps = build_timeline(OrderStatus::Pending, &table);

        assert_eq!(
            kinds(&steps),
            vec![
                StepKind::Received,
                StepKind::Accepted,
                StepKind::OutForDelivery,
                StepKind::Delivered,
            ]
        );
        assert_eq!(steps[0].state, StepState::Completed);
        assert_eq!(
            steps[0].timestamp.as_deref(),
            Some("2025-03-01T10:00:00.000Z")
        );
        assert!(steps[1..].iter().all(|s| s.state == StepState::Pending));
    }

    #[test]
    fn test_delivered_order_all_completed() {
        let table = attrs(vec![
            (names::ORDER_DATE, "t0"),
            (names::APPROVED_ON, "t1"),
            (names::OUT_FOR_DELIVERY_ON, "t2"),
            (names::DELIVERED_ON, "t3"),
        ]);
        let steps = build_timeline(OrderStatus::Delivered, &table);

        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| s.state == StepState::Completed));
        assert_eq!(steps[3].timestamp.as_deref(), Some("t3"));
    }

    #[test]
    fn test_rescheduled_step_from_status_without_stamp() {
        let table = attrs(vec![(names::APPROVED_ON, "t1")]);
        let steps = build_timeline(OrderStatus::Rescheduled, &table);

        assert_eq!(
            kinds(&steps),
            vec![
                StepKind::Received,
                StepKind::Accepted,
                StepKind::Rescheduled,
                StepKind::OutForDelivery,
                StepKind::Delivered,
            ]
        );
        assert_eq!(steps[2].state, StepState::Completed);
        assert_eq!(steps[2].timestamp, None);
    }

    #[test]
    fn test_rescheduled_step_from_stamp_with_other_status() {
        let table = attrs(vec![
            (names::APPROVED_ON, "t1"),
            (names::RESCHEDULED_ON, "t2"),
            (names::OUT_FOR_DELIVERY_ON, "t3"),
        ]);
        let steps = build_timeline(OrderStatus::OutForDelivery, &table);

        assert!(kinds(&steps).contains(&StepKind::Rescheduled));
        let step = steps.iter().find(|s| s.kind == StepKind::Rescheduled).unwrap();
        assert_eq!(step.timestamp.as_deref(), Some("t2"));
    }

    #[test]
    fn test_cancelled_truncates_to_completed_steps() {
        let table = attrs(vec![
            (names::ORDER_DATE, "t0"),
            (names::APPROVED_ON, "t1"),
            (names::CANCELLED_ON, "t2"),
        ]);
        let steps = build_timeline(OrderStatus::Cancelled, &table);

        assert_eq!(
            kinds(&steps),
            vec![StepKind::Received, StepKind::Accepted, StepKind::Cancelled]
        );
        assert_eq!(steps[0].state, StepState::Completed);
        assert_eq!(steps[1].state, StepState::Completed);
        assert_eq!(steps[2].state, StepState::Cancelled);
        assert_eq!(steps[2].timestamp.as_deref(), Some("t2"));
    }

    #[test]
    fn test_cancelled_before_acceptance_drops_accepted_step() {
        let table = attrs(vec![(names::ORDER_DATE, "t0")]);
        let steps = build_timeline(OrderStatus::Cancelled, &table);

        assert_eq!(kinds(&steps), vec![StepKind::Received, StepKind::Cancelled]);
        // Fallback timestamp is the caller's concern
        assert_eq!(steps[1].timestamp, None);
    }

    #[test]
    fn test_cancelled_keeps_out_for_delivery_when_stamped() {
        let table = attrs(vec![
            (names::APPROVED_ON, "t1"),
            (names::OUT_FOR_DELIVERY_ON, "t2"),
            (names::CANCELLED_ON, "t3"),
        ]);
        let steps = build_timeline(OrderStatus::Cancelled, &table);

        assert_eq!(
            kinds(&steps),
            vec![
                StepKind::Received,
                StepKind::Accepted,
                StepKind::OutForDelivery,
                StepKind::Cancelled,
            ]
        );
        assert!(!kinds(&steps).contains(&StepKind::Delivered));
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(StepKind::OutForDelivery.label(), "Out For Delivery");
        assert_eq!(StepKind::Received.label(), "Received");
    }
}
