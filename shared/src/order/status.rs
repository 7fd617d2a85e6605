//! Order status state machine

use serde::{Deserialize, Serialize};

/// Order workflow status (closed set, exact backend strings)
///
/// `Paid` is a payment badge the backend layers on top of the
/// workflow; it participates in no lifecycle transition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rescheduled,
    OutForDelivery,
    Delivered,
    Cancelled,
    Paid,
}

impl OrderStatus {
    /// Backend wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rescheduled => "Rescheduled",
            Self::OutForDelivery => "OutForDelivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Paid => "Paid",
        }
    }

    /// Whether the customer may still reschedule or cancel
    ///
    /// Table orders are additionally exempt regardless of status; see
    /// [`crate::models::Order::allows_modification`].
    pub fn allows_modification(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted | Self::Rescheduled)
    }

    /// Terminal statuses admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether this is the payment overlay rather than a workflow state
    pub fn is_payment_overlay(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Legal workflow transitions
    ///
    /// The server remains the authority on what actually happens; the
    /// client uses this table to decide which mutations to offer and
    /// to sanity-check what comes back. Repeated reschedules make the
    /// Rescheduled self-transition legal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (*self, next) {
            (Pending, Accepted | Rescheduled | Cancelled) => true,
            (Accepted, Rescheduled | OutForDelivery | Cancelled) => true,
            (Rescheduled, Accepted | Rescheduled | OutForDelivery | Cancelled) => true,
            (OutForDelivery, Delivered) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rescheduled,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Paid,
    ];

    #[test]
    fn test_wire_strings_round_trip() {
        for status in ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(OrderStatus::OutForDelivery.as_str(), "OutForDelivery");
    }

    #[test]
    fn test_terminal_states_admit_no_transitions() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            assert!(status.is_terminal());
            for next in ALL {
                assert!(!status.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_paid_overlay_never_transitions() {
        assert!(OrderStatus::Paid.is_payment_overlay());
        for next in ALL {
            assert!(!OrderStatus::Paid.can_transition_to(next));
        }
        for status in ALL {
            assert!(!status.can_transition_to(OrderStatus::Paid));
        }
    }

    #[test]
    fn test_modifiable_statuses_can_cancel_and_reschedule() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Rescheduled,
        ] {
            assert!(status.allows_modification());
            assert!(status.can_transition_to(OrderStatus::Cancelled));
            assert!(status.can_transition_to(OrderStatus::Rescheduled));
        }
    }

    #[test]
    fn test_delivery_path() {
        assert!(OrderStatus::Accepted.can_transition_to(OrderStatus::OutForDelivery));
        assert!(OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
    }
}
