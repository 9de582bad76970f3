//! Order entity - carries a status through the delivery lifecycle
//!
//! All status movement goes through [`Order::transition_status`] and
//! [`Order::cancel`] so the delivered_at side effect and the terminal-state
//! rules live in one place.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{OrderStatus, OrderTransitionPolicy};

/// Order entity
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    /// Customer who placed the order
    pub user_id: i64,
    pub restaurant_id: i64,
    /// Opaque line-item payload, stored as-is
    pub items: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub delivery_address: Option<String>,
    /// Stamped at creation, immutable afterwards
    pub placed_at: DateTime<Utc>,
    /// Stamped only on the transition into `delivered`
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Check if a user is the customer who placed the order
    #[inline]
    pub fn is_placed_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Customers may only edit an order the restaurant has not started on
    #[inline]
    pub fn is_editable(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Move the order to `to` under the given policy.
    ///
    /// Transition into `delivered` stamps `delivered_at`; no other status
    /// carries a timestamp side effect.
    pub fn transition_status(
        &mut self,
        to: OrderStatus,
        policy: OrderTransitionPolicy,
    ) -> Result<(), DomainError> {
        if !policy.allows(self.status, to) {
            return Err(DomainError::IllegalTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        if to == OrderStatus::Delivered {
            self.delivered_at = Some(Utc::now());
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Cancel the order unless it already reached a terminal status.
    ///
    /// Cancellation never stamps a timestamp.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::OrderAlreadyClosed(self.status));
        }
        self.status = OrderStatus::Cancelled;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            id: 1,
            user_id: 100,
            restaurant_id: 10,
            items: Some(serde_json::json!([{ "item": "Margherita", "qty": 1 }])),
            status,
            total_price: Decimal::new(999, 2),
            delivery_address: Some("1 Main St".to_string()),
            placed_at: now,
            delivered_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_forward_walk_to_delivered_stamps_timestamp() {
        let policy = OrderTransitionPolicy::ForwardOrCancel;
        let mut order = sample_order(OrderStatus::Pending);

        for target in [
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::OnTheWay,
        ] {
            order.transition_status(target, policy).unwrap();
            assert!(order.delivered_at.is_none());
        }

        order
            .transition_status(OrderStatus::Delivered, policy)
            .unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.delivered_at.is_some());
    }

    #[test]
    fn test_strict_policy_rejects_skip_ahead() {
        let mut order = sample_order(OrderStatus::Pending);
        let err = order
            .transition_status(
                OrderStatus::Delivered,
                OrderTransitionPolicy::ForwardOrCancel,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::IllegalTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
            }
        ));
        // Nothing moved
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.delivered_at.is_none());
    }

    #[test]
    fn test_permissive_policy_accepts_skip_ahead() {
        let mut order = sample_order(OrderStatus::Pending);
        order
            .transition_status(OrderStatus::Delivered, OrderTransitionPolicy::Permissive)
            .unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.delivered_at.is_some());
    }

    #[test]
    fn test_cancel_succeeds_from_any_non_terminal_state() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::OnTheWay,
        ] {
            let mut order = sample_order(status);
            order.cancel().unwrap();
            assert_eq!(order.status, OrderStatus::Cancelled);
            assert!(order.delivered_at.is_none());
        }
    }

    #[test]
    fn test_cancel_conflicts_on_terminal_state() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let mut order = sample_order(status);
            let err = order.cancel().unwrap_err();
            assert!(matches!(err, DomainError::OrderAlreadyClosed(s) if s == status));
            assert_eq!(order.status, status);
        }
    }

    #[test]
    fn test_only_delivered_touches_delivered_at() {
        let policy = OrderTransitionPolicy::Permissive;
        for target in [
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::OnTheWay,
            OrderStatus::Cancelled,
        ] {
            let mut order = sample_order(OrderStatus::Pending);
            order.transition_status(target, policy).unwrap();
            assert!(order.delivered_at.is_none(), "{target} stamped delivered_at");
        }
    }

    #[test]
    fn test_editability_is_pending_only() {
        assert!(sample_order(OrderStatus::Pending).is_editable());
        assert!(!sample_order(OrderStatus::Accepted).is_editable());
        assert!(!sample_order(OrderStatus::Delivered).is_editable());
    }
}
