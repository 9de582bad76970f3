//! Order status - the fixed lifecycle an order moves through
//!
//! Forward chain: pending -> accepted -> preparing -> on_the_way -> delivered.
//! `cancelled` is reachable from any non-terminal state. `delivered` and
//! `cancelled` are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting restaurant acceptance
    #[default]
    Pending,
    /// Restaurant accepted the order
    Accepted,
    /// Kitchen is preparing the order
    Preparing,
    /// Handed to a driver, en route
    OnTheWay,
    /// Received by the customer (terminal)
    Delivered,
    /// Abandoned before delivery (terminal)
    Cancelled,
}

impl OrderStatus {
    /// All recognized statuses, forward chain first
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Accepted,
        Self::Preparing,
        Self::OnTheWay,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Database/wire representation
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Preparing => "preparing",
            Self::OnTheWay => "on_the_way",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// No transition leaves a terminal status
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Immediate successor in the forward chain, if any
    #[must_use]
    pub const fn next_in_chain(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Accepted),
            Self::Accepted => Some(Self::Preparing),
            Self::Preparing => Some(Self::OnTheWay),
            Self::OnTheWay => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }
}

/// Error when parsing a status from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized order status")]
pub struct OrderStatusParseError;

impl FromStr for OrderStatus {
    type Err = OrderStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "preparing" => Ok(Self::Preparing),
            "on_the_way" => Ok(Self::OnTheWay),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(OrderStatusParseError),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which status transitions the transition operation accepts.
///
/// The adjacency is explicit so product can relax it without touching the
/// order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderTransitionPolicy {
    /// Only the immediate forward successor, or cancellation of a
    /// non-terminal order
    #[default]
    ForwardOrCancel,
    /// Any target from any non-terminal source (skip-ahead allowed)
    Permissive,
}

impl OrderTransitionPolicy {
    /// Whether moving `from -> to` is a legal transition under this policy.
    ///
    /// Terminal sources never transition. A no-op (`from == to`) is not a
    /// transition and is rejected.
    #[must_use]
    pub fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        if from.is_terminal() || from == to {
            return false;
        }
        match self {
            Self::ForwardOrCancel => {
                to == OrderStatus::Cancelled || from.next_in_chain() == Some(to)
            }
            Self::Permissive => true,
        }
    }
}
