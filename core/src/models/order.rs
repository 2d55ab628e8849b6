// order_admin/src/models/order.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type OrderId = i64;

/// Lifecycle stage of an order. The order service owns the state machine;
/// this crate only reads the status and asks for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  Pending,
  Rejected,
  InPreparation,
  ReadyToShip,
  Delivering,
  Delivered,
  Cancelled,
  FailedDelivery,
  Returned,
}

impl OrderStatus {
  /// All statuses in the order the filter selector lists them.
  pub const ALL: [OrderStatus; 9] = [
    OrderStatus::Pending,
    OrderStatus::Rejected,
    OrderStatus::InPreparation,
    OrderStatus::ReadyToShip,
    OrderStatus::Delivering,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
    OrderStatus::FailedDelivery,
    OrderStatus::Returned,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "PENDING",
      OrderStatus::Rejected => "REJECTED",
      OrderStatus::InPreparation => "IN_PREPARATION",
      OrderStatus::ReadyToShip => "READY_TO_SHIP",
      OrderStatus::Delivering => "DELIVERING",
      OrderStatus::Delivered => "DELIVERED",
      OrderStatus::Cancelled => "CANCELLED",
      OrderStatus::FailedDelivery => "FAILED_DELIVERY",
      OrderStatus::Returned => "RETURNED",
    }
  }

  /// No further transitions are offered from these.
  pub fn is_terminal(&self) -> bool {
    matches!(
      self,
      OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Rejected | OrderStatus::Returned
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
  Card,
  Cod,
}

impl PaymentMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Card => "CARD",
      PaymentMethod::Cod => "COD",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
  Success,
  Pending,
  Failed,
}

impl PaymentStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentStatus::Success => "SUCCESS",
      PaymentStatus::Pending => "PENDING",
      PaymentStatus::Failed => "FAILED",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
  None,
  PendingRefund,
  Refunded,
  FailedRefund,
}

impl RefundStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      RefundStatus::None => "NONE",
      RefundStatus::PendingRefund => "PENDING_REFUND",
      RefundStatus::Refunded => "REFUNDED",
      RefundStatus::FailedRefund => "FAILED_REFUND",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub order_id: OrderId,
  pub order_status: OrderStatus,
  pub payment_method: PaymentMethod,
  pub payment_status: PaymentStatus,
  pub refund_status: RefundStatus,
  #[serde(default)]
  pub refund_at: Option<String>,
  #[serde(default)]
  pub address: String,
  #[serde(default)]
  pub phone_number: String,
  // Either already "HH:MM:SS DD-MM-YYYY" or a raw timestamp, see format::format_order_at.
  #[serde(default)]
  pub order_at: Option<String>,
  pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
  pub kind: &'static str,
  pub value: String,
}

macro_rules! wire_enum_text {
  ($ty:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl FromStr for $ty {
      type Err = UnknownVariant;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [$($variant),+]
          .into_iter()
          .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
          .ok_or_else(|| UnknownVariant { kind: $kind, value: s.to_string() })
      }
    }
  };
}

wire_enum_text!(
  OrderStatus,
  "order status",
  [
    OrderStatus::Pending,
    OrderStatus::Rejected,
    OrderStatus::InPreparation,
    OrderStatus::ReadyToShip,
    OrderStatus::Delivering,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
    OrderStatus::FailedDelivery,
    OrderStatus::Returned,
  ]
);
wire_enum_text!(PaymentMethod, "payment method", [PaymentMethod::Card, PaymentMethod::Cod]);
wire_enum_text!(
  PaymentStatus,
  "payment status",
  [PaymentStatus::Success, PaymentStatus::Pending, PaymentStatus::Failed]
);
wire_enum_text!(
  RefundStatus,
  "refund status",
  [
    RefundStatus::None,
    RefundStatus::PendingRefund,
    RefundStatus::Refunded,
    RefundStatus::FailedRefund,
  ]
);
