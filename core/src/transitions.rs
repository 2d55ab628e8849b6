// order_admin/src/transitions.rs

//! The fixed menu of status transitions the admin page offers per order status.

use crate::models::{Order, OrderStatus, PaymentMethod, PaymentStatus};

/// A button in the per-row transition menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction {
  pub to_status: OrderStatus,
  pub label: &'static str,
  /// Gated by [`can_reject`] on top of the current status.
  pub restricted: bool,
}

/// Visual tone of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
  Approve,
  Cancel,
}

impl StatusAction {
  const fn open(to_status: OrderStatus, label: &'static str) -> Self {
    Self {
      to_status,
      label,
      restricted: false,
    }
  }

  const fn restricted(to_status: OrderStatus, label: &'static str) -> Self {
    Self {
      to_status,
      label,
      restricted: true,
    }
  }

  pub fn tone(&self) -> ActionTone {
    match self.to_status {
      OrderStatus::Rejected | OrderStatus::Cancelled => ActionTone::Cancel,
      _ => ActionTone::Approve,
    }
  }

  /// Whether the button is usable for `order`.
  pub fn is_enabled_for(&self, order: &Order) -> bool {
    !self.restricted || can_reject(order)
  }
}

const REJECT: StatusAction = StatusAction::restricted(OrderStatus::Rejected, "Từ chối");

const FROM_PENDING: &[StatusAction] = &[StatusAction::open(OrderStatus::InPreparation, "Chuẩn bị hàng"), REJECT];
const FROM_IN_PREPARATION: &[StatusAction] = &[StatusAction::open(OrderStatus::ReadyToShip, "Sẵn sàng giao"), REJECT];
const FROM_READY_TO_SHIP: &[StatusAction] = &[REJECT];
const FROM_FAILED_DELIVERY: &[StatusAction] = &[StatusAction::open(OrderStatus::Returned, "Hoàn hàng")];

impl OrderStatus {
  /// Transitions offered from this status. Terminal and externally driven
  /// statuses (DELIVERING is advanced by the carrier) offer none.
  pub fn next_actions(self) -> &'static [StatusAction] {
    match self {
      OrderStatus::Pending => FROM_PENDING,
      OrderStatus::InPreparation => FROM_IN_PREPARATION,
      OrderStatus::ReadyToShip => FROM_READY_TO_SHIP,
      OrderStatus::FailedDelivery => FROM_FAILED_DELIVERY,
      OrderStatus::Rejected
      | OrderStatus::Delivering
      | OrderStatus::Delivered
      | OrderStatus::Cancelled
      | OrderStatus::Returned => &[],
    }
  }

  pub fn action_towards(self, to_status: OrderStatus) -> Option<&'static StatusAction> {
    self.next_actions().iter().find(|a| a.to_status == to_status)
  }
}

/// Card payments can only be rejected once the payment has cleared; every
/// other payment method can always be rejected.
pub fn can_reject(order: &Order) -> bool {
  match order.payment_method {
    PaymentMethod::Card => order.payment_status == PaymentStatus::Success,
    PaymentMethod::Cod => true,
  }
}
