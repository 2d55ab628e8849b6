// order_admin/src/models/page.rs

//! Request and response shapes for the list and status endpoints.

use super::order::{Order, OrderId, OrderStatus, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The admin list always asks for pages of ten orders.
pub const PAGE_SIZE: u32 = 10;

/// Status filter of the order list. `StatusFilter::ALL` leaves the list unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusFilter(Option<OrderStatus>);

impl StatusFilter {
  pub const ALL: StatusFilter = StatusFilter(None);

  pub fn only(status: OrderStatus) -> Self {
    StatusFilter(Some(status))
  }

  pub fn status(&self) -> Option<OrderStatus> {
    self.0
  }

  pub fn is_all(&self) -> bool {
    self.0.is_none()
  }

  /// Value sent as the `orderStatus` query parameter; empty for "all".
  pub fn as_query_value(&self) -> &'static str {
    self.0.map(|s| s.as_str()).unwrap_or("")
  }
}

impl From<OrderStatus> for StatusFilter {
  fn from(status: OrderStatus) -> Self {
    StatusFilter::only(status)
  }
}

impl From<Option<OrderStatus>> for StatusFilter {
  fn from(status: Option<OrderStatus>) -> Self {
    StatusFilter(status)
  }
}

impl FromStr for StatusFilter {
  type Err = UnknownVariant;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
      return Ok(StatusFilter::ALL);
    }
    trimmed.parse::<OrderStatus>().map(StatusFilter::only)
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(status) => f.write_str(status.as_str()),
      None => f.write_str("ALL"),
    }
  }
}

/// Arguments of a list fetch: 1-based page index, page size and filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuery {
  pub index: u32,
  pub size: u32,
  pub order_status: StatusFilter,
}

impl OrderQuery {
  pub fn page(index: u32, order_status: StatusFilter) -> Self {
    Self {
      index,
      size: PAGE_SIZE,
      order_status,
    }
  }
}

/// One page of orders plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
  #[serde(default)]
  pub orders: Vec<Order>,
  #[serde(default)]
  pub current_page: Option<u32>,
  #[serde(default)]
  pub total_pages: u32,
}

/// A requested status transition. `cause` is only carried for rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
  pub order_id: OrderId,
  pub from_status: OrderStatus,
  pub to_status: OrderStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cause: Option<String>,
}

impl StatusUpdate {
  pub fn transition(order_id: OrderId, from_status: OrderStatus, to_status: OrderStatus) -> Self {
    Self {
      order_id,
      from_status,
      to_status,
      cause: None,
    }
  }

  pub fn rejection(order_id: OrderId, from_status: OrderStatus, cause: impl Into<String>) -> Self {
    Self {
      order_id,
      from_status,
      to_status: OrderStatus::Rejected,
      cause: Some(cause.into()),
    }
  }
}
