// order_admin/src/api/mod.rs

//! The request layer the store dispatches to.

pub mod http;

use crate::error::AdminResult;
use crate::models::{OrderDetail, OrderId, OrderPage, OrderQuery, StatusUpdate};
use async_trait::async_trait;

pub use http::HttpOrderApi;

/// Remote order-management operations consumed by the admin page.
///
/// The service is the sole arbiter of which transitions are valid; an
/// implementation reports refusals as `AdminError::Server` carrying the
/// service's message when there is one, and an expired or missing session
/// as `AdminError::Unauthorized`.
#[async_trait]
pub trait OrderApi: Send + Sync {
  /// Fetches one page of orders.
  async fn fetch_orders(&self, query: &OrderQuery) -> AdminResult<OrderPage>;

  /// Requests a status transition. `update.cause` is set for rejections.
  async fn update_order_status(&self, update: &StatusUpdate) -> AdminResult<()>;

  /// Fetches the line items of one order.
  async fn fetch_order_details(&self, order_id: OrderId) -> AdminResult<Vec<OrderDetail>>;
}
