// order_admin/src/store/order_store.rs

//! The order store: list page, pagination, filter and the expanded order's
//! details, plus the async actions that fill them from an [`OrderApi`].

use super::auth::AuthStore;
use super::shared::StoreData;
use crate::api::OrderApi;
use crate::error::{AdminError, AdminResult};
use crate::models::{Order, OrderDetail, OrderId, OrderQuery, StatusFilter, StatusUpdate};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct OrderState {
  pub orders: Vec<Order>,
  /// 1-based.
  pub current_page: u32,
  pub total_pages: u32,
  pub order_status_filter: StatusFilter,
  pub order_details: Vec<OrderDetail>,
  /// Order the current `order_details` (or the in-flight fetch) belong to.
  pub details_order_id: Option<OrderId>,
  pub loading: bool,
  pub loading_details: bool,
  /// Last request failure, as text.
  pub error: Option<String>,
  // Bumped per request; a response whose generation is no longer current is dropped.
  list_generation: u64,
  details_generation: u64,
}

impl Default for OrderState {
  fn default() -> Self {
    Self {
      orders: Vec::new(),
      current_page: 1,
      total_pages: 0,
      order_status_filter: StatusFilter::ALL,
      order_details: Vec::new(),
      details_order_id: None,
      loading: false,
      loading_details: false,
      error: None,
      list_generation: 0,
      details_generation: 0,
    }
  }
}

impl OrderState {
  pub fn order(&self, order_id: OrderId) -> Option<&Order> {
    self.orders.iter().find(|o| o.order_id == order_id)
  }
}

/// Cloneable handle; clones share the same state.
#[derive(Clone)]
pub struct OrderStore {
  state: StoreData<OrderState>,
  api: Arc<dyn OrderApi>,
  auth: AuthStore,
}

impl OrderStore {
  pub fn new(api: Arc<dyn OrderApi>, auth: AuthStore) -> Self {
    Self {
      state: StoreData::default(),
      api,
      auth,
    }
  }

  pub fn state(&self) -> &StoreData<OrderState> {
    &self.state
  }

  pub fn snapshot(&self) -> OrderState {
    self.state.snapshot()
  }

  pub fn auth(&self) -> &AuthStore {
    &self.auth
  }

  pub fn current_page(&self) -> u32 {
    self.state.read().current_page
  }

  pub fn total_pages(&self) -> u32 {
    self.state.read().total_pages
  }

  pub fn status_filter(&self) -> StatusFilter {
    self.state.read().order_status_filter
  }

  /// Loads one page. The requested page and filter only become current
  /// together with the rows they describe; a failed request leaves the
  /// previous page, filter and rows in place.
  #[instrument(skip(self), fields(index = query.index, filter = %query.order_status))]
  pub async fn fetch_orders(&self, query: OrderQuery) -> AdminResult<()> {
    let generation = self.state.update(|s| {
      s.list_generation += 1;
      s.loading = true;
      s.error = None;
      s.list_generation
    });

    let outcome = self.api.fetch_orders(&query).await;
    self.sign_out_if_unauthorized(&outcome);

    let mut state = self.state.write();
    if state.list_generation != generation {
      debug!("Discarding response of a superseded order page request.");
      return Ok(());
    }
    state.loading = false;
    match outcome {
      Ok(page) => {
        let requested = page.current_page.unwrap_or(query.index);
        state.total_pages = page.total_pages;
        state.current_page = requested.clamp(1, page.total_pages.max(1));
        state.order_status_filter = query.order_status;
        state.orders = page.orders;
        info!(
          orders = state.orders.len(),
          page = state.current_page,
          total_pages = state.total_pages,
          "Order page loaded."
        );
        Ok(())
      }
      Err(e) => {
        warn!(error = %e, "Failed to load order page.");
        state.error = Some(e.to_string());
        Err(e)
      }
    }
  }

  /// Asks the service for a transition. On success the loaded copy of the
  /// order takes the new status; the service stays authoritative.
  #[instrument(skip(self, update), fields(order_id = update.order_id, from = %update.from_status, to = %update.to_status))]
  pub async fn update_order_status(&self, update: StatusUpdate) -> AdminResult<()> {
    let outcome = self.api.update_order_status(&update).await;
    self.sign_out_if_unauthorized(&outcome);

    match outcome {
      Ok(()) => {
        self.state.update(|s| {
          if let Some(order) = s.orders.iter_mut().find(|o| o.order_id == update.order_id) {
            order.order_status = update.to_status;
          }
        });
        info!("Order status updated.");
        Ok(())
      }
      Err(e) => {
        warn!(error = %e, "Order status update refused.");
        self.state.write().error = Some(e.to_string());
        Err(e)
      }
    }
  }

  /// Loads the line items of `order_id`. A response that lands after
  /// [`clear_order_details`](Self::clear_order_details) or after a newer
  /// detail request is ignored.
  #[instrument(skip(self))]
  pub async fn fetch_order_details(&self, order_id: OrderId) -> AdminResult<()> {
    let generation = self.state.update(|s| {
      s.details_generation += 1;
      s.loading_details = true;
      s.details_order_id = Some(order_id);
      s.order_details.clear();
      s.details_generation
    });

    let outcome = self.api.fetch_order_details(order_id).await;
    self.sign_out_if_unauthorized(&outcome);

    let mut state = self.state.write();
    if state.details_generation != generation {
      debug!("Discarding stale order details response.");
      return Ok(());
    }
    state.loading_details = false;
    match outcome {
      Ok(details) => {
        debug!(items = details.len(), "Order details loaded.");
        state.order_details = details;
        Ok(())
      }
      Err(e) => {
        warn!(error = %e, "Failed to load order details.");
        state.error = Some(e.to_string());
        Err(e)
      }
    }
  }

  pub fn clear_order_details(&self) {
    self.state.update(|s| {
      s.details_generation += 1;
      s.order_details.clear();
      s.details_order_id = None;
      s.loading_details = false;
    });
  }

  fn sign_out_if_unauthorized<T>(&self, outcome: &AdminResult<T>) {
    if matches!(outcome, Err(AdminError::Unauthorized)) {
      self.auth.sign_out();
    }
  }
}
