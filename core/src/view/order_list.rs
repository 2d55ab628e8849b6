// order_admin/src/view/order_list.rs

//! `OrderListView` turns user actions into store dispatches and toasts.
//!
//! Handlers take `&mut self` and await each dispatch before returning, so the
//! page never has more than one modal or one expanded row. Store state is
//! read through short-lived guards that are dropped before any `.await`.

use super::state::{RejectDraft, ViewState};
use crate::error::AdminError;
use crate::labels;
use crate::models::{OrderId, OrderQuery, OrderStatus, StatusFilter, StatusUpdate};
use crate::navigation::{Navigator, LOGIN_ROUTE};
use crate::notify::Notifier;
use crate::store::OrderStore;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct OrderListView {
  store: OrderStore,
  notifier: Arc<dyn Notifier>,
  navigator: Arc<dyn Navigator>,
  state: ViewState,
}

impl OrderListView {
  pub fn new(store: OrderStore, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
    Self {
      store,
      notifier,
      navigator,
      state: ViewState::default(),
    }
  }

  pub fn store(&self) -> &OrderStore {
    &self.store
  }

  pub fn state(&self) -> &ViewState {
    &self.state
  }

  /// Redirects to the login route when the session is gone. Returns whether
  /// the user is still authenticated.
  pub fn ensure_authenticated(&self) -> bool {
    if self.store.auth().is_authenticated() {
      return true;
    }
    info!(route = LOGIN_ROUTE, "Not authenticated; redirecting.");
    self.navigator.redirect(LOGIN_ROUTE);
    false
  }

  /// Initial load: the store's current page with its current filter.
  #[instrument(skip(self))]
  pub async fn mount(&mut self) {
    if !self.ensure_authenticated() {
      return;
    }
    let (page, filter) = {
      let state = self.store.state().read();
      (state.current_page, state.order_status_filter)
    };
    self.load_page(page, filter).await;
  }

  /// Re-requests the page currently shown.
  pub async fn refresh(&mut self) {
    self.mount().await;
  }

  /// Ignored unless `new_page` lies within `[1, total_pages]`.
  #[instrument(skip(self))]
  pub async fn handle_page_change(&mut self, new_page: u32) {
    let (total_pages, filter) = {
      let state = self.store.state().read();
      (state.total_pages, state.order_status_filter)
    };
    if new_page < 1 || new_page > total_pages {
      debug!(new_page, total_pages, "Page out of range; ignoring.");
      return;
    }
    self.load_page(new_page, filter).await;
  }

  /// A new filter always starts over at page 1.
  #[instrument(skip(self), fields(filter = %filter))]
  pub async fn handle_status_filter_change(&mut self, filter: StatusFilter) {
    self.load_page(1, filter).await;
  }

  /// Expands `order_id` and loads its items, or collapses it when it is
  /// already the expanded row.
  #[instrument(skip(self))]
  pub async fn handle_view_details(&mut self, order_id: OrderId) {
    if self.state.selected_order_id == Some(order_id) {
      self.state.selected_order_id = None;
      self.store.clear_order_details();
      return;
    }
    self.state.selected_order_id = Some(order_id);
    self.load_details(order_id).await;
  }

  /// Rejections go through the reject modal so they always carry a reason;
  /// every other transition is dispatched straight away.
  #[instrument(skip(self))]
  pub async fn handle_status_change(&mut self, order_id: OrderId, from_status: OrderStatus, to_status: OrderStatus) {
    if to_status == OrderStatus::Rejected {
      self.open_reject_modal(order_id, from_status);
      return;
    }
    let update = StatusUpdate::transition(order_id, from_status, to_status);
    match self.store.update_order_status(update).await {
      Ok(()) => {
        self.notifier.success(labels::STATUS_UPDATED);
        self.refresh_expanded_details(order_id).await;
      }
      Err(e) => self.notify_failure(&e, labels::STATUS_UPDATE_FAILED),
    }
  }

  pub fn open_reject_modal(&mut self, order_id: OrderId, from_status: OrderStatus) {
    debug!(order_id, from = %from_status, "Opening reject modal.");
    self.state.reject_draft = Some(RejectDraft::new(order_id, from_status));
  }

  pub fn close_reject_modal(&mut self) {
    self.state.reject_draft = None;
  }

  /// Updates the reason being typed. No-op while the modal is closed.
  pub fn set_reject_cause(&mut self, text: &str) {
    if let Some(draft) = self.state.reject_draft.as_mut() {
      draft.set_cause(text);
    }
  }

  /// Confirms the reject modal. A blank reason never reaches the service and
  /// leaves the modal open; so does a refused rejection.
  #[instrument(skip(self))]
  pub async fn handle_reject_order(&mut self) {
    let Some(draft) = self.state.reject_draft.clone() else {
      debug!("Reject confirmed without an open modal; ignoring.");
      return;
    };
    if draft.is_blank() {
      self.notifier.dismiss_all();
      self.notifier.error(labels::REJECT_REASON_REQUIRED);
      return;
    }

    let update = StatusUpdate::rejection(draft.order_id, draft.from_status, draft.cause());
    match self.store.update_order_status(update).await {
      Ok(()) => {
        self.close_reject_modal();
        self.notifier.success(labels::ORDER_REJECTED);
        self.refresh_expanded_details(draft.order_id).await;
      }
      Err(e) => self.notify_failure(&e, labels::ORDER_REJECT_FAILED),
    }
  }

  async fn load_page(&mut self, index: u32, filter: StatusFilter) {
    if let Err(e) = self.store.fetch_orders(OrderQuery::page(index, filter)).await {
      self.notify_failure(&e, labels::ORDERS_FETCH_FAILED);
    }
  }

  async fn load_details(&mut self, order_id: OrderId) {
    if let Err(e) = self.store.fetch_order_details(order_id).await {
      self.notify_failure(&e, labels::DETAILS_FETCH_FAILED);
    }
  }

  async fn refresh_expanded_details(&mut self, order_id: OrderId) {
    if self.state.selected_order_id == Some(order_id) {
      self.load_details(order_id).await;
    }
  }

  fn notify_failure(&self, error: &AdminError, fallback: &str) {
    self.notifier.dismiss_all();
    self.notifier.error(error.user_message().unwrap_or(fallback));
    if error.is_unauthorized() {
      self.ensure_authenticated();
    }
  }
}
