// tests/common/mod.rs
#![allow(dead_code)] // Each test binary only uses part of the fixtures.

use anyhow::anyhow;
use async_trait::async_trait;
use order_admin::{
  AdminError, AdminResult, AuthStore, Navigator, Notifier, Order, OrderApi, OrderDetail, OrderId, OrderListView,
  OrderPage, OrderQuery, OrderStatus, OrderStore, PaymentMethod, PaymentStatus, RefundStatus, StatusUpdate,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

// --- Recorded interactions ---

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
  FetchOrders(OrderQuery),
  UpdateStatus(StatusUpdate),
  FetchDetails(OrderId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
  Success(String),
  Error(String),
  DismissAll,
}

/// How the mock service should fail the next call of one kind.
#[derive(Debug, Clone)]
pub enum MockFailure {
  /// Non-2xx with an optional message in the body.
  Server(Option<&'static str>),
  Unauthorized,
  /// Anything below HTTP (connection refused and friends).
  Network(&'static str),
}

impl MockFailure {
  fn into_error(self) -> AdminError {
    match self {
      MockFailure::Server(message) => AdminError::Server {
        status: 409,
        message: message.map(str::to_string),
      },
      MockFailure::Unauthorized => AdminError::Unauthorized,
      MockFailure::Network(m) => AdminError::from(anyhow!(m)),
    }
  }
}

// --- Mock order service ---

/// In-memory order service. Filters and paginates like the real one and
/// applies accepted transitions to its own data.
#[derive(Default)]
pub struct MockOrderApi {
  orders: Mutex<Vec<Order>>,
  details: Mutex<HashMap<OrderId, Vec<OrderDetail>>>,
  calls: Mutex<Vec<ApiCall>>,
  fail_fetch: Mutex<Option<MockFailure>>,
  fail_update: Mutex<Option<MockFailure>>,
  fail_details: Mutex<Option<MockFailure>>,
  details_delay: Mutex<Option<Duration>>,
  fetch_delays: Mutex<HashMap<u32, Duration>>,
}

impl MockOrderApi {
  pub fn with_orders(orders: Vec<Order>) -> Arc<Self> {
    let api = Self::default();
    *api.orders.lock() = orders;
    Arc::new(api)
  }

  pub fn set_details(&self, order_id: OrderId, details: Vec<OrderDetail>) {
    self.details.lock().insert(order_id, details);
  }

  pub fn fail_next_fetch(&self, failure: MockFailure) {
    *self.fail_fetch.lock() = Some(failure);
  }

  pub fn fail_next_update(&self, failure: MockFailure) {
    *self.fail_update.lock() = Some(failure);
  }

  pub fn fail_next_details(&self, failure: MockFailure) {
    *self.fail_details.lock() = Some(failure);
  }

  pub fn delay_details(&self, delay: Duration) {
    *self.details_delay.lock() = Some(delay);
  }

  /// Delays list responses for page `index` only.
  pub fn delay_fetch(&self, index: u32, delay: Duration) {
    self.fetch_delays.lock().insert(index, delay);
  }

  pub fn calls(&self) -> Vec<ApiCall> {
    self.calls.lock().clone()
  }

  pub fn fetch_calls(&self) -> Vec<OrderQuery> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        ApiCall::FetchOrders(q) => Some(q),
        _ => None,
      })
      .collect()
  }

  pub fn update_calls(&self) -> Vec<StatusUpdate> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        ApiCall::UpdateStatus(u) => Some(u),
        _ => None,
      })
      .collect()
  }

  pub fn detail_calls(&self) -> Vec<OrderId> {
    self
      .calls()
      .into_iter()
      .filter_map(|c| match c {
        ApiCall::FetchDetails(id) => Some(id),
        _ => None,
      })
      .collect()
  }

  pub fn server_status_of(&self, order_id: OrderId) -> Option<OrderStatus> {
    self.orders.lock().iter().find(|o| o.order_id == order_id).map(|o| o.order_status)
  }

  fn record(&self, call: ApiCall) {
    self.calls.lock().push(call);
  }
}

#[async_trait]
impl OrderApi for MockOrderApi {
  async fn fetch_orders(&self, query: &OrderQuery) -> AdminResult<OrderPage> {
    self.record(ApiCall::FetchOrders(*query));
    let delay = self.fetch_delays.lock().get(&query.index).copied();
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    if let Some(failure) = self.fail_fetch.lock().take() {
      return Err(failure.into_error());
    }
    let matching: Vec<Order> = self
      .orders
      .lock()
      .iter()
      .filter(|o| query.order_status.status().map_or(true, |s| s == o.order_status))
      .cloned()
      .collect();
    let size = query.size.max(1) as usize;
    let total_pages = matching.len().div_ceil(size) as u32;
    let skip = (query.index.max(1) as usize - 1) * size;
    Ok(OrderPage {
      orders: matching.into_iter().skip(skip).take(size).collect(),
      current_page: Some(query.index),
      total_pages,
    })
  }

  async fn update_order_status(&self, update: &StatusUpdate) -> AdminResult<()> {
    self.record(ApiCall::UpdateStatus(update.clone()));
    if let Some(failure) = self.fail_update.lock().take() {
      return Err(failure.into_error());
    }
    if let Some(order) = self.orders.lock().iter_mut().find(|o| o.order_id == update.order_id) {
      order.order_status = update.to_status;
    }
    Ok(())
  }

  async fn fetch_order_details(&self, order_id: OrderId) -> AdminResult<Vec<OrderDetail>> {
    self.record(ApiCall::FetchDetails(order_id));
    let delay = *self.details_delay.lock();
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    if let Some(failure) = self.fail_details.lock().take() {
      return Err(failure.into_error());
    }
    Ok(self.details.lock().get(&order_id).cloned().unwrap_or_default())
  }
}

// --- Recording collaborators ---

#[derive(Default)]
pub struct RecordingNotifier {
  toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
  pub fn toasts(&self) -> Vec<Toast> {
    self.toasts.lock().clone()
  }

  pub fn errors(&self) -> Vec<String> {
    self
      .toasts()
      .into_iter()
      .filter_map(|t| match t {
        Toast::Error(m) => Some(m),
        _ => None,
      })
      .collect()
  }

  pub fn successes(&self) -> Vec<String> {
    self
      .toasts()
      .into_iter()
      .filter_map(|t| match t {
        Toast::Success(m) => Some(m),
        _ => None,
      })
      .collect()
  }
}

impl Notifier for RecordingNotifier {
  fn success(&self, message: &str) {
    self.toasts.lock().push(Toast::Success(message.to_string()));
  }

  fn error(&self, message: &str) {
    self.toasts.lock().push(Toast::Error(message.to_string()));
  }

  fn dismiss_all(&self) {
    self.toasts.lock().push(Toast::DismissAll);
  }
}

#[derive(Default)]
pub struct RecordingNavigator {
  routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
  pub fn routes(&self) -> Vec<String> {
    self.routes.lock().clone()
  }
}

impl Navigator for RecordingNavigator {
  fn redirect(&self, route: &str) {
    self.routes.lock().push(route.to_string());
  }
}

// --- Fixtures ---

pub fn order(order_id: OrderId, status: OrderStatus, method: PaymentMethod, payment: PaymentStatus) -> Order {
  Order {
    order_id,
    order_status: status,
    payment_method: method,
    payment_status: payment,
    refund_status: RefundStatus::None,
    refund_at: None,
    address: format!("{} Lê Lợi, Quận 1, TP. Hồ Chí Minh", order_id),
    phone_number: "0901234567".to_string(),
    order_at: Some("14:30:00 05-01-2024".to_string()),
    total_price: Decimal::new(150_000, 0),
  }
}

pub fn cod_order(order_id: OrderId, status: OrderStatus) -> Order {
  order(order_id, status, PaymentMethod::Cod, PaymentStatus::Pending)
}

/// `count` pending COD orders with ids 1..=count.
pub fn pending_orders(count: i64) -> Vec<Order> {
  (1..=count).map(|id| cod_order(id, OrderStatus::Pending)).collect()
}

pub fn detail(order_detail_id: i64, book_name: &str, quantity: u32, price: i64) -> OrderDetail {
  OrderDetail {
    order_detail_id,
    book_name: book_name.to_string(),
    url_thumbnail: Some(format!("https://cdn.example.com/books/{}.jpg", order_detail_id)),
    quantity,
    total_price: Decimal::new(price, 0),
  }
}

pub struct Harness {
  pub api: Arc<MockOrderApi>,
  pub notifier: Arc<RecordingNotifier>,
  pub navigator: Arc<RecordingNavigator>,
  pub auth: AuthStore,
  pub view: OrderListView,
}

pub fn harness(orders: Vec<Order>) -> Harness {
  harness_with_auth(orders, Some("admin-token"))
}

pub fn harness_with_auth(orders: Vec<Order>, token: Option<&str>) -> Harness {
  let api = MockOrderApi::with_orders(orders);
  let notifier = Arc::new(RecordingNotifier::default());
  let navigator = Arc::new(RecordingNavigator::default());
  let auth = AuthStore::new(token.map(str::to_string));
  let store = OrderStore::new(api.clone(), auth.clone());
  let view = OrderListView::new(store, notifier.clone(), navigator.clone());
  Harness {
    api,
    notifier,
    navigator,
    auth,
    view,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
