// order_admin/src/lib.rs

//! order_admin: a headless view model for an e-commerce order administration page.
//!
//! The page offers:
//!  - A paginated order list (ten per page) with a status filter.
//!  - Per-order status transitions from a fixed menu, with card-payment gating
//!    on rejections.
//!  - A "reject with reason" modal; blank reasons never reach the service.
//!  - An expandable order-detail sub-table, one row at a time.
//!
//! The remote order service, toasts and navigation are collaborators behind
//! the [`OrderApi`], [`Notifier`] and [`Navigator`] traits. [`HttpOrderApi`]
//! talks to the service over HTTP.

pub mod api;
pub mod error;
pub mod format;
pub mod labels;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod store;
pub mod transitions;
pub mod view;

// --- Re-exports for the Public API ---

pub use crate::api::{HttpOrderApi, OrderApi};
pub use crate::error::{AdminError, AdminResult};
pub use crate::models::{
  Order, OrderDetail, OrderId, OrderPage, OrderQuery, OrderStatus, PaymentMethod, PaymentStatus, RefundStatus,
  StatusFilter, StatusUpdate, PAGE_SIZE,
};
pub use crate::navigation::{Navigator, LOGIN_ROUTE};
pub use crate::notify::Notifier;
pub use crate::store::{AuthStore, OrderState, OrderStore, StoreData};
pub use crate::transitions::{can_reject, ActionTone, StatusAction};
pub use crate::view::{OrderListScreen, OrderListView, RejectDraft, ViewState};

/*
    Typical wiring:
    1. Build an `AuthStore` from whatever session token the host has.
    2. Build an `OrderApi` (`HttpOrderApi::new(base_url, auth.clone(), timeout)`).
    3. `OrderStore::new(Arc::new(api), auth)`.
    4. `OrderListView::new(store, notifier, navigator)` and `view.mount().await`.
    5. Feed user actions to the `handle_*` methods and draw `view.render()`
       after each one.
*/
