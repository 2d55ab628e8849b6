// order_admin/src/view/mod.rs

//! The order list page: local UI state, user-action handlers and the render model.

pub mod order_list;
pub mod render;
pub mod state;

pub use order_list::OrderListView;
pub use render::{
  render_order_list, ActionButton, DetailRow, DetailsPanel, FilterOption, OrderListPage, OrderListScreen, OrderRow,
  Pagination, RejectModal,
};
pub use state::{RejectDraft, ViewState, REJECT_CAUSE_MAX_CHARS};
