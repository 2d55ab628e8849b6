// order_admin/src/view/render.rs

//! What the order list page shows, as plain data. Front ends turn an
//! [`OrderListScreen`] into pixels or text; nothing here knows how.

use super::order_list::OrderListView;
use super::state::{ViewState, REJECT_CAUSE_MAX_CHARS};
use crate::format::{format_order_at, format_price, truncate_address};
use crate::labels::{self, Label};
use crate::models::{Order, OrderDetail, OrderDetailId, OrderId, OrderStatus, StatusFilter};
use crate::store::OrderState;
use crate::transitions::ActionTone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderListScreen {
  /// The order list is being fetched; nothing else is shown.
  Loading,
  Ready(OrderListPage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListPage {
  pub filter: StatusFilter,
  pub filter_options: Vec<FilterOption>,
  /// Empty means the "no orders" notice is shown instead of the table.
  pub rows: Vec<OrderRow>,
  /// Only present alongside a non-empty table.
  pub pagination: Option<Pagination>,
  pub reject_modal: Option<RejectModal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
  pub filter: StatusFilter,
  pub label: &'static str,
  pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
  pub order_id: OrderId,
  pub status: OrderStatus,
  pub status_label: &'static str,
  pub payment_method_label: &'static str,
  pub payment_status_label: &'static str,
  pub refund_status_label: &'static str,
  pub refund_at: String,
  pub address: String,
  pub phone_number: String,
  pub order_at: String,
  pub total_price: String,
  pub details_toggle_label: &'static str,
  pub actions: Vec<ActionButton>,
  /// Present on the expanded row only.
  pub details: Option<DetailsPanel>,
}

impl OrderRow {
  pub fn action(&self, to_status: OrderStatus) -> Option<&ActionButton> {
    self.actions.iter().find(|a| a.to_status == to_status)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
  pub to_status: OrderStatus,
  pub label: &'static str,
  pub tone: ActionTone,
  pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsPanel {
  Loading,
  Empty,
  Items(Vec<DetailRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
  pub order_detail_id: OrderDetailId,
  /// Thumbnail URL, or `None` when the "no image" caption is shown.
  pub thumbnail: Option<String>,
  pub book_name: String,
  pub quantity: u32,
  pub total_price: String,
}

impl DetailRow {
  pub fn thumbnail_caption(&self) -> &str {
    self.thumbnail.as_deref().unwrap_or(labels::NO_THUMBNAIL)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub current_page: u32,
  pub total_pages: u32,
  pub prev_disabled: bool,
  pub next_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectModal {
  pub order_id: OrderId,
  pub cause: String,
  pub char_count: usize,
  pub max_chars: usize,
  pub at_limit: bool,
}

impl OrderListView {
  pub fn render(&self) -> OrderListScreen {
    let store_state = self.store().state().read();
    render_order_list(&store_state, self.state())
  }
}

/// Builds the screen for the given store and view state.
pub fn render_order_list(store: &OrderState, view: &ViewState) -> OrderListScreen {
  if store.loading {
    return OrderListScreen::Loading;
  }

  let filter_options = std::iter::once(StatusFilter::ALL)
    .chain(OrderStatus::ALL.into_iter().map(StatusFilter::only))
    .map(|filter| FilterOption {
      filter,
      label: filter.label(),
      selected: filter == store.order_status_filter,
    })
    .collect();

  let rows: Vec<OrderRow> = store.orders.iter().map(|order| render_row(order, store, view)).collect();

  let pagination = (!rows.is_empty()).then(|| {
    let total_pages = store.total_pages.max(1);
    let current_page = store.current_page.clamp(1, total_pages);
    Pagination {
      current_page,
      total_pages,
      prev_disabled: current_page == 1,
      next_disabled: current_page == total_pages,
    }
  });

  let reject_modal = view.reject_draft.as_ref().map(|draft| RejectModal {
    order_id: draft.order_id,
    cause: draft.cause().to_string(),
    char_count: draft.char_count(),
    max_chars: REJECT_CAUSE_MAX_CHARS,
    at_limit: draft.is_at_limit(),
  });

  OrderListScreen::Ready(OrderListPage {
    filter: store.order_status_filter,
    filter_options,
    rows,
    pagination,
    reject_modal,
  })
}

fn render_row(order: &Order, store: &OrderState, view: &ViewState) -> OrderRow {
  let expanded = view.selected_order_id == Some(order.order_id);

  let actions = order
    .order_status
    .next_actions()
    .iter()
    .map(|action| ActionButton {
      to_status: action.to_status,
      label: action.label,
      tone: action.tone(),
      disabled: !action.is_enabled_for(order),
    })
    .collect();

  OrderRow {
    order_id: order.order_id,
    status: order.order_status,
    status_label: order.order_status.label(),
    payment_method_label: order.payment_method.label(),
    payment_status_label: order.payment_status.label(),
    refund_status_label: order.refund_status.label(),
    refund_at: match order.refund_at.as_deref() {
      Some(refund_at) if !refund_at.is_empty() => format_order_at(Some(refund_at)),
      _ => labels::NO_REFUND_TIME.to_string(),
    },
    address: truncate_address(&order.address),
    phone_number: order.phone_number.clone(),
    order_at: format_order_at(order.order_at.as_deref()),
    total_price: format_price(order.total_price),
    details_toggle_label: if expanded { labels::HIDE_DETAILS } else { labels::SHOW_DETAILS },
    actions,
    details: expanded.then(|| render_details(store, order.order_id)),
  }
}

fn render_details(store: &OrderState, order_id: OrderId) -> DetailsPanel {
  if store.details_order_id != Some(order_id) {
    return DetailsPanel::Empty;
  }
  if store.loading_details {
    return DetailsPanel::Loading;
  }
  if store.order_details.is_empty() {
    return DetailsPanel::Empty;
  }
  DetailsPanel::Items(store.order_details.iter().map(render_detail).collect())
}

fn render_detail(detail: &OrderDetail) -> DetailRow {
  DetailRow {
    order_detail_id: detail.order_detail_id,
    thumbnail: detail.url_thumbnail.clone().filter(|u| !u.trim().is_empty()),
    book_name: detail.book_name.clone(),
    quantity: detail.quantity,
    total_price: format_price(detail.total_price),
  }
}
