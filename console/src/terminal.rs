// order_admin_console/src/terminal.rs

//! Terminal front end: toasts and redirects as printed lines, and the order
//! list screen as plain text.

use order_admin::labels::{self, Label};
use order_admin::view::{ActionButton, DetailsPanel, OrderListPage, OrderListScreen, OrderRow};
use order_admin::{ActionTone, Navigator, Notifier, LOGIN_ROUTE};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

pub const OK_PREFIX: &str = "[ok]";
pub const ERROR_PREFIX: &str = "[error]";

pub fn toast_line(prefix: &str, message: &str) -> String {
  format!("{} {}", prefix, message)
}

/// Prints toasts to stdout as they arrive.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
  fn success(&self, message: &str) {
    println!("{}", toast_line(OK_PREFIX, message));
  }

  fn error(&self, message: &str) {
    println!("{}", toast_line(ERROR_PREFIX, message));
  }

  fn dismiss_all(&self) {
    // Printed lines cannot be taken back.
    tracing::trace!("dismiss_all is a no-op on the terminal");
  }
}

/// Remembers whether the page asked to leave; the session ends when it has.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
  redirected: AtomicBool,
}

impl TerminalNavigator {
  pub fn is_redirected(&self) -> bool {
    self.redirected.load(Ordering::SeqCst)
  }
}

impl Navigator for TerminalNavigator {
  fn redirect(&self, route: &str) {
    if route == LOGIN_ROUTE {
      println!("Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại ({}).", route);
    } else {
      println!("Chuyển hướng tới {}", route);
    }
    self.redirected.store(true, Ordering::SeqCst);
  }
}

pub const HELP: &str = "\
Lệnh:
  show                     vẽ lại bảng
  refresh                  tải lại trang hiện tại
  page <n> | next | prev   chuyển trang
  filter <STATUS|all>      lọc theo trạng thái
  details <orderId>        xem / ẩn chi tiết đơn hàng
  set <orderId> <STATUS>   chuyển trạng thái đơn hàng
  reason <text>            nhập lý do từ chối
  confirm | cancel         xác nhận / huỷ từ chối
  help | quit";

pub fn render_screen(screen: &OrderListScreen) -> String {
  match screen {
    OrderListScreen::Loading => labels::LOADING_ORDERS.to_string(),
    OrderListScreen::Ready(page) => render_page(page),
  }
}

fn render_page(page: &OrderListPage) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Bộ lọc: {} [{}]", page.filter.label(), page.filter);

  if page.rows.is_empty() {
    let _ = writeln!(out, "{}", labels::NO_ORDERS);
  }
  for row in &page.rows {
    render_row(&mut out, row);
  }

  if let Some(pagination) = page.pagination {
    let _ = writeln!(
      out,
      "{} Trang {}/{} {}",
      if pagination.prev_disabled { " " } else { "<" },
      pagination.current_page,
      pagination.total_pages,
      if pagination.next_disabled { " " } else { ">" },
    );
  }

  if let Some(modal) = &page.reject_modal {
    let _ = writeln!(
      out,
      "Từ chối đơn #{} | lý do ({}/{}{}): {}",
      modal.order_id,
      modal.char_count,
      modal.max_chars,
      if modal.at_limit { ", đã đủ" } else { "" },
      modal.cause
    );
    let _ = writeln!(out, "  reason <text> | confirm | cancel");
  }
  out.trim_end().to_string()
}

fn render_row(out: &mut String, row: &OrderRow) {
  let _ = writeln!(
    out,
    "#{} | {} | {} / {} | {} ({}) | {} | {} | {} | {}",
    row.order_id,
    row.status_label,
    row.payment_method_label,
    row.payment_status_label,
    row.refund_status_label,
    row.refund_at,
    row.address,
    row.phone_number,
    row.order_at,
    row.total_price,
  );

  let actions: Vec<String> = row.actions.iter().map(render_action).collect();
  if actions.is_empty() {
    let _ = writeln!(out, "    [{}]", row.details_toggle_label);
  } else {
    let _ = writeln!(out, "    {}  [{}]", actions.join("  "), row.details_toggle_label);
  }

  match &row.details {
    None => {}
    Some(DetailsPanel::Loading) => {
      let _ = writeln!(out, "      {}", labels::LOADING_DETAILS);
    }
    Some(DetailsPanel::Empty) => {
      let _ = writeln!(out, "      {}", labels::NO_ORDER_DETAILS);
    }
    Some(DetailsPanel::Items(items)) => {
      for item in items {
        let _ = writeln!(
          out,
          "      {} x{} | {} | {}",
          item.book_name,
          item.quantity,
          item.total_price,
          item.thumbnail_caption()
        );
      }
    }
  }
}

fn render_action(action: &ActionButton) -> String {
  let marker = match action.tone {
    ActionTone::Approve => "+",
    ActionTone::Cancel => "x",
  };
  if action.disabled {
    format!("({} {} {}: khoá)", marker, action.label, action.to_status)
  } else {
    format!("[{} {} {}]", marker, action.label, action.to_status)
  }
}
