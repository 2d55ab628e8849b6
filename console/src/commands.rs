// order_admin_console/src/commands.rs

//! Line commands typed at the console and how each one drives the view.

use crate::errors::{AppError, Result};
use order_admin::{OrderId, OrderListView, OrderStatus, StatusFilter};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Show,
  Refresh,
  Page(u32),
  Next,
  Prev,
  Filter(StatusFilter),
  Details(OrderId),
  Set { order_id: OrderId, to_status: OrderStatus },
  Reason(String),
  Confirm,
  Cancel,
  Help,
  Quit,
}

/// What the loop does after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Render,
  Help,
  Quit,
}

fn invalid(message: impl Into<String>) -> AppError {
  AppError::Command(message.into())
}

fn parse_order_id(raw: Option<&str>) -> Result<OrderId> {
  let raw = raw.ok_or_else(|| invalid("missing order id"))?;
  raw
    .parse::<OrderId>()
    .map_err(|e| invalid(format!("invalid order id '{}': {}", raw, e)))
}

impl FromStr for Command {
  type Err = AppError;

  fn from_str(line: &str) -> Result<Self> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
      Some((word, rest)) => (word, rest.trim()),
      None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match word.to_ascii_lowercase().as_str() {
      "show" | "ls" => Command::Show,
      "refresh" => Command::Refresh,
      "page" => {
        let raw = args.next().ok_or_else(|| invalid("missing page number"))?;
        let page = raw
          .parse::<u32>()
          .map_err(|e| invalid(format!("invalid page number '{}': {}", raw, e)))?;
        Command::Page(page)
      }
      "next" => Command::Next,
      "prev" => Command::Prev,
      "filter" => Command::Filter(rest.parse::<StatusFilter>().map_err(|e| invalid(e.to_string()))?),
      "details" => Command::Details(parse_order_id(args.next())?),
      "set" => {
        let order_id = parse_order_id(args.next())?;
        let raw = args.next().ok_or_else(|| invalid("missing target status"))?;
        let to_status = raw.parse::<OrderStatus>().map_err(|e| invalid(e.to_string()))?;
        Command::Set { order_id, to_status }
      }
      // The reason keeps its inner spacing.
      "reason" => Command::Reason(rest.to_string()),
      "confirm" => Command::Confirm,
      "cancel" => Command::Cancel,
      "help" | "?" => Command::Help,
      "quit" | "exit" => Command::Quit,
      "" => return Err(invalid("empty command")),
      other => return Err(invalid(format!("unknown command '{}' (try 'help')", other))),
    };

    if args.next().is_some() && !matches!(command, Command::Reason(_) | Command::Filter(_)) {
      return Err(invalid(format!("too many arguments for '{}'", word)));
    }
    Ok(command)
  }
}

/// Runs one command against the view. Errors are about the command itself;
/// failed requests are reported by the view through its notifier.
pub async fn execute(view: &mut OrderListView, command: Command) -> Result<Flow> {
  debug!(?command, "Executing console command.");
  match command {
    Command::Show => {}
    Command::Refresh => view.refresh().await,
    Command::Page(page) => {
      let total_pages = view.store().total_pages();
      if page < 1 || page > total_pages {
        return Err(invalid(format!("page {} is outside 1..={}", page, total_pages)));
      }
      view.handle_page_change(page).await;
    }
    Command::Next => {
      let current = view.store().current_page();
      view.handle_page_change(current.saturating_add(1)).await;
    }
    Command::Prev => {
      let current = view.store().current_page();
      view.handle_page_change(current.saturating_sub(1)).await;
    }
    Command::Filter(filter) => view.handle_status_filter_change(filter).await,
    Command::Details(order_id) => {
      ensure_listed(view, order_id)?;
      view.handle_view_details(order_id).await;
    }
    Command::Set { order_id, to_status } => {
      let from_status = offered_transition(view, order_id, to_status)?;
      view.handle_status_change(order_id, from_status, to_status).await;
    }
    Command::Reason(text) => {
      if !view.state().is_reject_modal_open() {
        return Err(invalid("no rejection in progress; use 'set <orderId> REJECTED' first"));
      }
      view.set_reject_cause(&text);
    }
    Command::Confirm => {
      if !view.state().is_reject_modal_open() {
        return Err(invalid("no rejection in progress"));
      }
      view.handle_reject_order().await;
    }
    Command::Cancel => view.close_reject_modal(),
    Command::Help => return Ok(Flow::Help),
    Command::Quit => return Ok(Flow::Quit),
  }
  Ok(Flow::Render)
}

fn ensure_listed(view: &OrderListView, order_id: OrderId) -> Result<()> {
  if view.store().state().read().order(order_id).is_some() {
    Ok(())
  } else {
    Err(invalid(format!("order #{} is not on this page", order_id)))
  }
}

/// The order's current status, provided the row offers an enabled button
/// towards `to_status`.
fn offered_transition(view: &OrderListView, order_id: OrderId, to_status: OrderStatus) -> Result<OrderStatus> {
  let order = view
    .store()
    .state()
    .read()
    .order(order_id)
    .cloned()
    .ok_or_else(|| invalid(format!("order #{} is not on this page", order_id)))?;

  let action = order
    .order_status
    .action_towards(to_status)
    .ok_or_else(|| invalid(format!("{} -> {} is not offered for order #{}", order.order_status, to_status, order_id)))?;
  if !action.is_enabled_for(&order) {
    return Err(invalid(format!(
      "order #{} cannot be rejected until its card payment succeeds",
      order_id
    )));
  }
  Ok(order.order_status)
}
