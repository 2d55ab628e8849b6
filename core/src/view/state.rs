// order_admin/src/view/state.rs
use crate::models::{OrderId, OrderStatus};

/// Longest rejection reason the modal accepts, in characters.
pub const REJECT_CAUSE_MAX_CHARS: usize = 500;

/// The rejection being composed in the reject modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectDraft {
  pub order_id: OrderId,
  pub from_status: OrderStatus,
  cause: String,
}

impl RejectDraft {
  pub fn new(order_id: OrderId, from_status: OrderStatus) -> Self {
    Self {
      order_id,
      from_status,
      cause: String::new(),
    }
  }

  pub fn cause(&self) -> &str {
    &self.cause
  }

  /// Replaces the reason, keeping at most [`REJECT_CAUSE_MAX_CHARS`] characters.
  pub fn set_cause(&mut self, text: &str) {
    self.cause = match text.char_indices().nth(REJECT_CAUSE_MAX_CHARS) {
      Some((cut, _)) => text[..cut].to_string(),
      None => text.to_string(),
    };
  }

  pub fn char_count(&self) -> usize {
    self.cause.chars().count()
  }

  pub fn is_at_limit(&self) -> bool {
    self.char_count() == REJECT_CAUSE_MAX_CHARS
  }

  pub fn is_blank(&self) -> bool {
    self.cause.trim().is_empty()
  }
}

/// UI state owned by the page itself rather than the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
  /// The one expanded row, if any.
  pub selected_order_id: Option<OrderId>,
  /// Present exactly while the reject modal is open.
  pub reject_draft: Option<RejectDraft>,
}

impl ViewState {
  pub fn is_reject_modal_open(&self) -> bool {
    self.reject_draft.is_some()
  }
}
