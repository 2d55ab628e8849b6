// order_admin/src/notify.rs

//! Transient toast notifications.

/// Surface for short-lived success/error messages.
pub trait Notifier: Send + Sync {
  fn success(&self, message: &str);

  fn error(&self, message: &str);

  /// Removes every toast currently on screen. Called before an error toast so
  /// a burst of failures does not stack up.
  fn dismiss_all(&self);
}
