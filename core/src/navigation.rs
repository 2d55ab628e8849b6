// order_admin/src/navigation.rs

/// Route unauthenticated users are sent to.
pub const LOGIN_ROUTE: &str = "/login";

pub trait Navigator: Send + Sync {
  fn redirect(&self, route: &str);
}
