// order_admin/src/store/auth.rs
use super::shared::StoreData;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct AuthState {
  pub token: Option<String>,
}

impl AuthState {
  pub fn is_authenticated(&self) -> bool {
    self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
  }
}

/// Holds the bearer token used against the order service. Signing in is
/// somebody else's job; this store only answers "are we authenticated" and
/// forgets the token when the service rejects it.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
  state: StoreData<AuthState>,
}

impl AuthStore {
  pub fn new(token: Option<String>) -> Self {
    Self {
      state: StoreData::new(AuthState { token }),
    }
  }

  pub fn is_authenticated(&self) -> bool {
    self.state.read().is_authenticated()
  }

  pub fn token(&self) -> Option<String> {
    self.state.read().token.clone()
  }

  pub fn sign_in(&self, token: impl Into<String>) {
    self.state.write().token = Some(token.into());
  }

  pub fn sign_out(&self) {
    let had_token = self.state.write().token.take().is_some();
    if had_token {
      info!("Order service rejected the session token; signed out.");
    }
  }
}
