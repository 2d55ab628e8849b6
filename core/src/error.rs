// order_admin/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
  /// Rejected locally before anything reached the order service.
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Not authenticated against the order service")]
  Unauthorized,

  #[error("Order service responded with status {status}{}", detail_suffix(.message))]
  Server { status: u16, message: Option<String> },

  #[error("Transport error talking to the order service: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Could not decode order service payload: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Client configuration error: {0}")]
  Config(String),

  #[error("Order service collaborator failed. Source: {source}")]
  Collaborator {
    #[source]
    source: AnyhowError,
  },
}

impl AdminError {
  /// Human-readable message suitable for a toast, when one was provided.
  ///
  /// Server errors only carry a message when the service put one in the
  /// response body; transport failures never do, so callers fall back to
  /// their own localized text.
  pub fn user_message(&self) -> Option<&str> {
    match self {
      AdminError::Validation(m) => Some(m.as_str()),
      AdminError::Server { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
      _ => None,
    }
  }

  pub fn is_unauthorized(&self) -> bool {
    matches!(self, AdminError::Unauthorized)
  }
}

// Lets custom OrderApi implementations use `anyhow` internally and still
// hand back an AdminError.
impl From<AnyhowError> for AdminError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<AdminError>() {
      Ok(admin_err) => admin_err,
      Err(err) => AdminError::Collaborator { source: err },
    }
  }
}

fn detail_suffix(message: &Option<String>) -> String {
  message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

pub type AdminResult<T, E = AdminError> = std::result::Result<T, E>;
