// order_admin_console/src/errors.rs

use order_admin::AdminError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  /// A line that does not parse, or a command the current page cannot honour.
  #[error("Invalid Command: {0}")]
  Command(String),

  #[error("Order Admin Error: {source}")]
  Admin {
    #[from]
    source: AdminError,
  },

  #[error("Terminal IO Error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
