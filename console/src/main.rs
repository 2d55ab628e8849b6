// order_admin_console/src/main.rs

mod commands;
mod config;
mod errors;
mod terminal;

use crate::commands::{Command, Flow};
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::terminal::{render_screen, toast_line, TerminalNavigator, TerminalNotifier, ERROR_PREFIX, HELP};

use order_admin::{AuthStore, HttpOrderApi, OrderListView, OrderStore};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn log_filter() -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy()
}

#[tokio::main]
async fn main() -> AppResult<()> {
  // Logs go to stderr so they never interleave with the table on stdout.
  tracing_subscriber::fmt()
    .with_env_filter(log_filter()) // INFO unless RUST_LOG says otherwise
    .with_writer(std::io::stderr)
    .init();

  tracing::info!("Starting order admin console...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    e
  })?;

  let auth = AuthStore::new(app_config.api_token.clone());
  let api = HttpOrderApi::new(&app_config.api_base_url, auth.clone(), app_config.request_timeout)?;
  let store = OrderStore::new(Arc::new(api), auth);
  let navigator = Arc::new(TerminalNavigator::default());
  let mut view = OrderListView::new(store, Arc::new(TerminalNotifier), navigator.clone());

  view.mount().await;
  if navigator.is_redirected() {
    return Ok(());
  }
  println!("{}", render_screen(&view.render()));
  println!("Gõ 'help' để xem danh sách lệnh.");

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  loop {
    print!("> ");
    std::io::stdout().flush()?;

    let Some(line) = lines.next_line().await? else {
      break; // EOF
    };
    if line.trim().is_empty() {
      continue;
    }

    let outcome = match line.parse::<Command>() {
      Ok(command) => commands::execute(&mut view, command).await,
      Err(e) => Err(e),
    };
    match outcome {
      Ok(Flow::Render) => println!("{}", render_screen(&view.render())),
      Ok(Flow::Help) => println!("{}", HELP),
      Ok(Flow::Quit) => break,
      Err(e) => println!("{}", toast_line(ERROR_PREFIX, &e.to_string())),
    }

    if navigator.is_redirected() {
      break;
    }
  }

  tracing::info!("Order admin console stopped.");
  Ok(())
}
