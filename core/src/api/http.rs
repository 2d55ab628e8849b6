// order_admin/src/api/http.rs

//! `OrderApi` over the order service's JSON admin endpoints.

use super::OrderApi;
use crate::error::{AdminError, AdminResult};
use crate::models::{OrderDetail, OrderId, OrderPage, OrderQuery, StatusUpdate};
use crate::store::AuthStore;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct HttpOrderApi {
  base_url: Url,
  http: reqwest::Client,
  auth: AuthStore,
}

impl HttpOrderApi {
  /// `base_url` is the service root; the admin endpoints live under `admin/orders`.
  pub fn new(base_url: &str, auth: AuthStore, timeout: Duration) -> AdminResult<Self> {
    let http = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      base_url: parse_base_url(base_url)?,
      http,
      auth,
    })
  }

  fn endpoint(&self, segments: &[&str]) -> AdminResult<Url> {
    endpoint_url(&self.base_url, segments)
  }

  fn request(&self, method: Method, url: Url) -> RequestBuilder {
    let builder = self.http.request(method, url);
    match self.auth.token() {
      Some(token) => builder.bearer_auth(token),
      None => builder,
    }
  }

  async fn send(&self, builder: RequestBuilder) -> AdminResult<String> {
    let resp = builder.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if status == StatusCode::UNAUTHORIZED {
      warn!("Order service answered 401 Unauthorized.");
      return Err(AdminError::Unauthorized);
    }
    if !status.is_success() {
      let message = error_message(&text);
      warn!(status = status.as_u16(), message = ?message, "Order service refused the request.");
      return Err(AdminError::Server {
        status: status.as_u16(),
        message,
      });
    }
    Ok(text)
  }

  async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AdminResult<T> {
    let text = self.send(builder).await?;
    Ok(serde_json::from_str(&text)?)
  }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
  #[instrument(skip(self), fields(index = query.index, size = query.size, filter = %query.order_status))]
  async fn fetch_orders(&self, query: &OrderQuery) -> AdminResult<OrderPage> {
    let url = orders_url(&self.base_url, query)?;
    debug!(%url, "Fetching order page.");
    self.send_json(self.request(Method::GET, url)).await
  }

  #[instrument(skip(self, update), fields(order_id = update.order_id, from = %update.from_status, to = %update.to_status))]
  async fn update_order_status(&self, update: &StatusUpdate) -> AdminResult<()> {
    let order_id = update.order_id.to_string();
    let url = self.endpoint(&["admin", "orders", &order_id, "status"])?;
    self.send(self.request(Method::PUT, url).json(update)).await?;
    Ok(())
  }

  #[instrument(skip(self))]
  async fn fetch_order_details(&self, order_id: OrderId) -> AdminResult<Vec<OrderDetail>> {
    let order_id = order_id.to_string();
    let url = self.endpoint(&["admin", "orders", &order_id, "details"])?;
    self.send_json(self.request(Method::GET, url)).await
  }
}

fn parse_base_url(raw: &str) -> AdminResult<Url> {
  let url = Url::parse(raw.trim()).map_err(|e| AdminError::Config(format!("Invalid order service URL '{}': {}", raw, e)))?;
  if url.cannot_be_a_base() {
    return Err(AdminError::Config(format!("Order service URL '{}' cannot be a base URL", raw)));
  }
  Ok(url)
}

fn endpoint_url(base: &Url, segments: &[&str]) -> AdminResult<Url> {
  let mut url = base.clone();
  url
    .path_segments_mut()
    .map_err(|_| AdminError::Config(format!("Order service URL '{}' cannot be a base URL", base)))?
    .pop_if_empty()
    .extend(segments);
  Ok(url)
}

/// `admin/orders?index=..&size=..`, plus `orderStatus` unless listing every status.
fn orders_url(base: &Url, query: &OrderQuery) -> AdminResult<Url> {
  let mut url = endpoint_url(base, &["admin", "orders"])?;
  {
    let mut pairs = url.query_pairs_mut();
    pairs
      .append_pair("index", &query.index.to_string())
      .append_pair("size", &query.size.to_string());
    if !query.order_status.is_all() {
      pairs.append_pair("orderStatus", query.order_status.as_query_value());
    }
  }
  Ok(url)
}

/// Pulls a human-readable message out of an error body (`message`, or `error`).
fn error_message(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
  }

  serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.message.or(b.error))
    .map(|m| m.trim().to_string())
    .filter(|m| !m.is_empty())
}
