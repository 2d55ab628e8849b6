// order_admin/src/models/order_detail.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderDetailId = i64;

/// One line item of an order, only loaded for the expanded row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
  pub order_detail_id: OrderDetailId,
  pub book_name: String,
  #[serde(default)]
  pub url_thumbnail: Option<String>,
  pub quantity: u32,
  pub total_price: Decimal,
}
