// order_admin/src/store/mod.rs

//! Client-side state stores shared between the view and the request layer.

pub mod auth;
pub mod order_store;
pub mod shared;

pub use auth::{AuthState, AuthStore};
pub use order_store::{OrderState, OrderStore};
pub use shared::StoreData;
