// order_admin/src/models/mod.rs

//! Wire-level data structures exchanged with the remote order service.

pub mod order;
pub mod order_detail;
pub mod page;

pub use order::{Order, OrderId, OrderStatus, PaymentMethod, PaymentStatus, RefundStatus, UnknownVariant};
pub use order_detail::{OrderDetail, OrderDetailId};
pub use page::{OrderPage, OrderQuery, StatusFilter, StatusUpdate, PAGE_SIZE};
