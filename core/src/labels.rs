// order_admin/src/labels.rs

//! Vietnamese UI text: enum labels, toast messages and fixed captions.

use crate::models::{OrderStatus, PaymentMethod, PaymentStatus, RefundStatus, StatusFilter};

/// Localized caption of a wire enum value.
pub trait Label {
  fn label(&self) -> &'static str;
}

impl Label for OrderStatus {
  fn label(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "Chờ duyệt",
      OrderStatus::Rejected => "Bị từ chối",
      OrderStatus::InPreparation => "Đang chuẩn bị hàng",
      OrderStatus::ReadyToShip => "Chuẩn bị giao",
      OrderStatus::Delivering => "Đang giao",
      OrderStatus::Delivered => "Đã giao",
      OrderStatus::Cancelled => "Đã huỷ",
      OrderStatus::FailedDelivery => "Giao thất bại",
      OrderStatus::Returned => "Đã hoàn hàng",
    }
  }
}

impl Label for PaymentMethod {
  fn label(&self) -> &'static str {
    match self {
      PaymentMethod::Card => "Thẻ",
      PaymentMethod::Cod => "Tiền mặt",
    }
  }
}

impl Label for PaymentStatus {
  fn label(&self) -> &'static str {
    match self {
      PaymentStatus::Success => "Thành công",
      PaymentStatus::Pending => "Chờ xử lý",
      PaymentStatus::Failed => "Thất bại",
    }
  }
}

impl Label for RefundStatus {
  fn label(&self) -> &'static str {
    match self {
      RefundStatus::None => "Không hoàn",
      RefundStatus::PendingRefund => "Chờ hoàn",
      RefundStatus::Refunded => "Đã hoàn",
      RefundStatus::FailedRefund => "Hoàn thất bại",
    }
  }
}

impl Label for StatusFilter {
  fn label(&self) -> &'static str {
    match self.status() {
      Some(status) => status.label(),
      None => ALL_STATUSES,
    }
  }
}

pub const ALL_STATUSES: &str = "Tất cả trạng thái";

pub const STATUS_UPDATED: &str = "Cập nhật trạng thái đơn hàng thành công!";
pub const STATUS_UPDATE_FAILED: &str = "Lỗi khi cập nhật trạng thái đơn hàng!";
pub const ORDER_REJECTED: &str = "Từ chối đơn hàng thành công!";
pub const ORDER_REJECT_FAILED: &str = "Lỗi khi từ chối đơn hàng!";
pub const REJECT_REASON_REQUIRED: &str = "Vui lòng nhập lý do từ chối!";
pub const DETAILS_FETCH_FAILED: &str = "Lỗi khi lấy chi tiết đơn hàng!";
pub const ORDERS_FETCH_FAILED: &str = "Lỗi khi tải danh sách đơn hàng!";

pub const SHOW_DETAILS: &str = "Xem chi tiết";
pub const HIDE_DETAILS: &str = "Ẩn chi tiết";
pub const NO_THUMBNAIL: &str = "Không có ảnh";
pub const NO_REFUND_TIME: &str = "-";
pub const CURRENCY_SUFFIX: &str = "VNĐ";

pub const LOADING_ORDERS: &str = "Đang tải danh sách đơn hàng...";
pub const LOADING_DETAILS: &str = "Đang tải chi tiết đơn hàng...";
pub const NO_ORDERS: &str = "Không có đơn hàng nào!";
pub const NO_ORDER_DETAILS: &str = "Không có chi tiết đơn hàng!";
