// tests/store_tests.rs
mod common;

use common::*;
use order_admin::{
  AdminError, AuthStore, OrderQuery, OrderStatus, OrderStore, StatusFilter, StatusUpdate, PAGE_SIZE,
};
use std::sync::Arc;
use std::time::Duration;

fn store_over(api: Arc<MockOrderApi>) -> (OrderStore, AuthStore) {
  let auth = AuthStore::new(Some("admin-token".to_string()));
  (OrderStore::new(api, auth.clone()), auth)
}

#[tokio::test]
async fn test_fresh_store_starts_on_page_one_unfiltered() {
  setup_tracing();
  let (store, _) = store_over(MockOrderApi::with_orders(vec![]));
  let state = store.snapshot();
  assert_eq!(state.current_page, 1);
  assert_eq!(state.total_pages, 0);
  assert_eq!(state.order_status_filter, StatusFilter::ALL);
  assert!(!state.loading && !state.loading_details);
}

#[tokio::test]
async fn test_fetch_orders_fills_page_and_pagination() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(25));
  let (store, _) = store_over(api.clone());

  store
    .fetch_orders(OrderQuery::page(3, StatusFilter::ALL))
    .await
    .expect("page 3 should load");

  let state = store.snapshot();
  assert_eq!(state.orders.len(), 5);
  assert_eq!(state.orders[0].order_id, 21);
  assert_eq!(state.current_page, 3);
  assert_eq!(state.total_pages, 3);
  assert!(!state.loading);
  assert_eq!(api.fetch_calls()[0].size, PAGE_SIZE);
}

#[tokio::test]
async fn test_fetch_orders_clamps_page_past_the_end() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(12));
  let (store, _) = store_over(api);

  store.fetch_orders(OrderQuery::page(9, StatusFilter::ALL)).await.unwrap();

  let state = store.snapshot();
  assert!(state.orders.is_empty());
  assert_eq!(state.total_pages, 2);
  assert_eq!(state.current_page, 2);
}

#[tokio::test]
async fn test_fetch_orders_failure_clears_loading_and_keeps_old_rows() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(3));
  let (store, _) = store_over(api.clone());
  store.fetch_orders(OrderQuery::page(1, StatusFilter::ALL)).await.unwrap();

  api.fail_next_fetch(MockFailure::Server(Some("Dịch vụ đang bảo trì")));
  let err = store
    .fetch_orders(OrderQuery::page(1, StatusFilter::ALL))
    .await
    .unwrap_err();

  assert_eq!(err.user_message(), Some("Dịch vụ đang bảo trì"));
  let state = store.snapshot();
  assert!(!state.loading);
  assert_eq!(state.orders.len(), 3);
  assert!(state.error.is_some());
}

#[tokio::test]
async fn test_update_order_status_patches_loaded_order() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(2));
  let (store, _) = store_over(api.clone());
  store.fetch_orders(OrderQuery::page(1, StatusFilter::ALL)).await.unwrap();

  store
    .update_order_status(StatusUpdate::transition(2, OrderStatus::Pending, OrderStatus::InPreparation))
    .await
    .unwrap();

  let state = store.snapshot();
  assert_eq!(state.order(2).unwrap().order_status, OrderStatus::InPreparation);
  assert_eq!(state.order(1).unwrap().order_status, OrderStatus::Pending);
  assert_eq!(api.server_status_of(2), Some(OrderStatus::InPreparation));
}

#[tokio::test]
async fn test_refused_update_leaves_loaded_order_alone() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(1));
  let (store, _) = store_over(api.clone());
  store.fetch_orders(OrderQuery::page(1, StatusFilter::ALL)).await.unwrap();

  api.fail_next_update(MockFailure::Server(None));
  let err = store
    .update_order_status(StatusUpdate::transition(1, OrderStatus::Pending, OrderStatus::InPreparation))
    .await
    .unwrap_err();

  assert!(matches!(err, AdminError::Server { status: 409, message: None }));
  assert_eq!(err.user_message(), None);
  assert_eq!(store.snapshot().order(1).unwrap().order_status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_unauthorized_response_signs_out() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(1));
  let (store, auth) = store_over(api.clone());
  assert!(auth.is_authenticated());

  api.fail_next_fetch(MockFailure::Unauthorized);
  let err = store
    .fetch_orders(OrderQuery::page(1, StatusFilter::ALL))
    .await
    .unwrap_err();

  assert!(err.is_unauthorized());
  assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_fetch_details_then_clear() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(1));
  api.set_details(1, vec![detail(10, "Dế Mèn phiêu lưu ký", 2, 90_000)]);
  let (store, _) = store_over(api);

  store.fetch_order_details(1).await.unwrap();
  let state = store.snapshot();
  assert_eq!(state.details_order_id, Some(1));
  assert_eq!(state.order_details.len(), 1);
  assert!(!state.loading_details);

  store.clear_order_details();
  let state = store.snapshot();
  assert_eq!(state.details_order_id, None);
  assert!(state.order_details.is_empty());
}

#[tokio::test]
async fn test_detail_response_arriving_after_clear_is_ignored() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(1));
  api.set_details(1, vec![detail(10, "Tắt đèn", 1, 60_000)]);
  api.delay_details(Duration::from_millis(50));
  let (store, _) = store_over(api);

  let fetching = {
    let store = store.clone();
    tokio::spawn(async move { store.fetch_order_details(1).await })
  };
  tokio::time::sleep(Duration::from_millis(10)).await;
  assert!(store.snapshot().loading_details);
  store.clear_order_details();

  fetching.await.unwrap().unwrap();
  let state = store.snapshot();
  assert!(state.order_details.is_empty());
  assert_eq!(state.details_order_id, None);
  assert!(!state.loading_details);
}

#[tokio::test]
async fn test_only_the_latest_detail_request_lands() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(2));
  api.set_details(1, vec![detail(10, "Số đỏ", 1, 75_000)]);
  api.set_details(2, vec![detail(20, "Chí Phèo", 3, 120_000)]);
  api.delay_details(Duration::from_millis(20));
  let (store, _) = store_over(api);

  let (first, second) = tokio::join!(store.fetch_order_details(1), async {
    tokio::time::sleep(Duration::from_millis(5)).await;
    store.fetch_order_details(2).await
  });
  first.unwrap();
  second.unwrap();

  let state = store.snapshot();
  assert_eq!(state.details_order_id, Some(2));
  assert_eq!(state.order_details[0].book_name, "Chí Phèo");
}

#[tokio::test]
async fn test_failed_page_fetch_keeps_previous_page_and_filter() {
  setup_tracing();
  let mut orders = pending_orders(25);
  orders.extend((26..=28).map(|id| cod_order(id, OrderStatus::Delivered)));
  let api = MockOrderApi::with_orders(orders);
  let (store, _) = store_over(api.clone());
  store.fetch_orders(OrderQuery::page(1, StatusFilter::ALL)).await.unwrap();

  api.fail_next_fetch(MockFailure::Network("connection reset"));
  assert!(store.fetch_orders(OrderQuery::page(2, StatusFilter::ALL)).await.is_err());

  let state = store.snapshot();
  assert_eq!(state.current_page, 1);
  assert_eq!(state.orders[0].order_id, 1);

  api.fail_next_fetch(MockFailure::Server(None));
  let delivered = StatusFilter::only(OrderStatus::Delivered);
  assert!(store.fetch_orders(OrderQuery::page(1, delivered)).await.is_err());

  let state = store.snapshot();
  assert_eq!(state.order_status_filter, StatusFilter::ALL);
  assert!(state.orders.iter().all(|o| o.order_status == OrderStatus::Pending));
  assert!(!state.loading);
}

#[tokio::test]
async fn test_only_the_latest_list_request_lands() {
  setup_tracing();
  let api = MockOrderApi::with_orders(pending_orders(25));
  api.delay_fetch(1, Duration::from_millis(50));
  let (store, _) = store_over(api.clone());

  let slow = {
    let store = store.clone();
    tokio::spawn(async move { store.fetch_orders(OrderQuery::page(1, StatusFilter::ALL)).await })
  };
  tokio::time::sleep(Duration::from_millis(10)).await;
  let fast = store.clone();
  fast.fetch_orders(OrderQuery::page(2, StatusFilter::ALL)).await.unwrap();
  slow.await.unwrap().unwrap();

  let state = store.snapshot();
  assert_eq!(state.current_page, 2);
  assert_eq!(state.orders[0].order_id, 11);
  assert_eq!(state.orders.len(), 10);
  assert!(!state.loading);
  assert_eq!(api.fetch_calls().len(), 2);
}
