//! Integration tests for the REST front-end.

use std::sync::{Arc, OnceLock};

use adapters::{InMemoryNotificationService, InMemoryOrderRepository, SentNotification};
use api::routes::orders::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            metrics_exporter_prometheus::PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

type TestState = Arc<AppState<InMemoryOrderRepository, InMemoryNotificationService>>;

fn setup() -> (axum::Router, InMemoryNotificationService, TestState) {
    let repository = InMemoryOrderRepository::new();
    let notifier = InMemoryNotificationService::new();
    let state = api::create_state(repository, notifier.clone());
    let app = api::create_app(state.clone(), get_metrics_handle());
    (app, notifier, state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn widget_order_body() -> serde_json::Value {
    serde_json::json!({
        "customer_name": "Ana",
        "customer_email": "ana@x.com",
        "items": [{
            "product_id": "P1",
            "product_name": "Widget",
            "unit_price_cents": 1000,
            "quantity": 2
        }]
    })
}

async fn create_widget_order(app: &axum::Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/orders", widget_order_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}

async fn patch_status(
    app: &axum::Router,
    order_id: &str,
    status: &str,
) -> axum::response::Response {
    app.clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/orders/{order_id}/status"),
            serde_json::json!({ "status": status }),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn create_order_returns_pending_order_with_total() {
    let (app, _, _) = setup();

    let json = create_widget_order(&app).await;

    assert_eq!(json["customer_name"], "Ana");
    assert_eq!(json["customer_email"], "ana@x.com");
    assert_eq!(json["total_cents"], 2000);
    assert_eq!(json["status"], "Pending");
    assert!(json["created_at"].as_str().is_some());
    assert!(json["updated_at"].is_null());
    assert_eq!(json["items"][0]["product_id"], "P1");
    assert_eq!(json["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn create_then_get_roundtrips() {
    let (app, _, _) = setup();

    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/orders/{order_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json, created);
}

#[tokio::test]
async fn create_with_blank_name_is_bad_request() {
    let (app, _, _) = setup();

    let mut body = widget_order_body();
    body["customer_name"] = serde_json::json!("  ");

    let response = app
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_items_is_bad_request() {
    let (app, _, _) = setup();

    let mut body = widget_order_body();
    body["items"] = serde_json::json!([]);

    let response = app
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_zero_quantity_is_bad_request() {
    let (app, _, _) = setup();

    let mut body = widget_order_body();
    body["items"][0]["quantity"] = serde_json::json!(0);

    let response = app
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("quantity"));
}

#[tokio::test]
async fn get_unknown_order_is_not_found() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_with_malformed_id_is_bad_request() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_all_created_orders() {
    let (app, _, _) = setup();

    create_widget_order(&app).await;
    create_widget_order(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn confirm_pending_order_sets_status_and_updated_at() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = patch_status(&app, order_id, "confirmed").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "Confirmed");
    assert!(json["updated_at"].as_str().is_some());
}

#[tokio::test]
async fn confirming_twice_is_a_conflict() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    patch_status(&app, order_id, "Confirmed").await;
    let response = patch_status(&app, order_id, "Confirmed").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = read_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("Confirmed"));
    assert!(message.contains("confirm"));
}

#[tokio::test]
async fn cancelling_delivered_order_is_a_conflict() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    patch_status(&app, order_id, "Confirmed").await;
    patch_status(&app, order_id, "Delivered").await;
    let response = patch_status(&app, order_id, "Cancelled").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancellation_emits_exactly_one_notification() {
    let (app, notifier, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = patch_status(&app, order_id, "Cancelled").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cancellations: Vec<_> = notifier
        .sent()
        .await
        .into_iter()
        .filter(|n| matches!(n, SentNotification::Cancellation { .. }))
        .collect();
    assert_eq!(cancellations.len(), 1);
    match &cancellations[0] {
        SentNotification::Cancellation { email, order_id: id } => {
            assert_eq!(email, "ana@x.com");
            assert_eq!(id.to_string(), order_id);
        }
        other => panic!("unexpected notification: {other:?}"),
    }
}

#[tokio::test]
async fn pending_is_rejected_as_update_target() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = patch_status(&app, order_id, "Pending").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_status_name_is_bad_request() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = patch_status(&app, order_id, "Shipped").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_on_unknown_order_is_not_found() {
    let (app, _, _) = setup();

    let response = patch_status(
        &app,
        "00000000-0000-0000-0000-000000000000",
        "Confirmed",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_names_are_case_insensitive() {
    let (app, _, _) = setup();
    let created = create_widget_order(&app).await;
    let order_id = created["id"].as_str().unwrap();

    let response = patch_status(&app, order_id, "CONFIRMED").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = patch_status(&app, order_id, "delivered").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "Delivered");
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
