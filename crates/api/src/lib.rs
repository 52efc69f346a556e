//! REST front-end for the order service.
//!
//! A thin protocol adapter: handlers translate HTTP/JSON requests into
//! use-case calls and map use-case errors to status codes. Business rules
//! live entirely in the application and domain crates.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::ports::{NotificationService, OrderRepository};
use axum::Router;
use axum::routing::{get, patch, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R, N>(state: Arc<AppState<R, N>>, metrics_handle: PrometheusHandle) -> Router
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<R, N>))
        .route("/orders", get(routes::orders::list::<R, N>))
        .route("/orders/{id}", get(routes::orders::get_by_id::<R, N>))
        .route(
            "/orders/{id}/status",
            patch(routes::orders::update_status::<R, N>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wires the use cases to a repository and notifier and returns shared state.
pub fn create_state<R, N>(repository: R, notifier: N) -> Arc<AppState<R, N>>
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    use application::{CreateOrder, GetOrder, UpdateOrderStatus};

    Arc::new(AppState {
        create_order: CreateOrder::new(repository.clone(), notifier.clone()),
        get_order: GetOrder::new(repository.clone()),
        update_status: UpdateOrderStatus::new(repository.clone(), notifier),
        repository,
    })
}
