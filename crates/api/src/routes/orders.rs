//! Order lifecycle endpoints.

use std::sync::Arc;

use application::ports::{NotificationService, OrderRepository};
use application::{CreateOrder, CreateOrderCommand, GetOrder, ItemSpec, UpdateOrderStatus};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::OrderId;
use domain::{Money, Order, OrderStatus};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R, N> {
    pub create_order: CreateOrder<R, N>,
    pub get_order: GetOrder<R>,
    pub update_status: UpdateOrderStatus<R, N>,
    pub repository: R,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_cents: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        let items = order
            .items()
            .iter()
            .map(|item| OrderItemResponse {
                product_id: item.product_id().to_string(),
                product_name: item.product_name().to_string(),
                unit_price_cents: item.unit_price().cents(),
                quantity: item.quantity(),
            })
            .collect();

        Self {
            id: order.id().to_string(),
            customer_name: order.customer_name().to_string(),
            customer_email: order.customer_email().to_string(),
            total_cents: order.total_amount().cents(),
            status: order.status().to_string(),
            created_at: order.created_at().to_rfc3339(),
            updated_at: order.updated_at().map(|ts| ts.to_rfc3339()),
            items,
        }
    }
}

// -- Handlers --

/// POST /orders — create a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<R, N>(
    State(state): State<Arc<AppState<R, N>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError>
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    let items = req
        .items
        .into_iter()
        .map(|item| {
            ItemSpec::new(
                item.product_id,
                item.product_name,
                Money::from_cents(item.unit_price_cents),
                item.quantity,
            )
        })
        .collect();

    let command = CreateOrderCommand::new(req.customer_name, req.customer_email, items);
    let order = state.create_order.execute(command).await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(&order))))
}

/// GET /orders/:id — look up an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get_by_id<R, N>(
    State(state): State<Arc<AppState<R, N>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError>
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    let order_id = parse_order_id(&id)?;
    let order = state
        .get_order
        .execute(order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("order {id} not found")))?;

    Ok(Json(OrderResponse::from(&order)))
}

/// GET /orders — list all stored orders.
#[tracing::instrument(skip(state))]
pub async fn list<R, N>(
    State(state): State<Arc<AppState<R, N>>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError>
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    let orders = state
        .repository
        .get_all()
        .await
        .map_err(|e| ApiError::UseCase(e.into()))?;

    Ok(Json(orders.iter().map(OrderResponse::from).collect()))
}

/// PATCH /orders/:id/status — transition an order to a new status.
#[tracing::instrument(skip(state, req))]
pub async fn update_status<R, N>(
    State(state): State<Arc<AppState<R, N>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<OrderResponse>, ApiError>
where
    R: OrderRepository + Clone + 'static,
    N: NotificationService + Clone + 'static,
{
    let order_id = parse_order_id(&id)?;
    let target = OrderStatus::from_name(&req.status)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown status: {}", req.status)))?;

    let order = state.update_status.execute(order_id, target).await?;

    Ok(Json(OrderResponse::from(&order)))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    OrderId::parse(id).map_err(|e| ApiError::BadRequest(format!("invalid order ID: {e}")))
}
