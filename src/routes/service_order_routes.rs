//! Rotas de Serviços e itens de orçamento

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_order_controller::ServiceOrderController;
use crate::dto::common::ApiResponse;
use crate::dto::service_order_dto::{
    CreateEstimateItemRequest, CreateServiceOrderRequest, EstimateItemResponse,
    ServiceOrderFilters, ServiceOrderResponse, UpdateEstimateItemRequest,
    UpdateServiceOrderRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id", put(update_order))
        .route("/:id", delete(delete_order))
        .route("/:id/itens", get(list_items))
        .route("/:id/itens", post(create_item))
        .route("/itens/:item_id", put(update_item))
        .route("/itens/:item_id", delete(delete_item))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceOrderRequest>,
) -> Result<Json<ApiResponse<ServiceOrderResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceOrderResponse>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(filters): Query<ServiceOrderFilters>,
) -> Result<Json<Vec<ServiceOrderResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceOrderRequest>,
) -> Result<Json<ApiResponse<ServiceOrderResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Serviço removido com sucesso!"
    })))
}

async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EstimateItemResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.list_items(id).await?;
    Ok(Json(response))
}

async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateEstimateItemRequest>,
) -> Result<Json<ApiResponse<EstimateItemResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.create_item(id, request).await?;
    Ok(Json(response))
}

async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<UpdateEstimateItemRequest>,
) -> Result<Json<ApiResponse<EstimateItemResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.update_item(item_id, request).await?;
    Ok(Json(response))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    controller.delete_item(item_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Item de orçamento removido com sucesso!"
    })))
}
