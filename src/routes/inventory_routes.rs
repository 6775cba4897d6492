//! Rotas de estoque: peças, fornecedores e movimentações

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::inventory_controller::{
    PartController, StockMovementController, SupplierController,
};
use crate::dto::common::ApiResponse;
use crate::dto::inventory_dto::{
    CreatePartRequest, CreateStockMovementRequest, CreateSupplierRequest, PartFilters,
    PartResponse, StockMovementFilters, StockMovementResponse, SupplierFilters, SupplierResponse,
    UpdatePartRequest, UpdateSupplierRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/pecas", post(create_part))
        .route("/pecas", get(list_parts))
        .route("/pecas/:id", get(get_part))
        .route("/pecas/:id", put(update_part))
        .route("/pecas/:id", delete(delete_part))
        .route("/fornecedores", post(create_supplier))
        .route("/fornecedores", get(list_suppliers))
        .route("/fornecedores/:id", get(get_supplier))
        .route("/fornecedores/:id", put(update_supplier))
        .route("/fornecedores/:id", delete(delete_supplier))
        .route("/movimentacoes", post(create_movement))
        .route("/movimentacoes", get(list_movements))
        .route("/movimentacoes/:id", get(get_movement))
}

// --- Peças ---

async fn create_part(
    State(state): State<AppState>,
    Json(request): Json<CreatePartRequest>,
) -> Result<Json<ApiResponse<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PartResponse>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_parts(
    State(state): State<AppState>,
    Query(filters): Query<PartFilters>,
) -> Result<Json<Vec<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePartRequest>,
) -> Result<Json<ApiResponse<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PartController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Peça removida com sucesso!"
    })))
}

// --- Fornecedores ---

async fn create_supplier(
    State(state): State<AppState>,
    Json(request): Json<CreateSupplierRequest>,
) -> Result<Json<ApiResponse<SupplierResponse>>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SupplierResponse>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_suppliers(
    State(state): State<AppState>,
    Query(filters): Query<SupplierFilters>,
) -> Result<Json<Vec<SupplierResponse>>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSupplierRequest>,
) -> Result<Json<ApiResponse<SupplierResponse>>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SupplierController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Fornecedor removido com sucesso!"
    })))
}

// --- Movimentações ---

async fn create_movement(
    State(state): State<AppState>,
    Json(request): Json<CreateStockMovementRequest>,
) -> Result<Json<ApiResponse<StockMovementResponse>>, AppError> {
    let controller = StockMovementController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StockMovementResponse>, AppError> {
    let controller = StockMovementController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_movements(
    State(state): State<AppState>,
    Query(filters): Query<StockMovementFilters>,
) -> Result<Json<Vec<StockMovementResponse>>, AppError> {
    let controller = StockMovementController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
