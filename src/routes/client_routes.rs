//! Rotas de Clientes

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::{
    ClientFilters, ClientResponse, CreateClientRequest, UpdateClientRequest,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_clients(
    State(state): State<AppState>,
    Query(filters): Query<ClientFilters>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente removido com sucesso!"
    })))
}
