//! Rotas de Agendamentos

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::appointment_controller::AppointmentController;
use crate::dto::appointment_dto::{
    AppointmentFilters, AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment))
        .route("/", get(list_appointments))
        .route("/:id", get(get_appointment))
        .route("/:id", put(update_appointment))
        .route("/:id", delete(delete_appointment))
        .route("/:id/concluir", post(complete_appointment))
}

async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_appointments(
    State(state): State<AppState>,
    Query(filters): Query<AppointmentFilters>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn complete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.complete(id).await?;
    Ok(Json(response))
}

async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Agendamento removido com sucesso!"
    })))
}
