//! Rotas centrais: health check, dashboard e consulta de CEP

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::services::cep_service::{CepResponse, CepService};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_core_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .route("/api/cep/:cep", get(lookup_cep))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": "oficina-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "oficina-api"
    }))
}

async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.overview().await?;
    Ok(Json(response))
}

async fn lookup_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<CepResponse>, AppError> {
    let service = CepService::new(state.http_client.clone(), state.config.viacep_base_url.clone());

    let endereco = service
        .lookup(&cep)
        .await?
        .ok_or_else(|| AppError::NotFound("CEP não encontrado".to_string()))?;

    Ok(Json(endereco))
}
