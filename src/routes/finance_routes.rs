//! Rotas do financeiro

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::finance_controller::FinanceController;
use crate::dto::common::ApiResponse;
use crate::dto::finance_dto::{
    AccountFilters, CreatePayableRequest, CreateReceivableRequest, CreateServicePaymentRequest,
    FinanceSummaryResponse, PayAccountRequest, PayableResponse, ReceivableResponse,
    ServicePaymentFilters, ServicePaymentResponse, UpdatePayableRequest, UpdateReceivableRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_finance_router() -> Router<AppState> {
    Router::new()
        .route("/contas-receber", post(create_receivable))
        .route("/contas-receber", get(list_receivables))
        .route("/contas-receber/:id", get(get_receivable))
        .route("/contas-receber/:id", put(update_receivable))
        .route("/contas-receber/:id", delete(delete_receivable))
        .route("/contas-receber/:id/pagar", post(pay_receivable))
        .route("/contas-pagar", post(create_payable))
        .route("/contas-pagar", get(list_payables))
        .route("/contas-pagar/:id", get(get_payable))
        .route("/contas-pagar/:id", put(update_payable))
        .route("/contas-pagar/:id", delete(delete_payable))
        .route("/contas-pagar/:id/pagar", post(pay_payable))
        .route("/pagamentos", post(create_payment))
        .route("/pagamentos", get(list_payments))
        .route("/resumo", get(summary))
}

// --- Contas a receber ---

async fn create_receivable(
    State(state): State<AppState>,
    Json(request): Json<CreateReceivableRequest>,
) -> Result<Json<ApiResponse<ReceivableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.create_receivable(request).await?;
    Ok(Json(response))
}

async fn get_receivable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReceivableResponse>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.get_receivable(id).await?;
    Ok(Json(response))
}

async fn list_receivables(
    State(state): State<AppState>,
    Query(filters): Query<AccountFilters>,
) -> Result<Json<Vec<ReceivableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.list_receivables(filters).await?;
    Ok(Json(response))
}

async fn update_receivable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReceivableRequest>,
) -> Result<Json<ApiResponse<ReceivableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.update_receivable(id, request).await?;
    Ok(Json(response))
}

async fn pay_receivable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<PayAccountRequest>>,
) -> Result<Json<ApiResponse<ReceivableResponse>>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.pay_receivable(id, request).await?;
    Ok(Json(response))
}

async fn delete_receivable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    controller.delete_receivable(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Conta a receber removida com sucesso!"
    })))
}

// --- Contas a pagar ---

async fn create_payable(
    State(state): State<AppState>,
    Json(request): Json<CreatePayableRequest>,
) -> Result<Json<ApiResponse<PayableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.create_payable(request).await?;
    Ok(Json(response))
}

async fn get_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PayableResponse>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.get_payable(id).await?;
    Ok(Json(response))
}

async fn list_payables(
    State(state): State<AppState>,
    Query(filters): Query<AccountFilters>,
) -> Result<Json<Vec<PayableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.list_payables(filters).await?;
    Ok(Json(response))
}

async fn update_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePayableRequest>,
) -> Result<Json<ApiResponse<PayableResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.update_payable(id, request).await?;
    Ok(Json(response))
}

async fn pay_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<PayAccountRequest>>,
) -> Result<Json<ApiResponse<PayableResponse>>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.pay_payable(id, request).await?;
    Ok(Json(response))
}

async fn delete_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    controller.delete_payable(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Conta a pagar removida com sucesso!"
    })))
}

// --- Pagamentos e resumo ---

async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreateServicePaymentRequest>,
) -> Result<Json<ApiResponse<ServicePaymentResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.create_payment(request).await?;
    Ok(Json(response))
}

async fn list_payments(
    State(state): State<AppState>,
    Query(filters): Query<ServicePaymentFilters>,
) -> Result<Json<Vec<ServicePaymentResponse>>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.list_payments(filters).await?;
    Ok(Json(response))
}

async fn summary(
    State(state): State<AppState>,
) -> Result<Json<FinanceSummaryResponse>, AppError> {
    let controller = FinanceController::new(state.pool.clone());
    let response = controller.summary().await?;
    Ok(Json(response))
}
