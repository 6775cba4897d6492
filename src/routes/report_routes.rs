//! Rotas de Relatórios
//!
//! Cada categoria tem uma versão imprimível em HTML e um download em
//! PDF gerado no servidor.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::controllers::report_controller::ReportController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/:categoria/print", get(report_html))
        .route("/:categoria/pdf", get(report_pdf))
}

async fn report_html(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let html = controller.html(&categoria).await?;
    Ok(Html(html))
}

async fn report_pdf(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Response, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let (filename, bytes) = controller.pdf(&categoria).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}
