//! Definição das rotas HTTP
//!
//! Cada módulo expõe um `create_*_router` e `create_app` monta a
//! aplicação completa com CORS e estado compartilhado.

pub mod appointment_routes;
pub mod client_routes;
pub mod core_routes;
pub mod finance_routes;
pub mod inventory_routes;
pub mod report_routes;
pub mod service_order_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Monta o router completo da aplicação
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(&state.config.cors_origins)
    } else {
        cors_middleware()
    };

    Router::new()
        .merge(core_routes::create_core_router())
        .nest("/api/clientes", client_routes::create_client_router())
        .nest("/api/veiculos", vehicle_routes::create_vehicle_router())
        .nest(
            "/api/agendamentos",
            appointment_routes::create_appointment_router(),
        )
        .nest(
            "/api/servicos",
            service_order_routes::create_service_order_router(),
        )
        .nest("/api/estoque", inventory_routes::create_inventory_router())
        .nest("/api/financeiro", finance_routes::create_finance_router())
        .nest("/api/relatorios", report_routes::create_report_router())
        .layer(cors)
        .with_state(state)
}
