use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use oficina_api::config::environment::EnvironmentConfig;
use oficina_api::database::connection::DatabaseConnection;
use oficina_api::routes::create_app;
use oficina_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Oficina API - Sistema administrativo de oficina mecânica");
    info!("============================================================");

    // Inicializar base de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando à base de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de base de dados: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Erro executando migrações: {}", e);
        return Err(e);
    }
    info!("✅ Migrações aplicadas");

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;

    let app_state = AppState::new(pool, config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/dashboard - Estatísticas gerais");
    info!("   GET  /api/cep/:cep - Consulta de CEP (ViaCEP)");
    info!("👥 Clientes:       /api/clientes");
    info!("🚗 Veículos:       /api/veiculos");
    info!("📅 Agendamentos:   /api/agendamentos (+ POST /:id/concluir)");
    info!("🔩 Serviços:       /api/servicos (+ /:id/itens)");
    info!("📦 Estoque:        /api/estoque/{{pecas,fornecedores,movimentacoes}}");
    info!("💰 Financeiro:     /api/financeiro/{{contas-receber,contas-pagar,pagamentos,resumo}}");
    info!("📄 Relatórios:     /api/relatorios/:categoria/{{print,pdf}}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
