//! Montagem dos relatórios
//!
//! Cada categoria vira uma tabela (título, colunas e linhas de texto)
//! que alimenta tanto a versão imprimível em HTML (Tera) quanto o PDF.

use chrono::Utc;
use lazy_static::lazy_static;
use sqlx::PgPool;
use tera::Tera;

use crate::dto::appointment_dto::AppointmentFilters;
use crate::dto::client_dto::ClientFilters;
use crate::dto::finance_dto::AccountFilters;
use crate::dto::inventory_dto::PartFilters;
use crate::dto::service_order_dto::ServiceOrderFilters;
use crate::dto::vehicle_dto::VehicleFilters;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::part_repository::PartRepository;
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pdf_service::ReportPdf;
use crate::utils::errors::{AppError, AppResult};

/// Limite de linhas de um relatório
const REPORT_LIMIT: i64 = 1000;

lazy_static! {
    static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_template("report.html", include_str!("../../templates/report.html"))
            .expect("template de relatório inválido");
        tera
    };
}

/// Categorias de relatório disponíveis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Clients,
    Vehicles,
    Appointments,
    ServiceOrders,
    Inventory,
    Finance,
}

impl ReportCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "clientes" => Some(ReportCategory::Clients),
            "veiculos" => Some(ReportCategory::Vehicles),
            "agendamentos" => Some(ReportCategory::Appointments),
            "servicos" => Some(ReportCategory::ServiceOrders),
            "estoque" => Some(ReportCategory::Inventory),
            "financeiro" => Some(ReportCategory::Finance),
            _ => None,
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            ReportCategory::Clients => "Relatório de Clientes",
            ReportCategory::Vehicles => "Relatório de Veículos",
            ReportCategory::Appointments => "Relatório de Agendamentos",
            ReportCategory::ServiceOrders => "Relatório de Serviços",
            ReportCategory::Inventory => "Relatório de Estoque",
            ReportCategory::Finance => "Relatório Financeiro",
        }
    }
}

/// Tabela pronta para renderização
#[derive(Debug)]
pub struct ReportData {
    pub titulo: String,
    pub colunas: Vec<String>,
    pub linhas: Vec<Vec<String>>,
    pub gerado_em: String,
}

pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Monta a tabela da categoria pedida
    pub async fn build(&self, categoria: ReportCategory) -> AppResult<ReportData> {
        let linhas = match categoria {
            ReportCategory::Clients => self.client_rows().await?,
            ReportCategory::Vehicles => self.vehicle_rows().await?,
            ReportCategory::Appointments => self.appointment_rows().await?,
            ReportCategory::ServiceOrders => self.service_order_rows().await?,
            ReportCategory::Inventory => self.inventory_rows().await?,
            ReportCategory::Finance => self.finance_rows().await?,
        };

        Ok(ReportData {
            titulo: categoria.titulo().to_string(),
            colunas: columns(categoria),
            linhas,
            gerado_em: Utc::now().format("%d/%m/%Y %H:%M").to_string(),
        })
    }

    /// Renderiza a versão imprimível em HTML
    pub fn render_html(&self, data: &ReportData) -> AppResult<String> {
        let mut context = tera::Context::new();
        context.insert("titulo", &data.titulo);
        context.insert("colunas", &data.colunas);
        context.insert("linhas", &data.linhas);
        context.insert("gerado_em", &data.gerado_em);

        TEMPLATES
            .render("report.html", &context)
            .map_err(|e| AppError::Internal(format!("Falha ao renderizar relatório: {}", e)))
    }

    /// Renderiza o PDF
    pub fn render_pdf(&self, data: &ReportData) -> Vec<u8> {
        let mut pdf = ReportPdf::new();
        pdf.write_table(&data.titulo, &data.colunas, &data.linhas);
        pdf.finish()
    }

    async fn client_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let filters = ClientFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };
        let clients = ClientRepository::new(self.pool.clone()).list(&filters).await?;

        Ok(clients
            .into_iter()
            .map(|c| {
                vec![
                    c.nome,
                    c.cpf_cnpj,
                    c.telefone,
                    c.email.unwrap_or_default(),
                    c.cidade,
                ]
            })
            .collect())
    }

    async fn vehicle_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let filters = VehicleFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };
        let vehicles = VehicleRepository::new(self.pool.clone()).list(&filters).await?;

        Ok(vehicles
            .into_iter()
            .map(|v| {
                vec![
                    v.placa,
                    v.marca,
                    v.modelo,
                    v.ano.to_string(),
                    v.status,
                ]
            })
            .collect())
    }

    async fn appointment_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let filters = AppointmentFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };
        let rows = AppointmentRepository::new(self.pool.clone())
            .list(&filters, None, None)
            .await?;

        Ok(rows
            .into_iter()
            .map(|a| {
                vec![
                    a.scheduled_at.format("%d/%m/%Y %H:%M").to_string(),
                    a.placa,
                    a.cliente_nome,
                    a.mecanico.unwrap_or_default(),
                    a.status,
                ]
            })
            .collect())
    }

    async fn service_order_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let filters = ServiceOrderFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };
        let orders = ServiceOrderRepository::new(self.pool.clone())
            .list(&filters)
            .await?;

        Ok(orders
            .into_iter()
            .map(|s| {
                vec![
                    s.created_at.format("%d/%m/%Y").to_string(),
                    s.descricao_trabalho.unwrap_or_default(),
                    format!("R$ {}", s.preco_mao_obra),
                    format!("R$ {}", s.valor_total),
                    s.status,
                ]
            })
            .collect())
    }

    async fn inventory_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let filters = PartFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };
        let parts = PartRepository::new(self.pool.clone()).list(&filters).await?;

        Ok(parts
            .into_iter()
            .map(|p| {
                let estoque_baixo = if p.low_stock() { "sim" } else { "não" };
                vec![
                    p.codigo,
                    p.descricao,
                    p.categoria,
                    p.quantidade_atual.to_string(),
                    p.quantidade_minima.to_string(),
                    estoque_baixo.to_string(),
                ]
            })
            .collect())
    }

    async fn finance_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let repository = AccountRepository::new(self.pool.clone());
        let hoje = Utc::now().date_naive();
        let filters = AccountFilters {
            limit: Some(REPORT_LIMIT),
            ..Default::default()
        };

        let receivables = repository.list_receivables(&filters, hoje).await?;
        let payables = repository.list_payables(&filters, hoje).await?;

        let mut linhas: Vec<Vec<String>> = receivables
            .into_iter()
            .map(|c| {
                vec![
                    "a receber".to_string(),
                    format!("R$ {}", c.valor),
                    c.data_vencimento.format("%d/%m/%Y").to_string(),
                    c.data_pagamento
                        .map(|d| d.format("%d/%m/%Y").to_string())
                        .unwrap_or_default(),
                    c.status,
                ]
            })
            .collect();

        linhas.extend(payables.into_iter().map(|c| {
            vec![
                "a pagar".to_string(),
                format!("R$ {}", c.valor),
                c.data_vencimento.format("%d/%m/%Y").to_string(),
                c.data_pagamento
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_default(),
                c.status,
            ]
        }));

        Ok(linhas)
    }
}

fn columns(categoria: ReportCategory) -> Vec<String> {
    let nomes: &[&str] = match categoria {
        ReportCategory::Clients => &["Nome", "CPF/CNPJ", "Telefone", "Email", "Cidade"],
        ReportCategory::Vehicles => &["Placa", "Marca", "Modelo", "Ano", "Status"],
        ReportCategory::Appointments => &["Data", "Placa", "Cliente", "Mecânico", "Status"],
        ReportCategory::ServiceOrders => &["Data", "Descrição", "Mão de obra", "Total", "Status"],
        ReportCategory::Inventory => &[
            "Código",
            "Descrição",
            "Categoria",
            "Qtd. atual",
            "Qtd. mínima",
            "Estoque baixo",
        ],
        ReportCategory::Finance => &["Tipo", "Valor", "Vencimento", "Pagamento", "Status"],
    };

    nomes.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorias_conhecidas() {
        assert_eq!(ReportCategory::parse("clientes"), Some(ReportCategory::Clients));
        assert_eq!(ReportCategory::parse("financeiro"), Some(ReportCategory::Finance));
        assert_eq!(ReportCategory::parse("folha"), None);
    }

    #[test]
    fn template_renderiza_linhas() {
        let mut context = tera::Context::new();
        context.insert("titulo", "Relatório de Clientes");
        context.insert("colunas", &vec!["Nome".to_string()]);
        context.insert("linhas", &vec![vec!["Maria".to_string()]]);
        context.insert("gerado_em", "25/08/2026 10:00");

        let html = TEMPLATES.render("report.html", &context).unwrap();
        assert!(html.contains("Relatório de Clientes"));
        assert!(html.contains("Maria"));
    }
}
