//! Controller de Relatórios

use sqlx::PgPool;

use crate::services::report_service::{ReportCategory, ReportService};
use crate::utils::errors::{AppError, AppResult};

pub struct ReportController {
    service: ReportService,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: ReportService::new(pool),
        }
    }

    fn parse_category(categoria: &str) -> AppResult<ReportCategory> {
        ReportCategory::parse(categoria).ok_or_else(|| {
            AppError::NotFound(format!("Relatório não encontrado: {}", categoria))
        })
    }

    /// Versão imprimível em HTML
    pub async fn html(&self, categoria: &str) -> AppResult<String> {
        let categoria = Self::parse_category(categoria)?;
        let data = self.service.build(categoria).await?;
        self.service.render_html(&data)
    }

    /// Versão em PDF
    pub async fn pdf(&self, categoria: &str) -> AppResult<(String, Vec<u8>)> {
        let categoria = Self::parse_category(categoria)?;
        let data = self.service.build(categoria).await?;
        let filename = format!("{}.pdf", data.titulo.to_lowercase().replace(' ', "_"));

        Ok((filename, self.service.render_pdf(&data)))
    }
}
