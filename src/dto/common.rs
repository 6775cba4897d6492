//! DTOs comuns da API
//!
//! Envelope genérico de resposta e constantes de paginação.

use serde::Serialize;

/// Tamanho de página padrão das listagens
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Response genérica da API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
