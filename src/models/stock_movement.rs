//! Modelo de Movimentação de estoque
//!
//! Movimentações são registros imutáveis (somente criação). Na criação,
//! uma entrada soma a quantidade ao estoque da peça e uma saída subtrai,
//! falhando quando não há estoque suficiente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

/// Tipo de movimentação - armazenado como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    Entry,
    Withdrawal,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "entrada",
            MovementKind::Withdrawal => "saida",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entrada" => Some(MovementKind::Entry),
            "saida" => Some(MovementKind::Withdrawal),
            _ => None,
        }
    }
}

/// Movimentação de peça - mapeia a tabela movimentacoes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockMovement {
    pub id: Uuid,
    pub peca_id: Uuid,
    pub tipo: String,
    pub quantidade: i32,
    pub motivo: Option<String>,
    pub responsavel: Option<String>,
    pub moved_at: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aplica uma movimentação sobre o estoque atual e retorna a nova
/// quantidade. Saída com quantidade maior que o estoque é rejeitada.
pub fn apply_movement(current: i32, kind: MovementKind, quantidade: i32) -> AppResult<i32> {
    if quantidade < 1 {
        return Err(AppError::BadRequest(
            "Quantidade da movimentação deve ser maior que zero".to_string(),
        ));
    }
    match kind {
        MovementKind::Entry => Ok(current + quantidade),
        MovementKind::Withdrawal => {
            if current >= quantidade {
                Ok(current - quantidade)
            } else {
                Err(AppError::Conflict(
                    "Quantidade insuficiente em estoque".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrada_soma_exatamente_n() {
        assert_eq!(apply_movement(10, MovementKind::Entry, 7).unwrap(), 17);
        assert_eq!(apply_movement(0, MovementKind::Entry, 1).unwrap(), 1);
    }

    #[test]
    fn saida_subtrai_quando_ha_estoque() {
        assert_eq!(apply_movement(10, MovementKind::Withdrawal, 10).unwrap(), 0);
        assert_eq!(apply_movement(10, MovementKind::Withdrawal, 3).unwrap(), 7);
    }

    #[test]
    fn saida_sem_estoque_e_rejeitada() {
        let err = apply_movement(5, MovementKind::Withdrawal, 6).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn quantidade_zero_e_rejeitada() {
        assert!(apply_movement(5, MovementKind::Entry, 0).is_err());
        assert!(apply_movement(5, MovementKind::Withdrawal, -1).is_err());
    }

    #[test]
    fn tipo_ida_e_volta() {
        assert_eq!(MovementKind::parse("entrada"), Some(MovementKind::Entry));
        assert_eq!(MovementKind::parse("saida"), Some(MovementKind::Withdrawal));
        assert_eq!(MovementKind::parse("ajuste"), None);
    }
}
