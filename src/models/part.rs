//! Modelos de Peça e Fornecedor
//!
//! A peça carrega as quantidades atual e mínima; o flag de estoque
//! baixo é derivado (quantidade_atual <= quantidade_minima).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categoria da peça - armazenada como TEXT snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartCategory {
    Engine,
    Brakes,
    Suspension,
    Transmission,
    Electrical,
    Body,
    Other,
}

impl PartCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::Engine => "motor",
            PartCategory::Brakes => "freios",
            PartCategory::Suspension => "suspensao",
            PartCategory::Transmission => "transmissao",
            PartCategory::Electrical => "eletrica",
            PartCategory::Body => "carroceria",
            PartCategory::Other => "outro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "motor" => Some(PartCategory::Engine),
            "freios" => Some(PartCategory::Brakes),
            "suspensao" => Some(PartCategory::Suspension),
            "transmissao" => Some(PartCategory::Transmission),
            "eletrica" => Some(PartCategory::Electrical),
            "carroceria" => Some(PartCategory::Body),
            "outro" => Some(PartCategory::Other),
            _ => None,
        }
    }
}

/// Fornecedor de peças - mapeia a tabela fornecedores
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub nome: String,
    pub contato: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Peça no estoque - mapeia a tabela pecas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Part {
    pub id: Uuid,
    pub codigo: String,
    pub descricao: String,
    pub fabricante: Option<String>,
    pub categoria: String,
    pub preco_compra: Decimal,
    pub preco_venda: Decimal,
    pub quantidade_minima: i32,
    pub quantidade_atual: i32,
    pub fornecedor_id: Option<Uuid>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Part {
    /// Estoque baixo: quantidade atual menor ou igual à mínima
    pub fn low_stock(&self) -> bool {
        low_stock(self.quantidade_atual, self.quantidade_minima)
    }
}

/// Flag derivado de estoque baixo
pub fn low_stock(quantidade_atual: i32, quantidade_minima: i32) -> bool {
    quantidade_atual <= quantidade_minima
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estoque_baixo_no_limite() {
        assert!(low_stock(0, 0));
        assert!(low_stock(5, 5));
        assert!(low_stock(4, 5));
        assert!(!low_stock(6, 5));
    }

    #[test]
    fn categoria_ida_e_volta() {
        for categoria in [
            PartCategory::Engine,
            PartCategory::Brakes,
            PartCategory::Suspension,
            PartCategory::Transmission,
            PartCategory::Electrical,
            PartCategory::Body,
            PartCategory::Other,
        ] {
            assert_eq!(PartCategory::parse(categoria.as_str()), Some(categoria));
        }
        assert_eq!(PartCategory::parse("pneus"), None);
    }
}
