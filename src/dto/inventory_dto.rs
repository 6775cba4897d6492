//! DTOs de estoque: peças, fornecedores e movimentações

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::part::{Part, Supplier};
use crate::models::stock_movement::StockMovement;

/// Request para criar uma peça
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartRequest {
    #[validate(length(min = 1, max = 50))]
    pub codigo: String,

    #[validate(length(min = 1, max = 200))]
    pub descricao: String,

    #[validate(length(max = 100))]
    pub fabricante: Option<String>,

    pub categoria: Option<String>,
    pub preco_compra: Option<Decimal>,
    pub preco_venda: Option<Decimal>,

    #[validate(range(min = 0))]
    pub quantidade_minima: Option<i32>,

    #[validate(range(min = 0))]
    pub quantidade_atual: Option<i32>,

    pub fornecedor_id: Option<Uuid>,
}

/// Request para atualizar uma peça. A quantidade atual não é editável
/// por aqui: ela só muda via movimentações.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePartRequest {
    #[validate(length(min = 1, max = 50))]
    pub codigo: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub descricao: Option<String>,

    #[validate(length(max = 100))]
    pub fabricante: Option<String>,

    pub categoria: Option<String>,
    pub preco_compra: Option<Decimal>,
    pub preco_venda: Option<Decimal>,

    #[validate(range(min = 0))]
    pub quantidade_minima: Option<i32>,

    pub fornecedor_id: Option<Uuid>,
    pub active: Option<bool>,
}

/// Filtros de listagem de peças
#[derive(Debug, Default, Deserialize)]
pub struct PartFilters {
    pub search: Option<String>,
    pub categoria: Option<String>,
    pub estoque_baixo: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de peça com o flag derivado de estoque baixo
#[derive(Debug, Serialize)]
pub struct PartResponse {
    pub id: Uuid,
    pub codigo: String,
    pub descricao: String,
    pub fabricante: Option<String>,
    pub categoria: String,
    pub preco_compra: Decimal,
    pub preco_venda: Decimal,
    pub quantidade_minima: i32,
    pub quantidade_atual: i32,
    pub estoque_baixo: bool,
    pub fornecedor_id: Option<Uuid>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Part> for PartResponse {
    fn from(part: Part) -> Self {
        let estoque_baixo = part.low_stock();
        Self {
            id: part.id,
            codigo: part.codigo,
            descricao: part.descricao,
            fabricante: part.fabricante,
            categoria: part.categoria,
            preco_compra: part.preco_compra,
            preco_venda: part.preco_venda,
            quantidade_minima: part.quantidade_minima,
            quantidade_atual: part.quantidade_atual,
            estoque_baixo,
            fornecedor_id: part.fornecedor_id,
            active: part.active,
            created_at: part.created_at,
            updated_at: part.updated_at,
        }
    }
}

/// Request para criar um fornecedor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 200))]
    pub nome: String,

    #[validate(length(max = 100))]
    pub contato: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub telefone: Option<String>,
}

/// Request para atualizar um fornecedor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 200))]
    pub nome: Option<String>,

    #[validate(length(max = 100))]
    pub contato: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub telefone: Option<String>,

    pub active: Option<bool>,
}

/// Filtros de listagem de fornecedores
#[derive(Debug, Default, Deserialize)]
pub struct SupplierFilters {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de fornecedor
#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: Uuid,
    pub nome: String,
    pub contato: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            nome: supplier.nome,
            contato: supplier.contato,
            email: supplier.email,
            telefone: supplier.telefone,
            active: supplier.active,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

/// Request para registrar uma movimentação de estoque
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStockMovementRequest {
    pub peca_id: Uuid,

    /// "entrada" ou "saida"
    pub tipo: String,

    #[validate(range(min = 1))]
    pub quantidade: i32,

    #[validate(length(max = 200))]
    pub motivo: Option<String>,

    #[validate(length(max = 100))]
    pub responsavel: Option<String>,
}

/// Filtros de listagem de movimentações
#[derive(Debug, Default, Deserialize)]
pub struct StockMovementFilters {
    pub peca_id: Option<Uuid>,
    pub tipo: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de movimentação
#[derive(Debug, Serialize)]
pub struct StockMovementResponse {
    pub id: Uuid,
    pub peca_id: Uuid,
    pub tipo: String,
    pub quantidade: i32,
    pub motivo: Option<String>,
    pub responsavel: Option<String>,
    pub moved_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<StockMovement> for StockMovementResponse {
    fn from(movement: StockMovement) -> Self {
        Self {
            id: movement.id,
            peca_id: movement.peca_id,
            tipo: movement.tipo,
            quantidade: movement.quantidade,
            motivo: movement.motivo,
            responsavel: movement.responsavel,
            moved_at: movement.moved_at,
            created_at: movement.created_at,
        }
    }
}
