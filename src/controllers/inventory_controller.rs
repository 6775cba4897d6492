//! Controllers de estoque
//!
//! Peças (com código único e categoria validada), fornecedores e
//! movimentações. A quantidade atual de uma peça só muda através de
//! movimentações; a criação delega a escrita transacional ao
//! repositório.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::inventory_dto::{
    CreatePartRequest, CreateStockMovementRequest, CreateSupplierRequest, PartFilters,
    PartResponse, StockMovementFilters, StockMovementResponse, SupplierFilters, SupplierResponse,
    UpdatePartRequest, UpdateSupplierRequest,
};
use crate::models::part::PartCategory;
use crate::models::stock_movement::MovementKind;
use crate::repositories::part_repository::PartRepository;
use crate::repositories::stock_movement_repository::StockMovementRepository;
use crate::repositories::supplier_repository::SupplierRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct PartController {
    repository: PartRepository,
    suppliers: SupplierRepository,
}

impl PartController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PartRepository::new(pool.clone()),
            suppliers: SupplierRepository::new(pool),
        }
    }

    fn check_preco(campo: &str, valor: Decimal) -> AppResult<()> {
        if valor < Decimal::ZERO {
            return Err(AppError::BadRequest(format!(
                "{} não pode ser negativo",
                campo
            )));
        }
        Ok(())
    }

    pub async fn create(&self, request: CreatePartRequest) -> AppResult<ApiResponse<PartResponse>> {
        request.validate()?;

        let categoria = parse_categoria(request.categoria.as_deref())?
            .unwrap_or(PartCategory::Other)
            .as_str()
            .to_string();

        if let Some(preco) = request.preco_compra {
            Self::check_preco("Preço de compra", preco)?;
        }
        if let Some(preco) = request.preco_venda {
            Self::check_preco("Preço de venda", preco)?;
        }

        if self.repository.codigo_exists(&request.codigo, None).await? {
            return Err(AppError::Conflict(
                "Já existe uma peça com este código".to_string(),
            ));
        }

        if let Some(fornecedor_id) = request.fornecedor_id {
            if self.suppliers.find_by_id(fornecedor_id).await?.is_none() {
                return Err(AppError::NotFound("Fornecedor não encontrado".to_string()));
            }
        }

        let part = self
            .repository
            .create(
                request.codigo,
                request.descricao,
                request.fabricante,
                categoria,
                request.preco_compra.unwrap_or(Decimal::ZERO),
                request.preco_venda.unwrap_or(Decimal::ZERO),
                request.quantidade_minima.unwrap_or(0),
                request.quantidade_atual.unwrap_or(0),
                request.fornecedor_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            part.into(),
            "Peça criada com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<PartResponse> {
        let part = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Peça não encontrada".to_string()))?;

        Ok(part.into())
    }

    pub async fn list(&self, filters: PartFilters) -> AppResult<Vec<PartResponse>> {
        if let Some(categoria) = filters.categoria.as_deref().filter(|s| !s.is_empty()) {
            if PartCategory::parse(categoria).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Categoria de peça inválida: {}",
                    categoria
                )));
            }
        }

        let parts = self.repository.list(&filters).await?;

        Ok(parts.into_iter().map(PartResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePartRequest,
    ) -> AppResult<ApiResponse<PartResponse>> {
        request.validate()?;

        let categoria = parse_categoria(request.categoria.as_deref())?
            .map(|c| c.as_str().to_string());

        if let Some(preco) = request.preco_compra {
            Self::check_preco("Preço de compra", preco)?;
        }
        if let Some(preco) = request.preco_venda {
            Self::check_preco("Preço de venda", preco)?;
        }

        if let Some(ref codigo) = request.codigo {
            if self.repository.codigo_exists(codigo, Some(id)).await? {
                return Err(AppError::Conflict(
                    "Já existe uma peça com este código".to_string(),
                ));
            }
        }

        if let Some(fornecedor_id) = request.fornecedor_id {
            if self.suppliers.find_by_id(fornecedor_id).await?.is_none() {
                return Err(AppError::NotFound("Fornecedor não encontrado".to_string()));
            }
        }

        let part = self
            .repository
            .update(
                id,
                request.codigo,
                request.descricao,
                request.fabricante,
                categoria,
                request.preco_compra,
                request.preco_venda,
                request.quantidade_minima,
                request.fornecedor_id,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Peça não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            part.into(),
            "Peça atualizada com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Peça não encontrada".to_string()));
        }

        Ok(())
    }
}

pub struct SupplierController {
    repository: SupplierRepository,
}

impl SupplierController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SupplierRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateSupplierRequest,
    ) -> AppResult<ApiResponse<SupplierResponse>> {
        request.validate()?;

        let supplier = self
            .repository
            .create(request.nome, request.contato, request.email, request.telefone)
            .await?;

        Ok(ApiResponse::success_with_message(
            supplier.into(),
            "Fornecedor criado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<SupplierResponse> {
        let supplier = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fornecedor não encontrado".to_string()))?;

        Ok(supplier.into())
    }

    pub async fn list(&self, filters: SupplierFilters) -> AppResult<Vec<SupplierResponse>> {
        let suppliers = self.repository.list(&filters).await?;

        Ok(suppliers.into_iter().map(SupplierResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateSupplierRequest,
    ) -> AppResult<ApiResponse<SupplierResponse>> {
        request.validate()?;

        let supplier = self
            .repository
            .update(
                id,
                request.nome,
                request.contato,
                request.email,
                request.telefone,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Fornecedor não encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            supplier.into(),
            "Fornecedor atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Fornecedor não encontrado".to_string()));
        }

        Ok(())
    }
}

pub struct StockMovementController {
    repository: StockMovementRepository,
}

impl StockMovementController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StockMovementRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateStockMovementRequest,
    ) -> AppResult<ApiResponse<StockMovementResponse>> {
        request.validate()?;

        let kind = MovementKind::parse(&request.tipo).ok_or_else(|| {
            AppError::BadRequest(format!("Tipo de movimentação inválido: {}", request.tipo))
        })?;

        let movement = self
            .repository
            .create(
                request.peca_id,
                kind,
                request.quantidade,
                request.motivo,
                request.responsavel,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            movement.into(),
            "Movimentação registrada com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StockMovementResponse> {
        let movement = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Movimentação não encontrada".to_string()))?;

        Ok(movement.into())
    }

    pub async fn list(
        &self,
        filters: StockMovementFilters,
    ) -> AppResult<Vec<StockMovementResponse>> {
        if let Some(tipo) = filters.tipo.as_deref().filter(|s| !s.is_empty()) {
            if MovementKind::parse(tipo).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Tipo de movimentação inválido: {}",
                    tipo
                )));
            }
        }

        let movements = self.repository.list(&filters).await?;

        Ok(movements
            .into_iter()
            .map(StockMovementResponse::from)
            .collect())
    }
}

fn parse_categoria(value: Option<&str>) -> AppResult<Option<PartCategory>> {
    match value {
        None => Ok(None),
        Some(raw) => PartCategory::parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Categoria de peça inválida: {}", raw))),
    }
}
