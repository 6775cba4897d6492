//! Controller de Agendamentos
//!
//! Confere veículo e cliente antes de gravar, valida o status e
//! converte o intervalo de datas dos filtros de listagem.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::appointment_dto::{
    AppointmentFilters, AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::appointment::AppointmentStatus;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_date;

pub struct AppointmentController {
    repository: AppointmentRepository,
    vehicles: VehicleRepository,
    clients: ClientRepository,
}

impl AppointmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AppointmentRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAppointmentRequest,
    ) -> AppResult<ApiResponse<AppointmentResponse>> {
        request.validate()?;

        let status = parse_status(request.status.as_deref())?
            .unwrap_or(AppointmentStatus::Scheduled)
            .as_str()
            .to_string();

        if self.vehicles.find_by_id(request.veiculo_id).await?.is_none() {
            return Err(AppError::NotFound("Veículo não encontrado".to_string()));
        }

        if self.clients.find_by_id(request.cliente_id).await?.is_none() {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }

        let appointment = self
            .repository
            .create(
                request.veiculo_id,
                request.cliente_id,
                request.scheduled_at,
                request.mecanico,
                request.descricao_problema,
                status,
            )
            .await?;

        // Busca a linha com placa e cliente resolvidos para a resposta
        let row = self
            .repository
            .find_row_by_id(appointment.id)
            .await?
            .ok_or_else(|| AppError::Internal("Agendamento recém-criado sumiu".to_string()))?;

        Ok(ApiResponse::success_with_message(
            row.into(),
            "Agendamento criado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<AppointmentResponse> {
        let row = self
            .repository
            .find_row_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        Ok(row.into())
    }

    pub async fn list(&self, filters: AppointmentFilters) -> AppResult<Vec<AppointmentResponse>> {
        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            if AppointmentStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Status de agendamento inválido: {}",
                    status
                )));
            }
        }

        let data_inicio = parse_filter_date(filters.data_inicio.as_deref())?;
        let data_fim = parse_filter_date(filters.data_fim.as_deref())?;

        let rows = self.repository.list(&filters, data_inicio, data_fim).await?;

        Ok(rows.into_iter().map(AppointmentResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> AppResult<ApiResponse<AppointmentResponse>> {
        request.validate()?;

        let status = parse_status(request.status.as_deref())?.map(|s| s.as_str().to_string());

        if let Some(veiculo_id) = request.veiculo_id {
            if self.vehicles.find_by_id(veiculo_id).await?.is_none() {
                return Err(AppError::NotFound("Veículo não encontrado".to_string()));
            }
        }

        if let Some(cliente_id) = request.cliente_id {
            if self.clients.find_by_id(cliente_id).await?.is_none() {
                return Err(AppError::NotFound("Cliente não encontrado".to_string()));
            }
        }

        let appointment = self
            .repository
            .update(
                id,
                request.veiculo_id,
                request.cliente_id,
                request.scheduled_at,
                request.mecanico,
                request.descricao_problema,
                status,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        let row = self
            .repository
            .find_row_by_id(appointment.id)
            .await?
            .ok_or_else(|| AppError::Internal("Agendamento atualizado sumiu".to_string()))?;

        Ok(ApiResponse::success_with_message(
            row.into(),
            "Agendamento atualizado com sucesso!".to_string(),
        ))
    }

    /// Marca o agendamento como concluído
    pub async fn complete(&self, id: Uuid) -> AppResult<ApiResponse<AppointmentResponse>> {
        self.repository
            .mark_completed(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        let row = self
            .repository
            .find_row_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Agendamento concluído sumiu".to_string()))?;

        Ok(ApiResponse::success_with_message(
            row.into(),
            "Agendamento concluído com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Agendamento não encontrado".to_string()));
        }

        Ok(())
    }
}

fn parse_status(value: Option<&str>) -> AppResult<Option<AppointmentStatus>> {
    match value {
        None => Ok(None),
        Some(raw) => AppointmentStatus::parse(raw).map(Some).ok_or_else(|| {
            AppError::BadRequest(format!("Status de agendamento inválido: {}", raw))
        }),
    }
}

fn parse_filter_date(value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => validate_date(raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Data inválida: {} (use YYYY-MM-DD)", raw))),
    }
}
