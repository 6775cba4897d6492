//! Modelo de Serviço e itens de orçamento
//!
//! Um serviço tem relação um-para-um com um agendamento e carrega o
//! valor total recalculado a partir dos itens de orçamento:
//! total = max(soma dos subtotais + mão de obra - desconto, 0).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status do serviço - armazenado como TEXT snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    Estimate,
    InExecution,
    Completed,
    Invoiced,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Estimate => "orcamento",
            ServiceStatus::InExecution => "em_execucao",
            ServiceStatus::Completed => "concluido",
            ServiceStatus::Invoiced => "faturado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "orcamento" => Some(ServiceStatus::Estimate),
            "em_execucao" => Some(ServiceStatus::InExecution),
            "concluido" => Some(ServiceStatus::Completed),
            "faturado" => Some(ServiceStatus::Invoiced),
            _ => None,
        }
    }
}

/// Serviço - mapeia a tabela servicos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceOrder {
    pub id: Uuid,
    pub agendamento_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub descricao_trabalho: Option<String>,
    pub preco_mao_obra: Decimal,
    pub desconto: Decimal,
    pub valor_total: Decimal,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item de orçamento - mapeia a tabela orcamento_itens
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EstimateItem {
    pub id: Uuid,
    pub servico_id: Uuid,
    pub item: String,
    pub quantidade: i32,
    pub valor_unitario: Decimal,
    pub subtotal: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Subtotal de um item: quantidade x valor unitário
pub fn item_subtotal(quantidade: i32, valor_unitario: Decimal) -> Decimal {
    Decimal::from(quantidade) * valor_unitario
}

/// Valor total do serviço: soma dos subtotais + mão de obra - desconto,
/// nunca negativo
pub fn order_total(items_sum: Decimal, preco_mao_obra: Decimal, desconto: Decimal) -> Decimal {
    let total = items_sum + preco_mao_obra - desconto;
    total.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn subtotal_e_quantidade_vezes_unitario() {
        assert_eq!(item_subtotal(3, dec!(25.50)), dec!(76.50));
        assert_eq!(item_subtotal(1, dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn total_soma_mao_de_obra_e_desconto() {
        assert_eq!(order_total(dec!(100.00), dec!(50.00), dec!(30.00)), dec!(120.00));
    }

    #[test]
    fn total_nunca_fica_negativo() {
        assert_eq!(order_total(dec!(10.00), dec!(0.00), dec!(50.00)), dec!(0.00));
        assert_eq!(order_total(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn status_ida_e_volta() {
        for status in [
            ServiceStatus::Estimate,
            ServiceStatus::InExecution,
            ServiceStatus::Completed,
            ServiceStatus::Invoiced,
        ] {
            assert_eq!(ServiceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ServiceStatus::parse("aberto"), None);
    }
}
