//! Modelos do financeiro
//!
//! Contas a receber, contas a pagar e pagamentos de serviço. A contagem
//! de dias em atraso é derivada: só conta para contas abertas com
//! vencimento anterior à data atual.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status de conta - armazenado como TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Open,
    Paid,
    Overdue,
    Canceled,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Open => "aberta",
            AccountStatus::Paid => "paga",
            AccountStatus::Overdue => "vencida",
            AccountStatus::Canceled => "cancelada",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "aberta" => Some(AccountStatus::Open),
            "paga" => Some(AccountStatus::Paid),
            "vencida" => Some(AccountStatus::Overdue),
            "cancelada" => Some(AccountStatus::Canceled),
            _ => None,
        }
    }
}

/// Categoria de despesa das contas a pagar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Parts,
    Services,
    Salaries,
    Rent,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Parts => "pecas",
            ExpenseCategory::Services => "servicos",
            ExpenseCategory::Salaries => "salarios",
            ExpenseCategory::Rent => "aluguel",
            ExpenseCategory::Utilities => "utilitarios",
            ExpenseCategory::Other => "outros",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pecas" => Some(ExpenseCategory::Parts),
            "servicos" => Some(ExpenseCategory::Services),
            "salarios" => Some(ExpenseCategory::Salaries),
            "aluguel" => Some(ExpenseCategory::Rent),
            "utilitarios" => Some(ExpenseCategory::Utilities),
            "outros" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

/// Forma de pagamento de serviço
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Check,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::CreditCard => "cartao_credito",
            PaymentMethod::DebitCard => "cartao_debito",
            PaymentMethod::Check => "cheque",
            PaymentMethod::Transfer => "transferencia",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dinheiro" => Some(PaymentMethod::Cash),
            "cartao_credito" => Some(PaymentMethod::CreditCard),
            "cartao_debito" => Some(PaymentMethod::DebitCard),
            "cheque" => Some(PaymentMethod::Check),
            "transferencia" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }
}

/// Conta a receber - mapeia a tabela contas_receber
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receivable {
    pub id: Uuid,
    pub servico_id: Option<Uuid>,
    pub cliente_id: Uuid,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Conta a pagar - mapeia a tabela contas_pagar
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payable {
    pub id: Uuid,
    pub fornecedor_id: Option<Uuid>,
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub categoria: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagamento de serviço - mapeia a tabela pagamentos_servico
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServicePayment {
    pub id: Uuid,
    pub servico_id: Uuid,
    pub forma_pagamento: String,
    pub valor: Decimal,
    pub data: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dias em atraso de uma conta: zero para contas não abertas ou com
/// vencimento hoje ou no futuro
pub fn overdue_days(status: &str, data_vencimento: NaiveDate, hoje: NaiveDate) -> i64 {
    if status == AccountStatus::Open.as_str() && data_vencimento < hoje {
        (hoje - data_vencimento).num_days()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn conta_aberta_vencida_conta_dias() {
        assert_eq!(overdue_days("aberta", date(2025, 8, 1), date(2025, 8, 25)), 24);
        assert_eq!(overdue_days("aberta", date(2025, 8, 24), date(2025, 8, 25)), 1);
    }

    #[test]
    fn vencimento_hoje_ou_futuro_nao_atrasa() {
        assert_eq!(overdue_days("aberta", date(2025, 8, 25), date(2025, 8, 25)), 0);
        assert_eq!(overdue_days("aberta", date(2025, 9, 1), date(2025, 8, 25)), 0);
    }

    #[test]
    fn conta_nao_aberta_nunca_atrasa() {
        assert_eq!(overdue_days("paga", date(2025, 1, 1), date(2025, 8, 25)), 0);
        assert_eq!(overdue_days("cancelada", date(2025, 1, 1), date(2025, 8, 25)), 0);
        assert_eq!(overdue_days("vencida", date(2025, 1, 1), date(2025, 8, 25)), 0);
    }

    #[test]
    fn enums_ida_e_volta() {
        for status in [
            AccountStatus::Open,
            AccountStatus::Paid,
            AccountStatus::Overdue,
            AccountStatus::Canceled,
        ] {
            assert_eq!(AccountStatus::parse(status.as_str()), Some(status));
        }
        for categoria in [
            ExpenseCategory::Parts,
            ExpenseCategory::Services,
            ExpenseCategory::Salaries,
            ExpenseCategory::Rent,
            ExpenseCategory::Utilities,
            ExpenseCategory::Other,
        ] {
            assert_eq!(ExpenseCategory::parse(categoria.as_str()), Some(categoria));
        }
        for forma in [
            PaymentMethod::Cash,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Check,
            PaymentMethod::Transfer,
        ] {
            assert_eq!(PaymentMethod::parse(forma.as_str()), Some(forma));
        }
    }
}
