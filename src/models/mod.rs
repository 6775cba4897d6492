//! Modelos do sistema
//!
//! Este módulo contém todos os modelos de dados que mapeiam o schema
//! PostgreSQL, os enums de status com os valores snake_case do domínio
//! e as regras de cálculo derivadas (subtotal, total, estoque, atraso).

pub mod account;
pub mod appointment;
pub mod client;
pub mod part;
pub mod service_order;
pub mod stock_movement;
pub mod vehicle;
