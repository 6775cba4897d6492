//! Camada de acesso a dados
//!
//! Cada repositório encapsula o SQL de uma entidade sobre o pool
//! compartilhado. Regras de negócio ficam nos controllers.

pub mod account_repository;
pub mod appointment_repository;
pub mod client_repository;
pub mod dashboard_repository;
pub mod part_repository;
pub mod service_order_repository;
pub mod stock_movement_repository;
pub mod supplier_repository;
pub mod vehicle_repository;
