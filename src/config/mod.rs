//! Configuração do projeto
//!
//! Este módulo contém a configuração de base de dados e variáveis
//! de ambiente do sistema.

pub mod database;
pub mod environment;

pub use environment::*;
