//! Módulo de base de dados
//!
//! Gerencia a conexão e migrações do PostgreSQL.

pub mod connection;

pub use connection::DatabaseConnection;
