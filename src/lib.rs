//! Backend administrativo de oficina mecânica
//!
//! Cadastros de clientes, veículos e fornecedores, agendamentos,
//! serviços com orçamento itemizado, estoque de peças, financeiro e
//! relatórios exportáveis em HTML e PDF.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
