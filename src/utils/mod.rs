//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros e
//! validação de formatos do domínio.

pub mod errors;
pub mod validation;
