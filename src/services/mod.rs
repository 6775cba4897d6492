//! Serviços de apoio
//!
//! Integração com o ViaCEP e a geração de relatórios em HTML e PDF.

pub mod cep_service;
pub mod pdf_service;
pub mod report_service;
