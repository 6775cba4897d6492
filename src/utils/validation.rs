//! Utilidades de validação
//!
//! Funções helper para validação de formatos do domínio (CPF/CNPJ,
//! placa, CEP) e conversão de datas vindas de query strings.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// CPF com 11 dígitos ou CNPJ com 14, sem máscara
    pub static ref CPF_CNPJ_RE: Regex = Regex::new(r"^\d{11}$|^\d{14}$").unwrap();

    /// Placa no formato antigo ABC1234 ou Mercosul ABC1D23
    pub static ref PLACA_RE: Regex =
        Regex::new(r"^[A-Z]{3}\d{4}$|^[A-Z]{3}\d[A-Z]\d{2}$").unwrap();

    /// CEP com 8 dígitos, sem máscara
    pub static ref CEP_RE: Regex = Regex::new(r"^\d{8}$").unwrap();
}

/// Remove máscara de documentos e CEP (pontos, traços, barras)
pub fn strip_mask(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Valida CPF (11 dígitos) ou CNPJ (14 dígitos), com ou sem máscara
pub fn validate_cpf_cnpj(value: &str) -> Result<(), ValidationError> {
    if CPF_CNPJ_RE.is_match(&strip_mask(value)) {
        Ok(())
    } else {
        let mut error = ValidationError::new("cpf_cnpj");
        error.message = Some("CPF/CNPJ deve conter 11 ou 14 dígitos numéricos".into());
        Err(error)
    }
}

/// Valida placa nos formatos ABC1234 ou ABC1D23 (Mercosul)
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    if PLACA_RE.is_match(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("placa");
        error.message = Some("Placa deve estar no formato ABC1234 ou ABC1D23".into());
        Err(error)
    }
}

/// Valida e converte string `YYYY-MM-DD` para data
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Valida que um string não está vazio
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_e_cnpj_validos() {
        assert!(validate_cpf_cnpj("12345678901").is_ok());
        assert!(validate_cpf_cnpj("12345678000195").is_ok());
        assert!(validate_cpf_cnpj("123.456.789-01").is_ok());
        assert!(validate_cpf_cnpj("12.345.678/0001-95").is_ok());
    }

    #[test]
    fn cpf_cnpj_invalidos() {
        assert!(validate_cpf_cnpj("123").is_err());
        assert!(validate_cpf_cnpj("123456789012").is_err()); // 12 dígitos
        assert!(validate_cpf_cnpj("1234567890a").is_err());
        assert!(validate_cpf_cnpj("").is_err());
    }

    #[test]
    fn placa_formato_antigo_e_mercosul() {
        assert!(validate_placa("ABC1234").is_ok());
        assert!(validate_placa("ABC1D23").is_ok());
        assert!(validate_placa("abc1234").is_err());
        assert!(validate_placa("AB12345").is_err());
        assert!(validate_placa("ABC12345").is_err());
    }

    #[test]
    fn strip_mask_remove_pontuacao() {
        assert_eq!(strip_mask("123.456.789-01"), "12345678901");
        assert_eq!(strip_mask("12.345.678/0001-95"), "12345678000195");
        assert_eq!(strip_mask("01310-100"), "01310100");
    }

    #[test]
    fn cep_regex() {
        assert!(CEP_RE.is_match("01310100"));
        assert!(!CEP_RE.is_match("01310-100"));
        assert!(!CEP_RE.is_match("0131010"));
    }

    #[test]
    fn datas_de_query_string() {
        assert!(validate_date("2025-08-01").is_ok());
        assert!(validate_date("01/08/2025").is_err());
        assert!(validate_date("").is_err());
    }
}
