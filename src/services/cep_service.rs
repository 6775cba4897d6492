//! Consulta de CEP no ViaCEP
//!
//! Busca o endereço de um CEP de 8 dígitos na API pública do ViaCEP.
//! Formato inválido, falha de rede, timeout ou CEP desconhecido
//! resultam em `None`, o endpoint devolve 404 em vez de propagar erro
//! do upstream.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::errors::AppResult;
use crate::utils::validation::{strip_mask, CEP_RE};

const VIACEP_TIMEOUT: Duration = Duration::from_secs(5);

/// Payload devolvido pelo ViaCEP
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// Endereço resolvido a partir do CEP
#[derive(Debug, Serialize, PartialEq)]
pub struct CepResponse {
    pub cep: String,
    pub rua: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

pub struct CepService {
    client: reqwest::Client,
    base_url: String,
}

impl CepService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Consulta o CEP. `Ok(None)` cobre CEP malformado, inexistente ou
    /// upstream indisponível; a consulta nunca propaga erro.
    pub async fn lookup(&self, cep: &str) -> AppResult<Option<CepResponse>> {
        let digits = strip_mask(cep);

        if !CEP_RE.is_match(&digits) {
            log::warn!("CEP malformado: {}", cep);
            return Ok(None);
        }

        let url = format!("{}/{}/json/", self.base_url, digits);

        let response = match self
            .client
            .get(&url)
            .timeout(VIACEP_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("ViaCEP indisponível para {}: {}", digits, e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            log::warn!("ViaCEP respondeu {} para {}", response.status(), digits);
            return Ok(None);
        }

        let payload: ViaCepPayload = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Resposta inválida do ViaCEP para {}: {}", digits, e);
                return Ok(None);
            }
        };

        if payload.erro {
            return Ok(None);
        }

        Ok(Some(CepResponse {
            cep: format_cep(&digits),
            rua: payload.logradouro,
            bairro: payload.bairro,
            cidade: payload.localidade,
            estado: payload.uf,
        }))
    }
}

/// Formata 8 dígitos como 01310-100
fn format_cep(digits: &str) -> String {
    format!("{}-{}", &digits[..5], &digits[5..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_cep_com_traco() {
        assert_eq!(format_cep("01310100"), "01310-100");
    }

    #[tokio::test]
    async fn cep_malformado_vira_none_sem_consultar_upstream() {
        // base_url aponta para porta fechada: se a consulta saísse,
        // o resultado continuaria None, mas o formato barra antes
        let service = CepService::new(reqwest::Client::new(), "http://127.0.0.1:1".to_string());
        assert_eq!(service.lookup("123").await.unwrap(), None);
        assert_eq!(service.lookup("0131010a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upstream_fora_do_ar_vira_none() {
        // porta 1 não tem nada escutando
        let service = CepService::new(reqwest::Client::new(), "http://127.0.0.1:1".to_string());
        let result = service.lookup("01310-100").await.unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn payload_do_viacep_e_deserializado() {
        let payload: ViaCepPayload = serde_json::from_str(
            r#"{"cep":"01310-100","logradouro":"Avenida Paulista","bairro":"Bela Vista","localidade":"São Paulo","uf":"SP"}"#,
        )
        .unwrap();
        assert!(!payload.erro);
        assert_eq!(payload.localidade, "São Paulo");
    }

    #[test]
    fn payload_de_erro_marca_cep_inexistente() {
        let payload: ViaCepPayload = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(payload.erro);
    }
}
