use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::i18n::traduzir;
use crate::middleware::i18n::Locale;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Único erro de regra de negócio: nível mínimo não numérico ou negativo.
    #[error("Nível mínimo inválido: {0:?}")]
    NivelMinimoInvalido(String),

    #[error("Produto não encontrado")]
    ProdutoNaoEncontrado,

    // Corpo que não chega a ser o JSON esperado (sintaxe, tipo ou Content-Type).
    #[error("Corpo da requisição inválido: {0}")]
    CorpoInvalido(String),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn chave(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validacao",
            AppError::NivelMinimoInvalido(_) => "nivel_minimo_invalido",
            AppError::ProdutoNaoEncontrado => "produto_nao_encontrado",
            AppError::CorpoInvalido(_) => "corpo_invalido",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "erro_interno",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::NivelMinimoInvalido(_)
            | AppError::CorpoInvalido(_) => StatusCode::BAD_REQUEST,
            AppError::ProdutoNaoEncontrado => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converte o erro na resposta HTTP, com a mensagem no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let status = self.status_code();
        let mensagem = traduzir(self.chave(), &locale.0);

        let body = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                json!({ "error": mensagem, "details": details })
            }
            AppError::CorpoInvalido(motivo) => {
                tracing::warn!("Corpo rejeitado: {}", motivo);
                json!({ "error": mensagem })
            }
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                // O detalhe fica só no log.
                tracing::error!("Erro Interno do Servidor: {:?}", self);
                json!({ "error": mensagem })
            }
            _ => json!({ "error": mensagem }),
        };

        ApiError { status, body }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejeicao: JsonRejection) -> Self {
        AppError::CorpoInvalido(rejeicao.body_text())
    }
}

// Erro já traduzido, pronto para virar resposta.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nivel_minimo_invalido_vira_bad_request_traduzido() {
        let erro = AppError::NivelMinimoInvalido("-3".into());

        let pt = erro.to_api_error(&Locale("pt".into()));
        assert_eq!(pt.status, StatusCode::BAD_REQUEST);
        assert_eq!(pt.body["error"], "Insira um valor numérico válido e não-negativo.");

        let en = erro.to_api_error(&Locale("en".into()));
        assert_eq!(en.body["error"], "Enter a valid, non-negative number.");
    }

    #[test]
    fn corpo_invalido_vira_bad_request_sem_detalhes() {
        let erro = AppError::CorpoInvalido("expected value at line 1 column 1".into());

        let pt = erro.to_api_error(&Locale("pt".into()));
        assert_eq!(pt.status, StatusCode::BAD_REQUEST);
        assert_eq!(pt.body["error"], "O corpo da requisição não é um JSON válido.");
        assert!(!pt.body.to_string().contains("column"));

        let en = erro.to_api_error(&Locale("en".into()));
        assert_eq!(en.body["error"], "The request body is not valid JSON.");
    }

    #[test]
    fn erro_interno_nao_vaza_detalhes() {
        let erro = AppError::InternalServerError(anyhow::anyhow!("senha=123"));

        let api = erro.to_api_error(&Locale("pt".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.body.to_string().contains("senha"));
    }
}
