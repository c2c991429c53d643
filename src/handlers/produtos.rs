// src/handlers/produtos.rs

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::produto::{IdProduto, OpcaoStatus, Produto, DESCRITORES_STATUS},
    services::produto_service::{FiltroProdutos, ListaProdutos},
};

// GET /api/status
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Produtos",
    responses(
        (status = 200, description = "Status de estoque com rótulo, cor e ícone", body = Vec<OpcaoStatus>)
    )
)]
pub async fn list_status() -> impl IntoResponse {
    let opcoes: Vec<OpcaoStatus> = DESCRITORES_STATUS.iter().map(OpcaoStatus::from).collect();
    (StatusCode::OK, Json(opcoes))
}

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    params(FiltroProdutos),
    responses(
        (status = 200, description = "Produtos filtrados por busca e status", body = ListaProdutos),
        (status = 500, description = "Falha ao carregar a coleção")
    )
)]
pub async fn list_produtos(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(filtro): Query<FiltroProdutos>,
) -> Result<impl IntoResponse, ApiError> {

    let lista = app_state
        .produto_service
        .listar(&filtro)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(lista)))
}

// O campo chega como texto digitado; números JSON também são aceitos.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EntradaNivelMinimo {
    Texto(String),
    Numero(f64),
}

impl EntradaNivelMinimo {
    pub fn como_texto(&self) -> String {
        match self {
            EntradaNivelMinimo::Texto(s) => s.clone(),
            EntradaNivelMinimo::Numero(n) => n.to_string(),
        }
    }
}

// ---
// Payload: AtualizarNivelMinimo
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarNivelMinimoPayload {
    #[validate(required(message = "O campo 'nivelMinimo' é obrigatório."))]
    pub nivel_minimo: Option<EntradaNivelMinimo>,
}

// PATCH /api/produtos/{id}/nivel-minimo
#[utoipa::path(
    patch,
    path = "/api/produtos/{id}/nivel-minimo",
    tag = "Produtos",
    params(
        ("id" = String, Path, description = "ID do produto (UUID, inteiro ou texto)")
    ),
    request_body = AtualizarNivelMinimoPayload,
    responses(
        (status = 200, description = "Produto com o novo nível mínimo", body = Produto),
        (status = 400, description = "Corpo inválido ou valor ausente, não numérico ou negativo"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_nivel_minimo(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    payload: Result<Json<AtualizarNivelMinimoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let Json(payload) = payload.map_err(|rej| AppError::from(rej).to_api_error(&locale))?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let entrada = payload
        .nivel_minimo
        .as_ref()
        .map(EntradaNivelMinimo::como_texto)
        .unwrap_or_default();

    let produto = app_state
        .produto_service
        .atualizar_nivel_minimo(&IdProduto::interpretar(&id), &entrada)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(produto)))
}
