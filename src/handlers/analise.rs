// src/handlers/analise.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::{analise::PainelAnalise, produto::Produto},
    services::analise_service::{analisar_estoque, montar_painel},
};

// GET /api/produtos/analise
#[utoipa::path(
    get,
    path = "/api/produtos/analise",
    tag = "Análise",
    responses(
        (status = 200, description = "Ranking, distribuição por status e resumo da coleção", body = PainelAnalise),
        (status = 500, description = "Falha ao carregar a coleção")
    )
)]
pub async fn get_analise(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let analise = app_state
        .produto_service
        .analisar()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(montar_painel(analise))))
}

// POST /api/analise
// Analisa uma lista enviada pelo cliente; `null` equivale a lista vazia.
#[utoipa::path(
    post,
    path = "/api/analise",
    tag = "Análise",
    request_body = Vec<Produto>,
    responses(
        (status = 200, description = "Análise da lista enviada", body = PainelAnalise),
        (status = 400, description = "Corpo não é uma lista de produtos")
    )
)]
pub async fn analisar_lista(
    locale: Locale,
    payload: Result<Json<Option<Vec<Produto>>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {

    let Json(produtos) = payload.map_err(|rej| AppError::from(rej).to_api_error(&locale))?;

    let analise = analisar_estoque(produtos.as_deref());
    Ok((StatusCode::OK, Json(montar_painel(analise))))
}
