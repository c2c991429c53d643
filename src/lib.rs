//! Monitor de estoque: lista produtos, ajusta o nível mínimo de cada um e
//! deriva os dados da tela de análise (ranking de menor estoque, distribuição
//! por status, listas de críticos/baixo estoque e totais).
//!
//! - [`services::analise_service`]: agregação pura sobre a lista de produtos
//! - [`services::produto_service`]: busca/filtro e validação do nível mínimo
//! - [`db`]: contrato da coleção `produtos` (Postgres ou memória)
//! - [`handlers`]: rotas HTTP (axum)

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc};

/// Monta o router principal da aplicação.
pub fn criar_router(app_state: AppState) -> Router {
    let produto_routes = Router::new()
        .route("/", get(handlers::produtos::list_produtos))
        .route("/analise", get(handlers::analise::get_analise))
        .route("/{id}/nivel-minimo", patch(handlers::produtos::update_nivel_minimo));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/status", get(handlers::produtos::list_status))
        .route("/api/analise", post(handlers::analise::analisar_lista))
        .nest("/api/produtos", produto_routes)
        .with_state(app_state)
}
