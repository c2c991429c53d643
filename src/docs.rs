// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Produtos ---
        handlers::produtos::list_status,
        handlers::produtos::list_produtos,
        handlers::produtos::update_nivel_minimo,

        // --- Análise ---
        handlers::analise::get_analise,
        handlers::analise::analisar_lista,
    ),
    components(
        schemas(
            // --- Produtos ---
            models::produto::Codigo,
            models::produto::IdProduto,
            models::produto::Produto,
            models::produto::StatusEstoque,
            models::produto::OpcaoStatus,
            services::produto_service::ProdutoListado,
            services::produto_service::ListaProdutos,

            // --- Payloads ---
            handlers::produtos::EntradaNivelMinimo,
            handlers::produtos::AtualizarNivelMinimoPayload,

            // --- Análise ---
            models::analise::ItemRanking,
            models::analise::FatiaStatus,
            models::analise::ResumoGeral,
            models::analise::AnaliseEstoque,
            models::analise::Destaques,
            models::analise::PainelAnalise,
        )
    ),
    tags(
        (name = "Produtos", description = "Lista, filtros e nível mínimo dos produtos"),
        (name = "Análise", description = "Indicadores e gráficos de saúde do estoque")
    )
)]
pub struct ApiDoc;
