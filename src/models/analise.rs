// src/models/analise.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::produto::Produto;

// 1. Gráfico de Barras (Top 10 com menor estoque)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRanking {
    pub produto: Produto,
    pub nome: String,       // Descrição truncada para o eixo do gráfico
    pub disponivel: i64,    // Valores já normalizados (ausente = 0)
    pub a_caminho: i64,
}

// 2. Gráfico de Pizza (Distribuição por status)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FatiaStatus {
    pub rotulo: String,
    pub quantidade: usize,
    pub cor: String,
}

// 3. Resumo Geral (Os Cards do Topo)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoGeral {
    pub total_produtos: usize,
    pub total_disponivel: i128,
    pub total_a_caminho: i128,
    pub total_estoque: i128,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnaliseEstoque {
    pub ranking_menor_estoque: Vec<ItemRanking>,
    pub distribuicao_status: Vec<FatiaStatus>,
    pub produtos_criticos: Vec<Produto>,
    pub produtos_baixo_estoque: Vec<Produto>,
    pub resumo_geral: ResumoGeral,
}

/// Recorte de uma lista para exibição: os primeiros itens e quantos ficaram de fora.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destaques {
    pub itens: Vec<Produto>,
    pub restantes: usize,
}

// 4. Painel completo: a análise mais os cartões de alerta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PainelAnalise {
    #[serde(flatten)]
    pub analise: AnaliseEstoque,
    pub destaques_criticos: Destaques,
    pub destaques_baixo_estoque: Destaques,
}
