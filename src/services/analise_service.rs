// src/services/analise_service.rs

use std::collections::HashMap;

use crate::models::{
    analise::{AnaliseEstoque, Destaques, FatiaStatus, ItemRanking, PainelAnalise, ResumoGeral},
    produto::{Produto, StatusEstoque, rotulo_e_cor},
};

pub const LIMITE_RANKING: usize = 10;
pub const LIMITE_NOME: usize = 20;
// Itens mostrados em cada cartão de alerta antes do "+N".
pub const LIMITE_DESTAQUES: usize = 5;
const RETICENCIAS: &str = "...";

/// Deriva todos os dados da tela de análise a partir da lista de produtos.
///
/// Função pura: não altera a entrada (as ordenações trabalham sobre uma cópia
/// das referências) e entrada ausente equivale a uma lista vazia.
pub fn analisar_estoque(produtos: Option<&[Produto]>) -> AnaliseEstoque {
    let produtos = produtos.unwrap_or_default();

    AnaliseEstoque {
        ranking_menor_estoque: ranking_menor_estoque(produtos),
        distribuicao_status: distribuicao_status(produtos),
        produtos_criticos: filtrar_por_status(produtos, StatusEstoque::Critico),
        produtos_baixo_estoque: filtrar_por_status(produtos, StatusEstoque::Baixo),
        resumo_geral: resumo_geral(produtos),
    }
}

// `sort_by_key` é estável: empates mantêm a ordem original.
fn ordenados_por_disponivel<'a>(produtos: impl Iterator<Item = &'a Produto>) -> Vec<&'a Produto> {
    let mut ordenados: Vec<&Produto> = produtos.collect();
    ordenados.sort_by_key(|p| p.disponivel_efetivo());
    ordenados
}

fn ranking_menor_estoque(produtos: &[Produto]) -> Vec<ItemRanking> {
    ordenados_por_disponivel(produtos.iter())
        .into_iter()
        .take(LIMITE_RANKING)
        .map(|p| ItemRanking {
            nome: truncar_nome(p.descricao_efetiva()),
            disponivel: p.disponivel_efetivo(),
            a_caminho: p.a_caminho_efetivo(),
            produto: p.clone(),
        })
        .collect()
}

/// Corta a descrição em `LIMITE_NOME` caracteres, acrescentando "..." só quando houve corte.
pub fn truncar_nome(descricao: &str) -> String {
    match descricao.char_indices().nth(LIMITE_NOME) {
        Some((corte, _)) => format!("{}{}", &descricao[..corte], RETICENCIAS),
        None => descricao.to_string(),
    }
}

fn distribuicao_status(produtos: &[Produto]) -> Vec<FatiaStatus> {
    // Ordem de saída = ordem em que cada status aparece pela primeira vez.
    let mut ordem: Vec<(&str, usize)> = Vec::new();
    let mut posicoes: HashMap<&str, usize> = HashMap::new();

    for produto in produtos {
        let status = produto.status_efetivo();
        match posicoes.get(status) {
            Some(&i) => ordem[i].1 += 1,
            None => {
                posicoes.insert(status, ordem.len());
                ordem.push((status, 1));
            }
        }
    }

    ordem
        .into_iter()
        .map(|(status, quantidade)| {
            let (rotulo, cor) = rotulo_e_cor(status);
            FatiaStatus {
                rotulo,
                quantidade,
                cor: cor.to_string(),
            }
        })
        .collect()
}

fn filtrar_por_status(produtos: &[Produto], status: StatusEstoque) -> Vec<Produto> {
    let alvo = status.as_str();
    ordenados_por_disponivel(produtos.iter().filter(|p| p.status_efetivo() == alvo))
        .into_iter()
        .cloned()
        .collect()
}

fn resumo_geral(produtos: &[Produto]) -> ResumoGeral {
    produtos.iter().fold(ResumoGeral::default(), |acc, p| ResumoGeral {
        total_produtos: acc.total_produtos + 1,
        total_disponivel: acc.total_disponivel + i128::from(p.disponivel_efetivo()),
        total_a_caminho: acc.total_a_caminho + i128::from(p.a_caminho_efetivo()),
        total_estoque: acc.total_estoque + i128::from(p.estoque_total_efetivo()),
    })
}

/// Primeiros `limite` itens de uma lista já ordenada e quantos ficaram de fora
/// ("+N produtos críticos adicionais").
pub fn destaques(lista: &[Produto], limite: usize) -> Destaques {
    let fim = lista.len().min(limite);
    Destaques {
        itens: lista[..fim].to_vec(),
        restantes: lista.len() - fim,
    }
}

/// Acrescenta à análise os cartões de produtos críticos e de estoque baixo.
pub fn montar_painel(analise: AnaliseEstoque) -> PainelAnalise {
    PainelAnalise {
        destaques_criticos: destaques(&analise.produtos_criticos, LIMITE_DESTAQUES),
        destaques_baixo_estoque: destaques(&analise.produtos_baixo_estoque, LIMITE_DESTAQUES),
        analise,
    }
}
