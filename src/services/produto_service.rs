// src/services/produto_service.rs

use std::sync::Arc;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::error::AppError,
    db::ProdutoStore,
    models::{
        analise::AnaliseEstoque,
        produto::{IdProduto, Produto, StatusEstoque},
    },
    services::analise_service::analisar_estoque,
};

// Valor do filtro de status que desliga o filtro.
pub const TODOS_STATUS: &str = "todos";

// Filtros da tela de lista
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FiltroProdutos {
    /// Trecho da descrição ou do código (sem diferenciar maiúsculas)
    pub busca: Option<String>,
    /// critico | baixo | atencao | ok | todos
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoListado {
    #[serde(flatten)]
    pub produto: Produto,
    pub abaixo_do_minimo: bool,
    pub rotulo_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListaProdutos {
    pub total_encontrado: usize,
    pub produtos: Vec<ProdutoListado>,
}

/// Aplica busca textual e filtro de status, preservando a ordem de entrada.
pub fn filtrar_produtos<'a>(produtos: &'a [Produto], filtro: &FiltroProdutos) -> Vec<&'a Produto> {
    let termo = filtro.busca.as_deref().unwrap_or("").to_lowercase();
    let status = filtro
        .status
        .as_deref()
        .filter(|s| !s.is_empty() && *s != TODOS_STATUS);

    produtos
        .iter()
        .filter(|p| {
            let codigo = p.codigo.as_ref().map(|c| c.to_string()).unwrap_or_default();
            let casa_busca = p.descricao_efetiva().to_lowercase().contains(&termo)
                || codigo.to_lowercase().contains(&termo);
            let casa_status = status.is_none_or(|s| p.status_efetivo() == s);
            casa_busca && casa_status
        })
        .collect()
}

/// Interpreta o texto digitado para o nível mínimo.
///
/// Como um campo numérico de formulário: lê o número do início do texto
/// ("12abc" e "12,5" valem 12) e rejeita com `NivelMinimoInvalido` quando não
/// há número ou quando ele é negativo. `-0` é gravado como 0.
pub fn interpretar_nivel_minimo(entrada: &str) -> Result<Decimal, AppError> {
    let invalido = || AppError::NivelMinimoInvalido(entrada.to_string());

    let valor: f64 = prefixo_numerico(entrada.trim_start())
        .parse()
        .map_err(|_| invalido())?;
    if !valor.is_finite() || valor < 0.0 {
        return Err(invalido());
    }
    if valor == 0.0 {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_f64(valor).ok_or_else(invalido)
}

// Maior prefixo no formato [+-]digitos[.digitos][e[+-]digitos].
fn prefixo_numerico(texto: &str) -> &str {
    let bytes = texto.as_bytes();
    let digitos = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let inicio = i;
    i = digitos(i);
    let mut tem_digitos = i > inicio;
    if bytes.get(i) == Some(&b'.') {
        let fim = digitos(i + 1);
        tem_digitos |= fim > i + 1;
        i = fim;
    }
    if !tem_digitos {
        return "";
    }

    // O expoente só entra se vier com dígitos ("5e" vale 5).
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let sinal = usize::from(matches!(bytes.get(i + 1), Some(b'+' | b'-')));
        let fim = digitos(i + 1 + sinal);
        if fim > i + 1 + sinal {
            i = fim;
        }
    }

    &texto[..i]
}

#[derive(Clone)]
pub struct ProdutoService {
    store: Arc<dyn ProdutoStore>,
}

impl ProdutoService {
    pub fn new(store: Arc<dyn ProdutoStore>) -> Self {
        Self { store }
    }

    pub async fn listar(&self, filtro: &FiltroProdutos) -> Result<ListaProdutos, AppError> {
        let todos = self.store.listar_todos().await?;

        let produtos: Vec<ProdutoListado> = filtrar_produtos(&todos, filtro)
            .into_iter()
            .map(|p| ProdutoListado {
                abaixo_do_minimo: p.abaixo_do_minimo(),
                rotulo_status: StatusEstoque::parse(p.status_efetivo())
                    .map(|s| s.descritor().rotulo.to_string()),
                produto: p.clone(),
            })
            .collect();

        tracing::debug!("{} de {} produtos após filtro", produtos.len(), todos.len());

        Ok(ListaProdutos {
            total_encontrado: produtos.len(),
            produtos,
        })
    }

    pub async fn analisar(&self) -> Result<AnaliseEstoque, AppError> {
        let produtos = self.store.listar_todos().await?;
        Ok(analisar_estoque(Some(&produtos)))
    }

    pub async fn atualizar_nivel_minimo(&self, id: &IdProduto, entrada: &str) -> Result<Produto, AppError> {
        // Validação antes de qualquer escrita.
        let nivel_minimo = match interpretar_nivel_minimo(entrada) {
            Ok(valor) => valor,
            Err(e) => {
                tracing::warn!("Nível mínimo rejeitado para o produto {}: {:?}", id, entrada);
                return Err(e);
            }
        };

        let produto = self.store.atualizar_nivel_minimo(id, nivel_minimo).await?;
        tracing::info!("✅ Nível mínimo do produto {} atualizado para {}", id, nivel_minimo);

        Ok(produto)
    }
}
