// src/db/memoria_repo.rs

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::{
    common::error::AppError,
    db::ProdutoStore,
    models::produto::{IdProduto, Produto},
};

// Coleção em memória: usada sem DATABASE_URL e nos testes.
#[derive(Default)]
pub struct MemoriaProdutoRepository {
    produtos: RwLock<Vec<Produto>>,
}

impl MemoriaProdutoRepository {
    pub fn new(produtos: Vec<Produto>) -> Self {
        Self {
            produtos: RwLock::new(produtos),
        }
    }

    /// Carrega um arquivo JSON com um array de produtos.
    pub async fn from_arquivo(caminho: &Path) -> anyhow::Result<Self> {
        let conteudo = tokio::fs::read_to_string(caminho)
            .await
            .with_context(|| format!("Falha ao ler {}", caminho.display()))?;

        let produtos: Vec<Produto> = serde_json::from_str(&conteudo)
            .with_context(|| format!("JSON de produtos inválido em {}", caminho.display()))?;

        tracing::info!("📦 {} produtos carregados de {}", produtos.len(), caminho.display());
        Ok(Self::new(produtos))
    }
}

#[async_trait]
impl ProdutoStore for MemoriaProdutoRepository {
    async fn listar_todos(&self) -> Result<Vec<Produto>, AppError> {
        Ok(self.produtos.read().await.clone())
    }

    async fn atualizar_nivel_minimo(
        &self,
        id: &IdProduto,
        nivel_minimo: Decimal,
    ) -> Result<Produto, AppError> {
        let mut produtos = self.produtos.write().await;

        let produto = produtos
            .iter_mut()
            .find(|p| p.id.corresponde(id))
            .ok_or(AppError::ProdutoNaoEncontrado)?;

        produto.nivel_minimo = Some(nivel_minimo);
        Ok(produto.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use uuid::Uuid;

    #[tokio::test]
    async fn carrega_produtos_de_arquivo() {
        let mut arquivo = tempfile::NamedTempFile::new().unwrap();
        write!(
            arquivo,
            r#"[{{"id":"{}","codigo":"A1","disponivel":4,"status":"baixo"}}]"#,
            Uuid::nil()
        )
        .unwrap();

        let repo = MemoriaProdutoRepository::from_arquivo(arquivo.path()).await.unwrap();
        let produtos = repo.listar_todos().await.unwrap();

        assert_eq!(produtos.len(), 1);
        assert_eq!(produtos[0].disponivel, Some(4));
        assert_eq!(produtos[0].status.as_deref(), Some("baixo"));
    }

    #[tokio::test]
    async fn arquivo_invalido_falha_com_contexto() {
        let mut arquivo = tempfile::NamedTempFile::new().unwrap();
        write!(arquivo, "{{ nada }}").unwrap();

        let erro = MemoriaProdutoRepository::from_arquivo(arquivo.path())
            .await
            .err()
            .unwrap();

        assert!(erro.to_string().contains("JSON de produtos inválido"));
    }

    #[tokio::test]
    async fn atualiza_produto_com_chave_inteira() {
        let mut arquivo = tempfile::NamedTempFile::new().unwrap();
        write!(arquivo, r#"[{{"id":7,"disponivel":1}},{{"id":"8","disponivel":2}}]"#).unwrap();
        let repo = MemoriaProdutoRepository::from_arquivo(arquivo.path()).await.unwrap();

        let atualizado = repo
            .atualizar_nivel_minimo(&IdProduto::interpretar("8"), Decimal::TEN)
            .await
            .unwrap();

        assert_eq!(atualizado.id, IdProduto::Texto("8".into()));
        assert_eq!(atualizado.nivel_minimo, Some(Decimal::TEN));
        let produtos = repo.listar_todos().await.unwrap();
        assert_eq!(produtos[0].nivel_minimo, None);
    }

    #[tokio::test]
    async fn atualizar_id_inexistente_retorna_nao_encontrado() {
        let repo = MemoriaProdutoRepository::default();

        let resultado = repo.atualizar_nivel_minimo(&Uuid::new_v4().into(), Decimal::ONE).await;

        assert!(matches!(resultado, Err(AppError::ProdutoNaoEncontrado)));
    }
}
