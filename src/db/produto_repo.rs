// src/db/produto_repo.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::produto::{Codigo, IdProduto, Produto},
};

// Contrato da coleção "produtos": listar tudo e atualizar um único campo.
#[async_trait]
pub trait ProdutoStore: Send + Sync {
    async fn listar_todos(&self) -> Result<Vec<Produto>, AppError>;

    async fn atualizar_nivel_minimo(
        &self,
        id: &IdProduto,
        nivel_minimo: Decimal,
    ) -> Result<Produto, AppError>;
}

// Linha da tabela `produtos` (o código é sempre TEXT no banco)
#[derive(Debug, FromRow)]
struct ProdutoRow {
    id: Uuid,
    codigo: Option<String>,
    descricao: Option<String>,
    disponivel: Option<i64>,
    a_caminho: Option<i64>,
    estoque_total: Option<i64>,
    nivel_minimo: Option<Decimal>,
    status: Option<String>,
}

impl From<ProdutoRow> for Produto {
    fn from(row: ProdutoRow) -> Self {
        Self {
            id: IdProduto::Uuid(row.id),
            codigo: row.codigo.map(Codigo::Texto),
            descricao: row.descricao,
            disponivel: row.disponivel,
            a_caminho: row.a_caminho,
            estoque_total: row.estoque_total,
            nivel_minimo: row.nivel_minimo,
            status: row.status,
        }
    }
}

const COLUNAS: &str =
    "id, codigo, descricao, disponivel, a_caminho, estoque_total, nivel_minimo, status";

// O repositório de produtos no Postgres
#[derive(Clone)]
pub struct ProdutoRepository {
    pool: PgPool,
}

impl ProdutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProdutoStore for ProdutoRepository {
    async fn listar_todos(&self) -> Result<Vec<Produto>, AppError> {
        // Ordem fixa para que empates no ranking não mudem entre recargas.
        let sql = format!("SELECT {COLUNAS} FROM produtos ORDER BY codigo NULLS LAST, id");

        let rows = sqlx::query_as::<_, ProdutoRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Produto::from).collect())
    }

    async fn atualizar_nivel_minimo(
        &self,
        id: &IdProduto,
        nivel_minimo: Decimal,
    ) -> Result<Produto, AppError> {
        // A tabela usa UUID; qualquer outra chave não existe aqui.
        let IdProduto::Uuid(id) = IdProduto::interpretar(&id.to_string()) else {
            return Err(AppError::ProdutoNaoEncontrado);
        };

        let sql = format!("UPDATE produtos SET nivel_minimo = $1 WHERE id = $2 RETURNING {COLUNAS}");

        let row = sqlx::query_as::<_, ProdutoRow>(&sql)
            .bind(nivel_minimo)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Produto::from).ok_or(AppError::ProdutoNaoEncontrado)
    }
}
