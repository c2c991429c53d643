// src/config.rs

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{MemoriaProdutoRepository, ProdutoRepository, ProdutoStore},
    services::produto_service::ProdutoService,
};

pub const ENDERECO_PADRAO: &str = "0.0.0.0:3000";
pub const MAX_CONEXOES_PADRAO: u32 = 5;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub endereco: String,
    pub max_conexoes: u32,
    pub produtos_arquivo: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|chave| env::var(chave).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let max_conexoes = match lookup("DB_MAX_CONEXOES") {
            Some(valor) => valor
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONEXOES inválido: {valor:?}"))?,
            None => MAX_CONEXOES_PADRAO,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            endereco: lookup("ENDERECO").unwrap_or_else(|| ENDERECO_PADRAO.to_string()),
            max_conexoes,
            produtos_arquivo: lookup("PRODUTOS_ARQUIVO").map(PathBuf::from),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub produto_service: ProdutoService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn ProdutoStore> = match &config.database_url {
            Some(database_url) => {
                let db_pool = PgPoolOptions::new()
                    .max_connections(config.max_conexoes)
                    .acquire_timeout(Duration::from_secs(3))
                    .connect(database_url)
                    .await
                    .context("Falha ao conectar ao banco de dados")?;

                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

                sqlx::migrate!()
                    .run(&db_pool)
                    .await
                    .context("Falha ao rodar as migrações do banco de dados")?;

                tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
                Arc::new(ProdutoRepository::new(db_pool))
            }
            None => {
                tracing::warn!("⚠️ DATABASE_URL não definida: usando coleção em memória");
                match &config.produtos_arquivo {
                    Some(caminho) => Arc::new(MemoriaProdutoRepository::from_arquivo(caminho).await?),
                    None => Arc::new(MemoriaProdutoRepository::default()),
                }
            }
        };

        Ok(Self::com_store(store))
    }

    // --- Monta o gráfico de dependências ---
    pub fn com_store(store: Arc<dyn ProdutoStore>) -> Self {
        Self {
            produto_service: ProdutoService::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |chave: &str| vars.get(chave).map(|v| v.to_string())
    }

    #[test]
    fn valores_padrao() {
        let vars = HashMap::new();

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.endereco, ENDERECO_PADRAO);
        assert_eq!(config.max_conexoes, MAX_CONEXOES_PADRAO);
        assert_eq!(config.produtos_arquivo, None);
    }

    #[test]
    fn le_variaveis_definidas() {
        let vars = HashMap::from([
            ("DATABASE_URL", "postgres://localhost/estoque"),
            ("ENDERECO", "127.0.0.1:8080"),
            ("DB_MAX_CONEXOES", "12"),
            ("PRODUTOS_ARQUIVO", "dados/produtos.json"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/estoque"));
        assert_eq!(config.endereco, "127.0.0.1:8080");
        assert_eq!(config.max_conexoes, 12);
        assert_eq!(config.produtos_arquivo, Some(PathBuf::from("dados/produtos.json")));
    }

    #[test]
    fn database_url_vazia_conta_como_ausente() {
        let vars = HashMap::from([("DATABASE_URL", "")]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.database_url, None);
    }

    #[test]
    fn max_conexoes_invalido_e_erro() {
        let vars = HashMap::from([("DB_MAX_CONEXOES", "muitas")]);

        let erro = Config::from_lookup(lookup(&vars)).unwrap_err();

        assert!(erro.to_string().contains("DB_MAX_CONEXOES"));
    }

    #[tokio::test]
    async fn sem_banco_usa_colecao_em_memoria() {
        let vars = HashMap::new();
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        let state = AppState::new(&config).await.unwrap();
        let analise = state.produto_service.analisar().await.unwrap();

        assert_eq!(analise.resumo_geral.total_produtos, 0);
    }
}
