// src/models/produto.rs

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Cor neutra usada quando o status não está na tabela.
pub const COR_PADRAO: &str = "#6b7280";

// --- 1. Código de exibição ---
// A coleção aceita tanto códigos numéricos quanto alfanuméricos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Codigo {
    Numero(i64),
    Texto(String),
}

impl fmt::Display for Codigo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codigo::Numero(n) => write!(f, "{n}"),
            Codigo::Texto(s) => f.write_str(s),
        }
    }
}

// --- 2. Identificador ---
// Opaco: a coleção pode usar UUID, chave inteira ou texto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IdProduto {
    Numero(i64),
    Uuid(Uuid),
    Texto(String),
}

impl IdProduto {
    /// Interpreta o identificador recebido na rota.
    pub fn interpretar(valor: &str) -> Self {
        if let Ok(n) = valor.parse::<i64>() {
            return IdProduto::Numero(n);
        }
        match Uuid::parse_str(valor) {
            Ok(uuid) => IdProduto::Uuid(uuid),
            Err(_) => IdProduto::Texto(valor.to_string()),
        }
    }

    /// Mesma chave, mesmo que uma venha como texto e a outra como número.
    pub fn corresponde(&self, outro: &IdProduto) -> bool {
        self == outro || self.to_string() == outro.to_string()
    }
}

impl From<Uuid> for IdProduto {
    fn from(uuid: Uuid) -> Self {
        IdProduto::Uuid(uuid)
    }
}

impl fmt::Display for IdProduto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdProduto::Numero(n) => write!(f, "{n}"),
            IdProduto::Uuid(u) => write!(f, "{u}"),
            IdProduto::Texto(s) => f.write_str(s),
        }
    }
}

// --- 3. Produto ---
// Os campos seguem as colunas da coleção `produtos` (snake_case).
// Qualquer campo numérico ausente vale 0; status ausente vale "ok".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Produto {
    pub id: IdProduto,
    pub codigo: Option<Codigo>,
    pub descricao: Option<String>,
    pub disponivel: Option<i64>,
    pub a_caminho: Option<i64>,
    pub estoque_total: Option<i64>,
    #[schema(value_type = Option<f64>)]
    pub nivel_minimo: Option<Decimal>,
    pub status: Option<String>,
}

impl Produto {
    pub fn disponivel_efetivo(&self) -> i64 {
        self.disponivel.unwrap_or(0)
    }

    pub fn a_caminho_efetivo(&self) -> i64 {
        self.a_caminho.unwrap_or(0)
    }

    pub fn estoque_total_efetivo(&self) -> i64 {
        self.estoque_total.unwrap_or(0)
    }

    pub fn nivel_minimo_efetivo(&self) -> Decimal {
        self.nivel_minimo.unwrap_or(Decimal::ZERO)
    }

    pub fn descricao_efetiva(&self) -> &str {
        self.descricao.as_deref().unwrap_or("")
    }

    /// Status bruto normalizado: ausente ou vazio conta como `ok`.
    pub fn status_efetivo(&self) -> &str {
        match self.status.as_deref() {
            None | Some("") => StatusEstoque::Ok.as_str(),
            Some(s) => s,
        }
    }

    /// Verdadeiro quando a quantidade disponível está abaixo do nível mínimo configurado.
    pub fn abaixo_do_minimo(&self) -> bool {
        Decimal::from(self.disponivel_efetivo()) < self.nivel_minimo_efetivo()
    }
}

// --- 4. Status de Estoque ---
// Calculado fora deste serviço; aqui só é lido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusEstoque {
    Critico,
    Baixo,
    Atencao,
    Ok,
}

impl StatusEstoque {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusEstoque::Critico => "critico",
            StatusEstoque::Baixo => "baixo",
            StatusEstoque::Atencao => "atencao",
            StatusEstoque::Ok => "ok",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "critico" => Some(StatusEstoque::Critico),
            "baixo" => Some(StatusEstoque::Baixo),
            "atencao" => Some(StatusEstoque::Atencao),
            "ok" => Some(StatusEstoque::Ok),
            _ => None,
        }
    }

    pub fn descritor(self) -> &'static DescritorStatus {
        // A tabela segue a ordem das variantes.
        &DESCRITORES_STATUS[self as usize]
    }
}

// --- 5. Tabela de apresentação dos status ---
#[derive(Debug, PartialEq, Eq)]
pub struct DescritorStatus {
    pub status: StatusEstoque,
    pub rotulo: &'static str,
    pub cor: &'static str,
    pub icone: &'static str,
}

pub static DESCRITORES_STATUS: [DescritorStatus; 4] = [
    DescritorStatus {
        status: StatusEstoque::Critico,
        rotulo: "Crítico",
        cor: "#ef4444",
        icone: "alert-triangle",
    },
    DescritorStatus {
        status: StatusEstoque::Baixo,
        rotulo: "Baixo",
        cor: "#f97316",
        icone: "trending-up",
    },
    DescritorStatus {
        status: StatusEstoque::Atencao,
        rotulo: "Atenção",
        cor: "#eab308",
        icone: "package",
    },
    DescritorStatus {
        status: StatusEstoque::Ok,
        rotulo: "Ok",
        cor: "#22c55e",
        icone: "check-circle",
    },
];

/// Resolve rótulo e cor de um status bruto. Status fora da tabela usam o
/// próprio texto como rótulo e a cor neutra.
pub fn rotulo_e_cor(status: &str) -> (String, &'static str) {
    match StatusEstoque::parse(status) {
        Some(conhecido) => {
            let descritor = conhecido.descritor();
            (descritor.rotulo.to_string(), descritor.cor)
        }
        None => (status.to_string(), COR_PADRAO),
    }
}

// Opção de status exposta para a tela de filtros.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpcaoStatus {
    pub valor: String,
    pub rotulo: String,
    pub cor: String,
    pub icone: String,
}

impl From<&DescritorStatus> for OpcaoStatus {
    fn from(d: &DescritorStatus) -> Self {
        Self {
            valor: d.status.as_str().to_string(),
            rotulo: d.rotulo.to_string(),
            cor: d.cor.to_string(),
            icone: d.icone.to_string(),
        }
    }
}
