// src/common/i18n.rs

pub const IDIOMA_PADRAO: &str = "pt";

/// Mensagem de erro para o cliente. Idiomas sem tradução caem no português.
pub fn traduzir(chave: &str, idioma: &str) -> &'static str {
    match (chave, idioma) {
        ("validacao", "en") => "One or more fields are invalid.",
        ("validacao", _) => "Um ou mais campos são inválidos.",

        ("nivel_minimo_invalido", "en") => "Enter a valid, non-negative number.",
        ("nivel_minimo_invalido", _) => "Insira um valor numérico válido e não-negativo.",

        ("produto_nao_encontrado", "en") => "Product not found.",
        ("produto_nao_encontrado", _) => "Produto não encontrado.",

        ("corpo_invalido", "en") => "The request body is not valid JSON.",
        ("corpo_invalido", _) => "O corpo da requisição não é um JSON válido.",

        (_, "en") => "An unexpected error occurred.",
        _ => "Ocorreu um erro inesperado.",
    }
}
