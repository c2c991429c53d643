pub mod produto;
pub mod analise;
