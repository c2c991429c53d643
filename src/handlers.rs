pub mod analise;
pub mod produtos;
