pub mod analise_service;
pub mod produto_service;
