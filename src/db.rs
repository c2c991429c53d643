pub mod produto_repo;
pub use produto_repo::{ProdutoRepository, ProdutoStore};
pub mod memoria_repo;
pub use memoria_repo::MemoriaProdutoRepository;
