pub mod memory;
pub mod repository;
pub mod seaorm;

pub use memory::InMemoryDinosaurStore;
pub use repository::DinosaurStore;
pub use seaorm::SeaOrmDinosaurStore;
