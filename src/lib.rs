pub mod cors;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repo;
pub mod routes;
pub mod seed;
pub mod settings;

// Re-export commonly used items for tests / external users
pub use routes::{config, AppState};
pub use repo::inmem::InMemRepo;
