// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_commune;

pub use error::map_sqlx;
pub use postgres_commune::PostgresCommuneRepository;
