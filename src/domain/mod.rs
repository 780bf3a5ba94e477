pub mod commune;
pub mod errors;
