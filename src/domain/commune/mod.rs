pub mod entity;
pub mod identifier;
pub mod repository;
pub mod slug;
pub mod value_objects;

pub use entity::{Commune, NewCommune};
pub use identifier::{IdentifierKind, LegacyIdFormat, classify};
pub use repository::CommuneRepository;
pub use slug::{generate_slug, normalize};
pub use value_objects::{CommuneId, CommuneName, CommuneSlug, PostalCode};
