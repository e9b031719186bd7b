//! Repository layer for actor sheets.
//!
//! Sheets are stored with their derived fields already filled in, so reads
//! never need the rules.

mod error;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use memory::InMemoryActorRepo;
pub use traits::ActorRepository;

pub type Result<T> = std::result::Result<T, RepositoryError>;
