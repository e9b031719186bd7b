//! Data-driven content for the sheet engine.
//!
//! Loaders read the files a host hands the engine:
//! - Rules configuration (TOML): cost tables, hit locations, XP costing flag
//! - Actor sheets (JSON or RON): the camelCase record contract
//! - Damage batches (JSON or RON): ordered hit lists
//!
//! Everything deserializes straight into `sheet-core` types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ContentFactory, DamageLoader, DocumentFormat, LoadResult, RulesLoader,
};
