//! Host shell around the sheet engine.
//!
//! `sheet-core` is pure: it recomputes a sheet handed to it and returns the
//! result. This crate supplies what a host around it needs:
//! - [`runtime`] hosts [`SheetRuntime`] and its builder
//! - [`repository`] stores actor sheets between calls
//! - [`hooks`] lets hosts veto wound updates and react to damage reports
//!
//! All operations are synchronous; the engine never waits on anything.
pub mod error;
pub mod hooks;
pub mod repository;
pub mod runtime;

pub use error::{Result, RuntimeError};
pub use hooks::{CriticalReportHook, DamageHook, DamageReport, HookRegistry, WoundUpdate};
pub use repository::{ActorRepository, InMemoryActorRepo, RepositoryError};
pub use runtime::{RuntimeConfig, SheetRuntime, SheetRuntimeBuilder};
