//! Damage hook system.
//!
//! Hooks let a host take part in damage application without the engine
//! knowing about it:
//! - Before wounds are persisted, every hook may veto the update
//! - After the batch resolves, every hook is told what happened
//!
//! # Execution Order
//!
//! Hooks are sorted by priority (lower values run first). The first veto
//! stops the remaining `allow` checks; report notifications always reach
//! every hook.

mod context;
mod critical;
mod registry;

pub use context::{DamageReport, WoundUpdate};
pub use critical::CriticalReportHook;
pub use registry::HookRegistry;

/// Hook observing and gating damage application.
pub trait DamageHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    /// Returns false to keep the wound update from being persisted.
    fn allow(&self, _update: &WoundUpdate<'_>) -> bool {
        true
    }

    /// Called once per resolved batch with a non-empty damage log, whether or
    /// not the update was persisted.
    fn on_applied(&self, _report: &DamageReport<'_>) {}
}
