//! Data handed to damage hooks.

use sheet_core::{DamageOutcome, Wounds};

/// A pending change to an actor's wound track.
#[derive(Clone, Copy, Debug)]
pub struct WoundUpdate<'a> {
    pub actor_id: &'a str,
    pub before: Wounds,
    pub after: Wounds,
}

impl WoundUpdate<'_> {
    /// Ordinary wounds added by the update.
    pub const fn wounds_added(&self) -> i32 {
        self.after.value - self.before.value
    }

    /// Critical wounds added by the update.
    pub const fn critical_added(&self) -> i32 {
        self.after.critical - self.before.critical
    }
}

/// Everything that happened while resolving one damage batch.
#[derive(Clone, Copy, Debug)]
pub struct DamageReport<'a> {
    pub actor_id: &'a str,
    pub actor_name: &'a str,
    pub outcome: &'a DamageOutcome,
    /// False when a hook vetoed the wound update.
    pub applied: bool,
}
