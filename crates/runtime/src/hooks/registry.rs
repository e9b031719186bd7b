//! Hook registry for ordering and running damage hooks.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{CriticalReportHook, DamageHook, DamageReport, WoundUpdate};

/// Registry holding damage hooks in priority order.
#[derive(Clone)]
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn DamageHook>]>,
}

impl HookRegistry {
    /// Creates a registry, sorting hooks by priority (lower values first).
    /// Hooks with equal priority keep their given order.
    pub fn new(mut hooks: Vec<Arc<dyn DamageHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with no hooks.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a registry with the default hooks:
    /// - CriticalReportHook: logs every resolved damage batch
    pub fn default_hooks() -> Self {
        Self::new(vec![Arc::new(CriticalReportHook) as Arc<dyn DamageHook>])
    }

    /// Asks each hook in order whether `update` may be persisted.
    ///
    /// Returns the name of the first hook that vetoed, or `None` when all
    /// hooks allowed it.
    pub fn veto(&self, update: &WoundUpdate<'_>) -> Option<&'static str> {
        let vetoed_by = self
            .hooks
            .iter()
            .find(|hook| !hook.allow(update))
            .map(|hook| hook.name());

        if let Some(name) = vetoed_by {
            warn!(
                target: "runtime::hooks",
                hook = name,
                actor = update.actor_id,
                "Wound update vetoed"
            );
        }
        vetoed_by
    }

    /// Notifies every hook of a resolved batch. Batches with an empty log are
    /// not reported.
    pub fn notify(&self, report: &DamageReport<'_>) {
        if report.outcome.log.is_empty() {
            return;
        }
        for hook in self.hooks.iter() {
            debug!(target: "runtime::hooks", hook = hook.name(), "Notifying hook");
            hook.on_applied(report);
        }
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over the hooks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DamageHook>> + '_ {
        self.hooks.iter()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}
