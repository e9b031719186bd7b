//! Sheet runtime orchestrator.
//!
//! The runtime owns the rules, a repository of actor sheets and the damage
//! hooks, and exposes a builder-based API for hosts to drive the engine.

use std::sync::Arc;

use sheet_core::{
    ActorSheet, CostTables, DamageEvent, DamageOutcome, ExperienceMode, RecomputeReport,
    RulesConfig, SheetError,
};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::hooks::{DamageHook, DamageReport, HookRegistry, WoundUpdate};
use crate::repository::{ActorRepository, InMemoryActorRepo};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub rules: RulesConfig,
    pub experience_mode: ExperienceMode,
}

impl RuntimeConfig {
    /// Configuration taking its experience mode from the rules' world setting.
    pub fn from_rules(rules: RulesConfig) -> Self {
        Self {
            experience_mode: rules.experience_mode(),
            rules,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_rules(RulesConfig::default())
    }
}

/// Recomputes, stores and damages actor sheets.
pub struct SheetRuntime {
    config: RuntimeConfig,
    repository: Arc<dyn ActorRepository>,
    hooks: HookRegistry,
}

impl SheetRuntime {
    /// Create a new runtime builder
    pub fn builder() -> SheetRuntimeBuilder {
        SheetRuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Recompute `sheet` and store it under `id`, replacing any previous sheet.
    pub fn insert(&self, id: &str, mut sheet: ActorSheet) -> Result<RecomputeReport> {
        let report = self.recompute_sheet(id, &mut sheet);
        self.repository.save(id, &sheet)?;
        Ok(report)
    }

    /// Recompute the stored sheet for `id` after the rules or base data changed.
    pub fn recompute(&self, id: &str) -> Result<RecomputeReport> {
        let mut sheet = self.load(id)?;
        let report = self.recompute_sheet(id, &mut sheet);
        self.repository.save(id, &sheet)?;
        Ok(report)
    }

    /// Resolve a damage batch against the stored sheet for `id`.
    ///
    /// The new wound track is persisted unless a hook vetoes it. Either way
    /// the hooks are notified and the outcome is returned.
    pub fn apply_damage(&self, id: &str, events: &[DamageEvent]) -> Result<DamageOutcome> {
        let mut sheet = self.load(id)?;
        let outcome = sheet.apply_damage(events);

        let update = WoundUpdate {
            actor_id: id,
            before: sheet.wounds,
            after: outcome.wounds,
        };
        let applied = self.hooks.veto(&update).is_none();

        if applied {
            sheet.wounds.value = outcome.wounds.value;
            sheet.wounds.critical = outcome.wounds.critical;
            self.repository.save(id, &sheet)?;
            info!(
                target: "runtime",
                actor = id,
                hits = events.len(),
                wounds = outcome.wounds.value,
                critical = outcome.wounds.critical,
                "Damage applied"
            );
        }

        self.hooks.notify(&DamageReport {
            actor_id: id,
            actor_name: &sheet.name,
            outcome: &outcome,
            applied,
        });

        Ok(outcome)
    }

    /// Read back the stored sheet for `id`.
    pub fn sheet(&self, id: &str) -> Result<ActorSheet> {
        self.load(id)
    }

    pub fn actor_ids(&self) -> Result<Vec<String>> {
        Ok(self.repository.list_ids()?)
    }

    fn load(&self, id: &str) -> Result<ActorSheet> {
        self.repository
            .load(id)?
            .ok_or_else(|| RuntimeError::ActorNotFound(id.to_owned()))
    }

    fn recompute_sheet(&self, id: &str, sheet: &mut ActorSheet) -> RecomputeReport {
        let rules = &self.config.rules;
        let report = sheet.recompute(rules, rules.hit_locations(), self.config.experience_mode);

        debug!(
            target: "runtime",
            actor = id,
            mode = %self.config.experience_mode,
            xp_remaining = sheet.experience.remaining,
            "Sheet recomputed"
        );
        for warning in &report.warnings {
            warn!(
                target: "runtime",
                actor = id,
                code = warning.error_code(),
                severity = warning.severity().as_str(),
                "{}", warning
            );
        }
        report
    }
}

/// Builder for [`SheetRuntime`].
pub struct SheetRuntimeBuilder {
    rules: RulesConfig,
    experience_mode: Option<ExperienceMode>,
    repository: Option<Arc<dyn ActorRepository>>,
    hooks: Option<HookRegistry>,
}

impl SheetRuntimeBuilder {
    fn new() -> Self {
        Self {
            rules: RulesConfig::default(),
            experience_mode: None,
            repository: None,
            hooks: None,
        }
    }

    /// Override runtime configuration, experience mode included.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.rules = config.rules;
        self.experience_mode = Some(config.experience_mode);
        self
    }

    /// Replace the rules. Unless a mode was set explicitly, the experience
    /// mode follows the rules' world setting.
    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn experience_mode(mut self, mode: ExperienceMode) -> Self {
        self.experience_mode = Some(mode);
        self
    }

    /// Set the sheet repository. Defaults to [`InMemoryActorRepo`].
    pub fn repository(mut self, repository: Arc<dyn ActorRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set custom damage hooks.
    ///
    /// If not provided, [`HookRegistry::default_hooks`] is used.
    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Add one hook to the registry being built.
    pub fn hook(self, hook: Arc<dyn DamageHook>) -> Self {
        let mut hooks: Vec<Arc<dyn DamageHook>> = Vec::new();
        if let Some(registry) = &self.hooks {
            hooks.extend(registry.iter().cloned());
        } else {
            hooks.extend(HookRegistry::default_hooks().iter().cloned());
        }
        hooks.push(hook);
        self.hooks(HookRegistry::new(hooks))
    }

    pub fn build(self) -> Result<SheetRuntime> {
        if self.rules.characteristic_tiers() == 0 {
            return Err(RuntimeError::InvalidConfig(
                "characteristic cost table has no tiers".to_owned(),
            ));
        }

        let experience_mode = self
            .experience_mode
            .unwrap_or_else(|| self.rules.experience_mode());

        Ok(SheetRuntime {
            config: RuntimeConfig {
                rules: self.rules,
                experience_mode,
            },
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(InMemoryActorRepo::new()) as Arc<dyn ActorRepository>),
            hooks: self.hooks.unwrap_or_default(),
        })
    }
}
