//! Hook that reports damage logs.

use tracing::info;

use super::{DamageHook, DamageReport};

/// Logs every resolved damage batch, one line per log entry, with the
/// resulting wound and critical totals.
#[derive(Debug, Clone, Copy)]
pub struct CriticalReportHook;

impl DamageHook for CriticalReportHook {
    fn name(&self) -> &'static str {
        "critical_report"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn on_applied(&self, report: &DamageReport<'_>) {
        for entry in &report.outcome.log {
            info!(
                target: "runtime::hooks",
                actor = report.actor_name,
                damage = entry.damage,
                source = %entry.source,
                location = %entry.location,
                damage_type = %entry.damage_type,
                "Damage recorded"
            );
        }
        info!(
            target: "runtime::hooks",
            actor = report.actor_name,
            wounds = report.outcome.wounds.value,
            critical = report.outcome.wounds.critical,
            applied = report.applied,
            "Damage batch resolved"
        );
    }
}
