// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Session Core

use serde::Serialize;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::audit::{AuditEntry, AuditLog};
use crate::governance::{classify, GovernanceScenario};
use crate::indicators::{compute_kpis, KpiError};
use crate::memo::{generate_memo, Memo};
use crate::series::BaseSeries;
use crate::simulation::simulate;
use crate::types::{KpiSet, ScenarioConfig, SimulatedPoint};

// ─── DashboardSession struct ─────────────────────────────────────────────────

/// One operator session: the loaded base series, the current scenario
/// knobs, the decision log, and the outputs of the last recompute.
///
/// Created at session start, discarded at session end. The audit log has
/// no life outside the session that owns it.
#[wasm_bindgen]
pub struct DashboardSession {
    pub(crate) series: BaseSeries,
    pub(crate) config: ScenarioConfig,
    pub(crate) audit_log: AuditLog,

    pub(crate) last_simulated: Vec<SimulatedPoint>,
    pub(crate) last_kpis: Option<KpiSet>,
    pub(crate) last_scenario: Option<GovernanceScenario>,
}

// ─── RecomputeResult ─────────────────────────────────────────────────────────

/// Everything one render cycle needs. `kpis` and `governance` are both
/// absent exactly when the selected window has no rows -- the renderer
/// shows "no data for range" instead of metrics.
#[derive(Debug, Clone, Serialize)]
pub struct RecomputeResult {
    pub config: ScenarioConfig,
    pub simulated: Vec<SimulatedPoint>,
    pub kpis: Option<KpiSet>,
    pub governance: Option<GovernanceScenario>,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl DashboardSession {
    /// Open a session over a validated series. The initial scenario covers
    /// the full data span with no climate deltas.
    pub fn from_series(series: BaseSeries) -> Self {
        let (start_year, end_year) = series.year_span();
        Self {
            series,
            config: ScenarioConfig {
                start_year,
                end_year,
                rain_delta_pct: 0,
                temp_delta_c: 0.0,
            },
            audit_log: AuditLog::new(),
            last_simulated: Vec::new(),
            last_kpis: None,
            last_scenario: None,
        }
    }

    /// Replace the scenario knobs. Input is normalized against the data
    /// span and the slider ranges before it reaches the pipeline.
    pub fn set_config(&mut self, config: ScenarioConfig) {
        self.config = config.clamped(self.series.year_span());
    }

    pub fn config(&self) -> ScenarioConfig {
        self.config
    }

    pub fn series(&self) -> &BaseSeries {
        &self.series
    }

    /// Run one full cycle: simulate, reduce to KPIs, classify.
    pub fn recompute_core(&mut self) -> RecomputeResult {
        let simulated = simulate(&self.series, &self.config);

        match compute_kpis(&simulated) {
            Ok(kpis) => {
                let scenario = classify(kpis.mean_flow);
                info!(
                    mean_flow = kpis.mean_flow,
                    tier = kpis.status_label.as_str(),
                    level = scenario.label.as_str(),
                    "recompute cycle complete"
                );
                self.last_simulated = simulated.clone();
                self.last_kpis = Some(kpis.clone());
                self.last_scenario = Some(scenario.clone());
                RecomputeResult {
                    config: self.config,
                    simulated,
                    kpis: Some(kpis),
                    governance: Some(scenario),
                }
            }
            Err(e) => {
                warn!(error = %e, "no data for range");
                self.last_simulated.clear();
                self.last_kpis = None;
                self.last_scenario = None;
                RecomputeResult {
                    config: self.config,
                    simulated,
                    kpis: None,
                    governance: None,
                }
            }
        }
    }

    /// Commit the on-screen decision to the audit log. Returns `None`
    /// when there is nothing on screen to commit (no recompute yet, or
    /// the last selection was empty).
    pub fn commit_decision_core(&mut self, authority: &str) -> Option<AuditEntry> {
        let kpis = self.last_kpis.as_ref()?;
        let scenario = self.last_scenario.as_ref()?;
        let justification = format!("Flow at {:.1} m³/s ({})", kpis.mean_flow, scenario.label);
        let action = scenario.action.clone();
        Some(self.audit_log.append(authority, action, justification).clone())
    }

    /// Render the memorandum for the last recompute.
    pub fn memo_core(&self) -> Result<Memo, KpiError> {
        let kpis = self.last_kpis.as_ref().ok_or(KpiError::EmptySelection)?;
        generate_memo(kpis, &self.last_simulated)
    }

    pub fn audit_entries(&self) -> &[AuditEntry] {
        self.audit_log.list_all()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governance::AlertLevel;
    use crate::types::{SeriesPoint, StatusTier};
    use chrono::NaiveDate;

    fn session() -> DashboardSession {
        let rows = (1..=6)
            .map(|m| SeriesPoint {
                date: NaiveDate::from_ymd_opt(1980, m, 1).unwrap(),
                base_flow: 30.0 + m as f64,
                inertia_3mo: 50.0,
                month: m,
                real_flow: None,
            })
            .collect();
        DashboardSession::from_series(BaseSeries::from_points(rows).unwrap())
    }

    #[test]
    fn initial_config_covers_the_full_span() {
        let s = session();
        assert_eq!(s.config().start_year, 1980);
        assert_eq!(s.config().end_year, 1980);
        assert_eq!(s.config().rain_delta_pct, 0);
    }

    #[test]
    fn recompute_produces_kpis_and_governance_together() {
        let mut s = session();
        let result = s.recompute_core();
        assert_eq!(result.simulated.len(), 6);
        let kpis = result.kpis.expect("kpis for a non-empty window");
        let gov = result.governance.expect("governance for a non-empty window");
        assert_eq!(kpis.status_tier, StatusTier::Alert);
        assert_eq!(gov.level, AlertLevel::Warning);
    }

    #[test]
    fn empty_selection_short_circuits_to_no_data() {
        let mut s = session();
        // Clamping pins operator input back inside the data span, so an
        // empty window only happens through the raw config.
        s.config = ScenarioConfig {
            start_year: 1990,
            end_year: 1995,
            rain_delta_pct: 0,
            temp_delta_c: 0.0,
        };
        let result = s.recompute_core();
        assert!(result.simulated.is_empty());
        assert!(result.kpis.is_none());
        assert!(result.governance.is_none());
        assert!(s.memo_core().is_err());
        assert!(s.commit_decision_core("Operator").is_none());
    }

    #[test]
    fn commit_requires_a_prior_recompute() {
        let mut s = session();
        assert!(s.commit_decision_core("Operator").is_none());

        s.recompute_core();
        let entry = s.commit_decision_core("Shift A").expect("commit after recompute");
        assert_eq!(entry.authority, "Shift A");
        assert!(entry.justification.starts_with("Flow at "));
        assert_eq!(s.audit_entries().len(), 1);
    }

    #[test]
    fn memo_reflects_the_last_recompute() {
        let mut s = session();
        s.recompute_core();
        let memo = s.memo_core().unwrap();
        assert_eq!(memo.period, "1980-06");
        assert_eq!(memo.title, "NOTICE: FLOW RESTRICTIONS");
    }
}
