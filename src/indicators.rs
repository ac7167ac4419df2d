// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Indicator Calculator

use tracing::warn;

use crate::types::{KpiSet, SimulatedPoint, StatusTier};

// ─── Constants ───────────────────────────────────────────────────────────────

/// A month is critical when its projected flow falls strictly below this
/// value (m³/s). The boundary itself is not counted.
pub const CRITICAL_MONTH_FLOW: f64 = 20.0;

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KpiError {
    /// The selected window contains no rows; there is nothing to reduce.
    #[error("selection contains no rows")]
    EmptySelection,
    /// The baseline mean flow is zero, so percent variation is undefined.
    #[error("baseline mean flow is zero; variation is undefined")]
    DivisionUndefined,
}

// ─── Indicator Calculator ────────────────────────────────────────────────────

/// Percent variation of the simulated mean against the baseline mean.
/// Undefined for a zero baseline -- never produces NaN/Inf.
pub fn variation_pct(mean_simulated: f64, mean_base: f64) -> Result<f64, KpiError> {
    if mean_base == 0.0 {
        return Err(KpiError::DivisionUndefined);
    }
    Ok((mean_simulated - mean_base) / mean_base * 100.0)
}

/// Reduce a simulated window to its scalar indicators.
///
/// An empty window is an error the caller turns into a "no data for
/// range" signal. A zero baseline mean is recovered here: the variation
/// is reported as unavailable and every other indicator still computes.
pub fn compute_kpis(simulated: &[SimulatedPoint]) -> Result<KpiSet, KpiError> {
    if simulated.is_empty() {
        return Err(KpiError::EmptySelection);
    }

    let n = simulated.len() as f64;
    let mean_flow = simulated.iter().map(|p| p.simulated_flow).sum::<f64>() / n;
    let mean_base = simulated.iter().map(|p| p.base_flow).sum::<f64>() / n;
    let mean_inertia = simulated.iter().map(|p| p.inertia_3mo).sum::<f64>() / n;

    let variation = match variation_pct(mean_flow, mean_base) {
        Ok(v) => Some(v),
        Err(KpiError::DivisionUndefined) => {
            warn!(mean_flow, "baseline mean is zero; reporting variation as unavailable");
            None
        }
        Err(e) => return Err(e),
    };

    let critical_month_count = simulated
        .iter()
        .filter(|p| p.simulated_flow < CRITICAL_MONTH_FLOW)
        .count() as u32;

    let tier = StatusTier::from_mean_flow(mean_flow);

    Ok(KpiSet {
        mean_flow,
        variation_pct: variation,
        mean_inertia,
        critical_month_count,
        status_tier: tier,
        status_label: tier.label().to_string(),
        status_icon: tier.icon().to_string(),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
