// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Scenario Simulator

use chrono::Datelike;

use crate::series::BaseSeries;
use crate::types::{ScenarioConfig, SimulatedPoint};

// ─── Scenario Simulator ──────────────────────────────────────────────────────

/// Project the base series under a climate scenario.
///
/// Retains the points whose year falls inside the configured range
/// (inclusive on both ends) and derives each month's flow as
///
///   simulated_flow = base_flow × (1 + rain_delta/100) × (1 − temp_delta × 0.05)
///
/// Pure and deterministic: repeated calls with different configs over the
/// same base series are independent. Extreme deltas can drive the
/// projected flow negative; values are reported as computed, unclamped.
pub fn simulate(series: &BaseSeries, config: &ScenarioConfig) -> Vec<SimulatedPoint> {
    let factor_rain = config.rain_factor();
    let factor_temp = config.temp_factor();

    series
        .points()
        .iter()
        .filter(|p| {
            let year = p.date.year();
            year >= config.start_year && year <= config.end_year
        })
        .map(|p| SimulatedPoint {
            date: p.date,
            base_flow: p.base_flow,
            inertia_3mo: p.inertia_3mo,
            month: p.month,
            real_flow: p.real_flow,
            simulated_flow: p.base_flow * factor_rain * factor_temp,
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
