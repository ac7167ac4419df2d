// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Type Definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Flow thresholds ─────────────────────────────────────────────────────────

/// Mean-flow cut points for the indicator tiers, evaluated in order
/// (first match wins). Units are m³/s.
pub const CRISIS_FLOW_THRESHOLD: f64 = 20.0;
pub const ALERT_FLOW_THRESHOLD: f64 = 35.0;

/// Hypothesis baked into the climate model: +1 °C removes 5% of flow.
pub const TEMP_FLOW_SENSITIVITY: f64 = 0.05;

// ─── Status Tier ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusTier {
    Crisis = 0,
    Alert = 1,
    Normal = 2,
}

impl StatusTier {
    /// Human-readable situation label shown on the KPI banner.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crisis => "WATER CRISIS",
            Self::Alert => "PREVENTIVE ALERT",
            Self::Normal => "NORMAL OPERATIONS",
        }
    }

    /// Alert marker glyph for metric displays.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Crisis => "🔴",
            Self::Alert => "🟡",
            Self::Normal => "🟢",
        }
    }

    pub fn from_mean_flow(mean_flow: f64) -> Self {
        if mean_flow < CRISIS_FLOW_THRESHOLD {
            Self::Crisis
        } else if mean_flow < ALERT_FLOW_THRESHOLD {
            Self::Alert
        } else {
            Self::Normal
        }
    }
}

// ─── SeriesPoint ─────────────────────────────────────────────────────────────

/// One calendar month of the base hydrology table.
///
/// `real_flow` is the observed gauge reading; forecast-only months carry
/// no observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub base_flow: f64,
    pub inertia_3mo: f64,
    pub month: u32,
    #[serde(default)]
    pub real_flow: Option<f64>,
}

// ─── SimulatedPoint ──────────────────────────────────────────────────────────

/// A base point augmented with the scenario-projected flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedPoint {
    pub date: NaiveDate,
    pub base_flow: f64,
    pub inertia_3mo: f64,
    pub month: u32,
    #[serde(default)]
    pub real_flow: Option<f64>,
    pub simulated_flow: f64,
}

// ─── ScenarioConfig ──────────────────────────────────────────────────────────

/// Operator-selected climate scenario. One instance per render cycle;
/// together with the base series it fully determines the simulation.
///
/// Unknown fields are rejected at deserialization -- the control surface
/// enumerates exactly these four knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Rainfall delta in percent, signed.
    pub rain_delta_pct: i32,
    /// Warming delta in °C, non-negative.
    pub temp_delta_c: f64,
}

impl ScenarioConfig {
    pub const RAIN_DELTA_MIN: i32 = -50;
    pub const RAIN_DELTA_MAX: i32 = 50;
    pub const TEMP_DELTA_MIN: f64 = 0.0;
    pub const TEMP_DELTA_MAX: f64 = 3.0;

    /// Normalize operator input at the control boundary: order the year
    /// range, bound it by the data span, and clamp both deltas to the
    /// slider ranges. The core pipeline never sees out-of-range values.
    pub fn clamped(self, data_span: (i32, i32)) -> Self {
        let (min_year, max_year) = data_span;
        let (mut start, mut end) = (self.start_year, self.end_year);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        Self {
            start_year: start.clamp(min_year, max_year),
            end_year: end.clamp(min_year, max_year),
            rain_delta_pct: self
                .rain_delta_pct
                .clamp(Self::RAIN_DELTA_MIN, Self::RAIN_DELTA_MAX),
            temp_delta_c: self
                .temp_delta_c
                .clamp(Self::TEMP_DELTA_MIN, Self::TEMP_DELTA_MAX),
        }
    }

    pub fn rain_factor(&self) -> f64 {
        1.0 + self.rain_delta_pct as f64 / 100.0
    }

    pub fn temp_factor(&self) -> f64 {
        1.0 - self.temp_delta_c * TEMP_FLOW_SENSITIVITY
    }
}

// ─── KpiSet ──────────────────────────────────────────────────────────────────

/// Scalar indicators derived from one simulated window. Recomputed every
/// cycle, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSet {
    pub mean_flow: f64,
    /// Percent variation against the baseline mean over the same window.
    /// `None` when the baseline mean is zero and the ratio is undefined.
    pub variation_pct: Option<f64>,
    pub mean_inertia: f64,
    pub critical_month_count: u32,
    pub status_tier: StatusTier,
    pub status_label: String,
    pub status_icon: String,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_threshold_order() {
        assert_eq!(StatusTier::from_mean_flow(19.99), StatusTier::Crisis);
        assert_eq!(StatusTier::from_mean_flow(20.0), StatusTier::Alert);
        assert_eq!(StatusTier::from_mean_flow(34.99), StatusTier::Alert);
        assert_eq!(StatusTier::from_mean_flow(35.0), StatusTier::Normal);
    }

    #[test]
    fn config_clamp_orders_and_bounds() {
        let raw = ScenarioConfig {
            start_year: 1990,
            end_year: 1970,
            rain_delta_pct: -80,
            temp_delta_c: 5.0,
        };
        let c = raw.clamped((1955, 1985));
        assert_eq!((c.start_year, c.end_year), (1970, 1985));
        assert_eq!(c.rain_delta_pct, ScenarioConfig::RAIN_DELTA_MIN);
        assert_eq!(c.temp_delta_c, ScenarioConfig::TEMP_DELTA_MAX);
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let json = r#"{"start_year":1970,"end_year":1980,"rain_delta_pct":0,"temp_delta_c":0.0,"extra":1}"#;
        assert!(serde_json::from_str::<ScenarioConfig>(json).is_err());
    }
}
