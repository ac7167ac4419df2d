// Scenario Catalogue
// Named climate perturbations with pass criteria over the derived outputs

use pargirh_engine::governance::AlertLevel;
use pargirh_engine::types::StatusTier;

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub rain_delta_pct: i32,
    pub temp_delta_c: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub criteria: PassCriteria,
}

pub struct PassCriteria {
    /// Indicator tier every run must land on.
    pub expected_tier: Option<StatusTier>,
    /// Governance level every run must land on.
    pub expected_level: Option<AlertLevel>,
    /// Variation must equal `(rain_factor × temp_factor − 1) × 100`
    /// within this tolerance; the multiplicative model guarantees it.
    pub variation_tolerance: f64,
}

impl Default for PassCriteria {
    fn default() -> Self {
        Self {
            expected_tier: None,
            expected_level: None,
            variation_tolerance: 1e-6,
        }
    }
}

// ─── Scenario Definitions ───────────────────────────────────────────────────

/// Thirty synthetic years, 1955–1984. Expected tiers are only pinned
/// where the scenario pushes the mean far enough from a cut point that
/// generator noise cannot flip the classification.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario { name: "BASELINE", label: "Baseline Climate", category: "reference",
            rain_delta_pct: 0, temp_delta_c: 0.0, start_year: 1955, end_year: 1984,
            criteria: PassCriteria { expected_level: Some(AlertLevel::Warning), ..Default::default() } },
        Scenario { name: "WET_YEAR", label: "Wet Year (+30% rain)", category: "relief",
            rain_delta_pct: 30, temp_delta_c: 0.0, start_year: 1955, end_year: 1984,
            criteria: PassCriteria { expected_tier: Some(StatusTier::Normal),
                expected_level: Some(AlertLevel::Normal), ..Default::default() } },
        Scenario { name: "DROUGHT_MILD", label: "Mild Drought (-20%, +1°C)", category: "stress",
            rain_delta_pct: -20, temp_delta_c: 1.0, start_year: 1955, end_year: 1984,
            criteria: PassCriteria { expected_tier: Some(StatusTier::Alert),
                expected_level: Some(AlertLevel::Warning), ..Default::default() } },
        Scenario { name: "HEATWAVE", label: "Heatwave (+3°C, no rain change)", category: "stress",
            rain_delta_pct: 0, temp_delta_c: 3.0, start_year: 1955, end_year: 1984,
            criteria: PassCriteria { expected_tier: Some(StatusTier::Alert),
                expected_level: Some(AlertLevel::Warning), ..Default::default() } },
        Scenario { name: "DROUGHT_SEVERE", label: "Severe Drought (-50%, +3°C)", category: "stress",
            rain_delta_pct: -50, temp_delta_c: 3.0, start_year: 1955, end_year: 1984,
            criteria: PassCriteria { expected_tier: Some(StatusTier::Crisis),
                expected_level: Some(AlertLevel::Emergency), ..Default::default() } },
        Scenario { name: "DECADE_WINDOW", label: "Baseline, 1970s only", category: "reference",
            rain_delta_pct: 0, temp_delta_c: 0.0, start_year: 1970, end_year: 1979,
            criteria: PassCriteria::default() },
    ]
}
