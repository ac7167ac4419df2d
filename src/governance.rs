// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Governance Rule Engine

//! Regulatory classification of a mean-flow reading.
//!
//! Maps the technical indicator (mean flow) onto an administrative
//! scenario: alert level, mandated action, legal citation, and projected
//! per-sector satisfaction. The cut points come from the dam operations
//! manual and deliberately differ from the indicator tiers (20/35); the
//! two scales answer different questions and must not be unified.

use serde::{Deserialize, Serialize};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Regulatory cut points (m³/s), evaluated in order.
pub const EMERGENCY_FLOW_THRESHOLD: f64 = 25.0;
pub const WARNING_FLOW_THRESHOLD: f64 = 40.0;

// ─── Alert Level ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertLevel {
    Emergency = 0,
    Warning = 1,
    Normal = 2,
}

impl AlertLevel {
    /// Banner label for the situational display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Emergency => "RED EMERGENCY",
            Self::Warning => "YELLOW ALERT",
            Self::Normal => "GREEN NORMALITY",
        }
    }

    /// Mandated administrative action.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Emergency => "TOTAL CLOSURE OF AGRICULTURAL IRRIGATION",
            Self::Warning => "RATIONED TURNS (12-HOUR SHIFTS)",
            Self::Normal => "STANDARD OPERATION",
        }
    }

    /// Statutory priority of supply under this level.
    pub fn priority(&self) -> &'static str {
        match self {
            Self::Emergency => "Human consumption exclusively",
            Self::Warning => "Restricted irrigation + human consumption",
            Self::Normal => "All sectors guaranteed",
        }
    }

    /// Legal citation backing the mandated action.
    pub fn legal_basis(&self) -> &'static str {
        match self {
            Self::Emergency => "Art. 4 Water Regulation and Resolution INDRHI-2025",
            Self::Warning => "Seasonal Drought Protocol - Phase 2",
            Self::Normal => "Dam Operations Manual (MOPE)",
        }
    }

    /// Projected sector satisfaction under the mandated action.
    pub fn sector_impact(&self) -> SectorImpact {
        match self {
            Self::Emergency => SectorImpact { agro: 0, urban: 100, energy: 20 },
            Self::Warning => SectorImpact { agro: 50, urban: 90, energy: 60 },
            Self::Normal => SectorImpact { agro: 100, urban: 100, energy: 100 },
        }
    }

    pub fn from_mean_flow(mean_flow: f64) -> Self {
        if mean_flow < EMERGENCY_FLOW_THRESHOLD {
            Self::Emergency
        } else if mean_flow < WARNING_FLOW_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

// ─── Sector Impact ───────────────────────────────────────────────────────────

/// Satisfaction percentage per consuming sector, 0..=100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectorImpact {
    /// Agricultural sector (irrigation boards).
    pub agro: u8,
    /// Urban sector (aqueduct utilities).
    pub urban: u8,
    /// Energy sector (hydroelectric generation).
    pub energy: u8,
}

// ─── Governance Scenario ─────────────────────────────────────────────────────

/// Full administrative scenario for a flow reading: static lookup data
/// keyed by the alert level, carried as one record for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceScenario {
    pub level: AlertLevel,
    pub label: String,
    pub action: String,
    pub priority: String,
    pub legal_basis: String,
    pub sector_impact: SectorImpact,
}

/// Classify a mean flow into its governance scenario. Total over f64.
pub fn classify(mean_flow: f64) -> GovernanceScenario {
    let level = AlertLevel::from_mean_flow(mean_flow);
    GovernanceScenario {
        level,
        label: level.label().to_string(),
        action: level.action().to_string(),
        priority: level.priority().to_string(),
        legal_basis: level.legal_basis().to_string(),
        sector_impact: level.sector_impact(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(24.999).level, AlertLevel::Emergency);
        assert_eq!(classify(25.0).level, AlertLevel::Warning);
        assert_eq!(classify(39.999).level, AlertLevel::Warning);
        assert_eq!(classify(40.0).level, AlertLevel::Normal);
    }

    #[test]
    fn total_over_pathological_inputs() {
        assert_eq!(classify(-12.5).level, AlertLevel::Emergency);
        assert_eq!(classify(1.0e9).level, AlertLevel::Normal);
        // NaN compares false on every `<`, so it lands in the last band.
        assert_eq!(classify(f64::NAN).level, AlertLevel::Normal);
    }

    #[test]
    fn emergency_sacrifices_agro_for_urban_supply() {
        let s = classify(10.0);
        assert_eq!(s.sector_impact, SectorImpact { agro: 0, urban: 100, energy: 20 });
        assert_eq!(s.priority, AlertLevel::Emergency.priority());
    }

    #[test]
    fn warning_rations_all_sectors() {
        let s = classify(30.0);
        assert_eq!(s.sector_impact, SectorImpact { agro: 50, urban: 90, energy: 60 });
    }

    #[test]
    fn normal_guarantees_everyone() {
        let s = classify(55.0);
        assert_eq!(s.sector_impact, SectorImpact { agro: 100, urban: 100, energy: 100 });
        assert_eq!(s.legal_basis, "Dam Operations Manual (MOPE)");
    }
}
