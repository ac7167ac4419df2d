// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Memo Generator

//! Executive memorandum rendering.
//!
//! Maps the status tier to a fixed narrative template and interpolates the
//! KPI values plus the report-period label. No external state, no
//! randomness: identical input always renders the identical document.

use serde::{Deserialize, Serialize};

use crate::indicators::KpiError;
use crate::types::{KpiSet, SimulatedPoint, StatusTier};

// ─── Memo document ───────────────────────────────────────────────────────────

/// Structured memorandum, ready for display or printing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Memo {
    /// Filing reference, `PARGIRH-INT-YYYYMM`.
    pub reference: String,
    /// Report period, `YYYY-MM`, from the last month evaluated.
    pub period: String,
    pub title: String,
    pub status_icon: String,
    /// Data-intelligence section: projected flow, variation, soil inertia.
    pub data_lines: [String; 3],
    /// Socio-economic impact on the agricultural sector.
    pub agro_impact: Vec<String>,
    /// Socio-economic impact on urban supply.
    pub urban_impact: String,
    /// Operating directives, exactly three per level.
    pub directives: [String; 3],
}

// ─── Templates ───────────────────────────────────────────────────────────────

fn title_for(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Crisis => "URGENT: WATER DISASTER DECLARATION",
        StatusTier::Alert => "NOTICE: FLOW RESTRICTIONS",
        StatusTier::Normal => "OPERATIONS REPORT: STABILITY",
    }
}

fn agro_impact_for(tier: StatusTier) -> Vec<String> {
    let lines: &[&str] = match tier {
        StatusTier::Crisis => &[
            "Rice (lower basin): projected total loss from flood-irrigation shortfall.",
            "Banana (northwest line): severe stress; tube-well relief required.",
        ],
        StatusTier::Alert => &[
            "Rice: third-cycle nursery planting prohibited.",
            "Irrigation turns reduced to 3 days per week.",
        ],
        StatusTier::Normal => &["Planting cycle guaranteed in full."],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

fn urban_impact_for(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Crisis => "Santiago utility: 40% deficit; mandatory 48-hour rationing.",
        StatusTier::Alert => "Rural aqueducts: night-time pressure reduction.",
        StatusTier::Normal => "Continuous supply (24/7).",
    }
}

fn directives_for(tier: StatusTier) -> [&'static str; 3] {
    match tier {
        StatusTier::Crisis => [
            "Total closure of the main irrigation canals.",
            "Operate the reservoir at minimum pool, human supply only.",
            "Activate the agricultural contingency fund.",
        ],
        StatusTier::Alert => [
            "Reduce outlet valves by 30%.",
            "Suspend vehicle washing in the urban district.",
            "Monitor infiltration daily.",
        ],
        StatusTier::Normal => [
            "Hold the operating guide curve.",
            "Run preventive maintenance on the gates.",
            "Maximize hydroelectric generation.",
        ],
    }
}

// ─── Memo Generator ──────────────────────────────────────────────────────────

/// Render the memorandum for one evaluated window.
///
/// The period label comes from the maximum date of the evaluated series,
/// so the document names the last month it covers.
pub fn generate_memo(kpis: &KpiSet, simulated: &[SimulatedPoint]) -> Result<Memo, KpiError> {
    let last = simulated
        .iter()
        .map(|p| p.date)
        .max()
        .ok_or(KpiError::EmptySelection)?;

    let period = last.format("%Y-%m").to_string();
    let reference = format!("PARGIRH-INT-{}", last.format("%Y%m"));

    let variation_line = match kpis.variation_pct {
        Some(v) => format!("Historical variation: {v:.1}%"),
        None => "Historical variation: n/a (zero baseline)".to_string(),
    };

    let tier = kpis.status_tier;
    Ok(Memo {
        reference,
        period,
        title: title_for(tier).to_string(),
        status_icon: tier.icon().to_string(),
        data_lines: [
            format!("Projected flow: {:.1} m³/s", kpis.mean_flow),
            variation_line,
            format!("Soil inertia: {:.1} mm", kpis.mean_inertia),
        ],
        agro_impact: agro_impact_for(tier),
        urban_impact: urban_impact_for(tier).to_string(),
        directives: directives_for(tier).map(|s| s.to_string()),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
