// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin")

pub mod types;
pub mod series;
pub mod simulation;
pub mod indicators;
pub mod governance;
pub mod audit;
pub mod memo;
pub mod session;

pub use session::{DashboardSession, RecomputeResult};
pub use types::*;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl DashboardSession {
    /// Open a session from the data-loading collaborator's JSON table.
    /// Fails with a blocking message when the series is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(series_json: &str) -> Result<DashboardSession, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let series = series::BaseSeries::from_json(series_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(DashboardSession::from_series(series))
    }

    /// Calendar bounds for the year-range control, as `[first, last]`.
    pub fn year_span(&self) -> JsValue {
        let span = self.series().year_span();
        serde_wasm_bindgen::to_value(&[span.0, span.1]).unwrap_or(JsValue::NULL)
    }

    pub fn set_year_range(&mut self, start_year: i32, end_year: i32) {
        let mut config = self.config();
        config.start_year = start_year;
        config.end_year = end_year;
        self.set_config(config);
    }

    pub fn set_rain_delta(&mut self, pct: i32) {
        let mut config = self.config();
        config.rain_delta_pct = pct;
        self.set_config(config);
    }

    pub fn set_temp_delta(&mut self, celsius: f64) {
        let mut config = self.config();
        config.temp_delta_c = celsius;
        self.set_config(config);
    }

    pub fn scenario_config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.config()).unwrap_or(JsValue::NULL)
    }

    /// One full cycle for the current knobs: simulated series for the
    /// chart, KPIs for the metric tiles, governance scenario for the
    /// status banner and impact bars.
    pub fn recompute(&mut self) -> JsValue {
        let result = self.recompute_core();
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    /// Commit the on-screen decision under the given authority name.
    /// Returns the recorded entry, or null when nothing is on screen.
    pub fn commit_decision(&mut self, authority: &str) -> JsValue {
        match self.commit_decision_core(authority) {
            Some(entry) => serde_wasm_bindgen::to_value(&entry).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Memorandum for the last recompute, or null when there is none.
    pub fn memo(&self) -> JsValue {
        match self.memo_core() {
            Ok(memo) => serde_wasm_bindgen::to_value(&memo).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }

    /// Full decision log, most recent first, for the audit table.
    pub fn audit_log(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.audit_entries()).unwrap_or(JsValue::NULL)
    }
}
