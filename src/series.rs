// Copyright 2026 Hypermesh Foundation. All rights reserved.
// PARGIRH Water Governance Suite ("The Basin") - Base Series

//! Validated base hydrology series.
//!
//! The series is the one external input the engine depends on: an ordered
//! table of monthly points (date, IA-derived flow, 3-month soil inertia,
//! optional observed flow). It is parsed and validated once at session
//! start and never mutated afterwards.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::types::SeriesPoint;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Base-series loading failures. All of these are blocking: without a
/// readable series there is no session to run.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("base series could not be parsed: {0}")]
    Unreadable(#[from] serde_json::Error),
    #[error("base series contains no rows")]
    Empty,
    #[error("base series rows are not in chronological order (row {0})")]
    OutOfOrder(usize),
}

// ─── BaseSeries ──────────────────────────────────────────────────────────────

/// Immutable, chronologically ordered monthly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSeries {
    points: Vec<SeriesPoint>,
}

impl BaseSeries {
    /// Validate and wrap an already-parsed table.
    pub fn from_points(points: Vec<SeriesPoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::OutOfOrder(i + 1));
            }
        }
        Ok(Self { points })
    }

    /// Parse a JSON array of rows, then validate. This is the wire format
    /// the data-loading collaborator hands over.
    pub fn from_json(json: &str) -> Result<Self, SeriesError> {
        let points: Vec<SeriesPoint> = serde_json::from_str(json)?;
        Self::from_points(points)
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last calendar year covered by the data. Bounds for the
    /// operator's year-range control.
    pub fn year_span(&self) -> (i32, i32) {
        // Non-empty by construction.
        let first = self.points.first().map(|p| p.date.year()).unwrap_or(0);
        let last = self.points.last().map(|p| p.date.year()).unwrap_or(0);
        (first, last)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, flow: f64) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            base_flow: flow,
            inertia_3mo: 50.0,
            month: m,
            real_flow: None,
        }
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            BaseSeries::from_points(vec![]),
            Err(SeriesError::Empty)
        ));
    }

    #[test]
    fn rejects_out_of_order_rows() {
        let rows = vec![point(2020, 3, 30.0), point(2020, 1, 28.0)];
        assert!(matches!(
            BaseSeries::from_points(rows),
            Err(SeriesError::OutOfOrder(1))
        ));
    }

    #[test]
    fn year_span_covers_first_and_last_row() {
        let rows = vec![point(1955, 1, 30.0), point(1960, 6, 28.0), point(1985, 12, 33.0)];
        let series = BaseSeries::from_points(rows).unwrap();
        assert_eq!(series.year_span(), (1955, 1985));
    }

    #[test]
    fn parses_json_rows_with_optional_observed_flow() {
        let json = r#"[
            {"date":"2020-01-01","base_flow":30.0,"inertia_3mo":50.0,"month":1,"real_flow":31.0},
            {"date":"2020-02-01","base_flow":40.0,"inertia_3mo":60.0,"month":2}
        ]"#;
        let series = BaseSeries::from_json(json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].real_flow, Some(31.0));
        assert_eq!(series.points()[1].real_flow, None);
    }

    #[test]
    fn garbage_json_is_unreadable() {
        assert!(matches!(
            BaseSeries::from_json("not a table"),
            Err(SeriesError::Unreadable(_))
        ));
    }
}
