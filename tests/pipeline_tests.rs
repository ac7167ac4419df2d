#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pargirh_engine::governance::{classify, AlertLevel};
    use pargirh_engine::indicators::compute_kpis;
    use pargirh_engine::series::BaseSeries;
    use pargirh_engine::simulation::simulate;
    use pargirh_engine::types::{ScenarioConfig, SeriesPoint, StatusTier};
    use pargirh_engine::DashboardSession;

    fn quarter(flows: [f64; 3], inertia: [f64; 3]) -> BaseSeries {
        let rows = (0..3)
            .map(|i| SeriesPoint {
                date: NaiveDate::from_ymd_opt(2020, i as u32 + 1, 1).unwrap(),
                base_flow: flows[i],
                inertia_3mo: inertia[i],
                month: i as u32 + 1,
                real_flow: None,
            })
            .collect();
        BaseSeries::from_points(rows).unwrap()
    }

    fn config(rain: i32, temp: f64) -> ScenarioConfig {
        ScenarioConfig {
            start_year: 2020,
            end_year: 2020,
            rain_delta_pct: rain,
            temp_delta_c: temp,
        }
    }

    // ========== End-to-End: Severe Drought ==========

    #[test]
    fn drought_quarter_lands_in_crisis() {
        let series = quarter([30.0, 40.0, 35.0], [50.0, 60.0, 55.0]);
        let simulated = simulate(&series, &config(-50, 0.0));

        let flows: Vec<f64> = simulated.iter().map(|p| p.simulated_flow).collect();
        assert_eq!(flows, vec![15.0, 20.0, 17.5]);

        let kpis = compute_kpis(&simulated).unwrap();
        assert_eq!(kpis.mean_flow, 17.5);
        assert_eq!(kpis.status_tier, StatusTier::Crisis);
        // The middle month sits exactly on the 20.0 boundary and is not
        // counted under strict `<`.
        assert_eq!(kpis.critical_month_count, 2);
        assert_eq!(kpis.variation_pct, Some(-50.0));

        let governance = classify(kpis.mean_flow);
        assert_eq!(governance.level, AlertLevel::Emergency);
        assert_eq!(governance.sector_impact.agro, 0);
    }

    // ========== End-to-End: Uniformly Low Flow ==========

    #[test]
    fn low_flow_quarter_without_deltas() {
        let series = quarter([10.0, 10.0, 10.0], [40.0, 40.0, 40.0]);
        let simulated = simulate(&series, &config(0, 0.0));

        let flows: Vec<f64> = simulated.iter().map(|p| p.simulated_flow).collect();
        assert_eq!(flows, vec![10.0, 10.0, 10.0]);

        let kpis = compute_kpis(&simulated).unwrap();
        assert_eq!(kpis.status_tier, StatusTier::Crisis);
        assert_eq!(kpis.critical_month_count, 3);
        assert_eq!(kpis.variation_pct, Some(0.0));
    }

    // ========== Governance Boundaries ==========

    #[test]
    fn governance_bands_at_the_cut_points() {
        assert_eq!(classify(24.999).level, AlertLevel::Emergency);
        assert_eq!(classify(25.0).level, AlertLevel::Warning);
        assert_eq!(classify(39.999).level, AlertLevel::Warning);
        assert_eq!(classify(40.0).level, AlertLevel::Normal);
    }

    // ========== Full Session Flow ==========

    #[test]
    fn session_recompute_commit_and_memo() {
        let json = r#"[
            {"date":"2020-01-01","base_flow":30.0,"inertia_3mo":50.0,"month":1,"real_flow":31.0},
            {"date":"2020-02-01","base_flow":40.0,"inertia_3mo":60.0,"month":2,"real_flow":41.0},
            {"date":"2020-03-01","base_flow":35.0,"inertia_3mo":55.0,"month":3}
        ]"#;
        let series = BaseSeries::from_json(json).unwrap();
        let mut session = DashboardSession::from_series(series);

        session.set_config(config(-50, 0.0));
        let result = session.recompute_core();
        let kpis = result.kpis.expect("non-empty window");
        assert_eq!(kpis.mean_flow, 17.5);

        let first = session
            .commit_decision_core("Basin Operator - Shift A")
            .expect("commit after recompute");
        assert_eq!(first.action, "TOTAL CLOSURE OF AGRICULTURAL IRRIGATION");
        assert_eq!(first.justification, "Flow at 17.5 m³/s (RED EMERGENCY)");

        // A relief scenario recomputes and commits a second, newer entry.
        session.set_config(config(30, 0.0));
        session.recompute_core();
        session
            .commit_decision_core("Basin Operator - Shift B")
            .expect("commit after recompute");

        let log = session.audit_entries();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].authority, "Basin Operator - Shift B");
        assert_eq!(log[1].authority, "Basin Operator - Shift A");
        assert!(log[0].seq > log[1].seq);

        let memo = session.memo_core().unwrap();
        assert_eq!(memo.period, "2020-03");
        assert_eq!(memo.title, "OPERATIONS REPORT: STABILITY");
        assert_eq!(memo.directives.len(), 3);
    }

    // ========== Tier Monotonicity Across the Pipeline ==========

    #[test]
    fn tier_is_monotonic_in_rain_delta() {
        let series = quarter([30.0, 40.0, 35.0], [50.0, 60.0, 55.0]);
        let mut last = StatusTier::Crisis as i32;
        for rain in (-50..=50).step_by(10) {
            let simulated = simulate(&series, &config(rain, 0.0));
            let tier = compute_kpis(&simulated).unwrap().status_tier as i32;
            assert!(tier >= last, "tier must not worsen as rain increases (rain {rain})");
            last = tier;
        }
    }
}
