// Basin Scenario Sweep Runner — climate-delta validation over seeded synthetic hydrology
//
// Usage:
//   cargo run --release --bin sweep                  # All scenarios (10 seeds each)
//   cargo run --release --bin sweep -- --runs 3      # Quick mode
//   cargo run --release --bin sweep -- DROUGHT       # Filter by name
//   cargo run --release --bin sweep -- --seed 42     # Custom base seed

mod report;
mod scenarios;
mod synth;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pargirh_engine::governance::classify;
use pargirh_engine::indicators::compute_kpis;
use pargirh_engine::series::BaseSeries;
use pargirh_engine::simulation::simulate;
use pargirh_engine::types::ScenarioConfig;

use report::*;
use scenarios::*;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 10,
        seed: 0,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(10);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Single Run ─────────────────────────────────────────────────────────────

fn run_once(scenario: &Scenario, seed: u64) -> RunResult {
    let points = synth::synthetic_series(1955, 30, seed);
    let series = BaseSeries::from_points(points).expect("synthetic series is valid");

    let config = ScenarioConfig {
        start_year: scenario.start_year,
        end_year: scenario.end_year,
        rain_delta_pct: scenario.rain_delta_pct,
        temp_delta_c: scenario.temp_delta_c,
    };

    let simulated = simulate(&series, &config);
    let kpis = compute_kpis(&simulated).expect("sweep windows are never empty");
    let governance = classify(kpis.mean_flow);

    let expected_variation = (config.rain_factor() * config.temp_factor() - 1.0) * 100.0;
    let criteria = &scenario.criteria;
    let variation_ok = kpis
        .variation_pct
        .map(|v| (v - expected_variation).abs() <= criteria.variation_tolerance)
        .unwrap_or(false);
    let tier_ok = criteria
        .expected_tier
        .map(|t| kpis.status_tier == t)
        .unwrap_or(true);
    let level_ok = criteria
        .expected_level
        .map(|l| governance.level == l)
        .unwrap_or(true);

    RunResult {
        seed,
        months_evaluated: simulated.len(),
        mean_flow: kpis.mean_flow,
        variation_pct: kpis.variation_pct,
        mean_inertia: kpis.mean_inertia,
        critical_month_count: kpis.critical_month_count,
        status_tier: kpis.status_label.clone(),
        alert_level: governance.label.clone(),
        mandated_action: governance.action.clone(),
        pass: variation_ok && tier_ok && level_ok,
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    println!("\n  Basin Scenario Sweep v0.2.0");
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<34} {:>5} {:>10} {:>10} {:>9} {:>8}",
        "Scenario", "Pass%", "Flow", "Var%", "CritMo", "Level");
    println!("  {}", "-".repeat(82));

    let suite_start = Instant::now();
    let mut scenario_reports = Vec::new();

    for scenario in &to_run {
        let runs: Vec<RunResult> = (0..cli.runs as u64)
            .map(|i| run_once(scenario, cli.seed + i))
            .collect();

        let passed = runs.iter().filter(|r| r.pass).count();
        let pass_rate = passed as f64 / runs.len() as f64;
        let flow_stats =
            Stats::from_samples(&runs.iter().map(|r| r.mean_flow).collect::<Vec<_>>());
        let crit_stats = Stats::from_samples(
            &runs.iter().map(|r| r.critical_month_count as f64).collect::<Vec<_>>(),
        );
        let var_mean = Stats::from_samples(
            &runs.iter().filter_map(|r| r.variation_pct).collect::<Vec<_>>(),
        )
        .mean;
        let level = runs.first().map(|r| r.alert_level.clone()).unwrap_or_default();

        println!("  {:<34} {:>4}% {:>10.1} {:>10.1} {:>9.1} {:>8}",
            scenario.label,
            (pass_rate * 100.0) as u32,
            flow_stats.mean,
            var_mean,
            crit_stats.mean,
            level.split_whitespace().next().unwrap_or("-"),
        );

        scenario_reports.push(ScenarioReport {
            scenario_name: scenario.name.to_string(),
            label: scenario.label.to_string(),
            category: scenario.category.to_string(),
            n_runs: runs.len(),
            pass_rate,
            mean_flow: flow_stats,
            critical_month_count: crit_stats,
            individual_runs: runs,
        });
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Summary ────────────────────────────────────────────────────────

    let total = scenario_reports.len();
    let passed = scenario_reports.iter().filter(|r| r.pass_rate >= 1.0).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(82));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.2}s\n",
        total, passed, failed, suite_elapsed.as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock before epoch").as_millis();
    let timestamp = format!("{}", ts);

    let sweep_report = SweepReport {
        timestamp: timestamp.clone(),
        version: "0.2.0",
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        scenarios: scenario_reports,
    };

    let dir = std::path::Path::new("sweep-results");
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create sweep-results/");
    }
    let path = dir.join(format!("sweep-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&sweep_report).expect("Failed to serialize");
    std::fs::write(&path, &json).expect("Failed to write sweep report");
    println!("  Results saved to: {}\n", path.display());

    if failed > 0 {
        std::process::exit(1);
    }
}
