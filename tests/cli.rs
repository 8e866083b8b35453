#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("grounding").unwrap()
}

#[test]
fn calc_single_rod_text() {
    cmd()
        .args(["calc", "--kind", "1", "--rho", "100", "--length", "2.4", "--diameter", "0.016"])
        .assert()
        .success()
        .stdout(contains("35.79 Ω"))
        .stdout(contains("non-compliant"))
        .stdout(contains("Add more rods in parallel"));
}

#[test]
fn calc_rod_array_reports_minimum_count() {
    cmd()
        .args([
            "calc", "--kind", "rod-array", "--rho", "100", "--count", "4", "--length", "2.4",
            "--diameter", "0.016", "--spacing", "3",
        ])
        .assert()
        .success()
        .stdout(contains("13.77 Ω"))
        .stdout(contains("Minimum rods for ≤ 10 Ω: 8"));
}

#[test]
fn calc_grid_json() {
    let output = cmd()
        .args([
            "--json", "calc", "--kind", "ground-grid", "--rho", "100", "--area", "64",
            "--total-length", "32", "--depth", "0.6",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "power_and_lightning");
    assert!(value["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn unknown_kind_fails() {
    cmd()
        .args(["calc", "--kind", "plate", "--rho", "100"])
        .assert()
        .failure()
        .stderr(contains("unknown electrode type"));
}

#[test]
fn zero_length_fails() {
    cmd()
        .args(["calc", "--kind", "single-rod", "--rho", "100", "--length", "0", "--diameter", "0.016"])
        .assert()
        .failure()
        .stderr(contains("length must be strictly positive"));
}

#[test]
fn missing_geometry_fails() {
    cmd()
        .args(["calc", "--kind", "buried-conductor", "--rho", "100", "--length", "20"])
        .assert()
        .failure()
        .stderr(contains("missing parameter: diameter"));
}

#[test]
fn example_design_round_trips_through_calc() {
    let tmp = TempDir::new().unwrap();
    let design = tmp.path().join("design.json");
    let output = cmd().arg("example").output().unwrap();
    assert!(output.status.success());
    fs::write(&design, &output.stdout).unwrap();

    cmd()
        .args(["calc", "--input"])
        .arg(&design)
        .assert()
        .success()
        .stdout(contains("rods in line"))
        .stdout(contains("13.77 Ω"));
}

#[test]
fn engine_config_switches_rod_array_model() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("engine.json");
    fs::write(&config, r#"{ "rod_array_model": "logarithmic_correction" }"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .args([
            "calc", "--kind", "2", "--rho", "100", "--count", "4", "--length", "2.4",
            "--diameter", "0.016", "--spacing", "3",
        ])
        .assert()
        .success()
        .stdout(contains("11.43 Ω"))
        .stdout(contains("ln(2n/π)"));
}

#[test]
fn bad_engine_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("engine.json");
    fs::write(&config, r#"{ "target_resistance": 0 }"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["example"])
        .assert()
        .failure()
        .stderr(contains("failed to load engine config"));
}

#[test]
fn sweep_prints_csv() {
    cmd()
        .args([
            "sweep", "--kind", "single-rod", "--rho", "100", "--length", "2.4", "--diameter",
            "0.015", "--parameter", "length", "--start", "0.5", "--stop", "10", "--points", "5",
        ])
        .assert()
        .success()
        .stdout(contains("length_m,resistance_ohm,status"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 6));
}

#[test]
fn sweep_rejects_foreign_parameter() {
    cmd()
        .args([
            "sweep", "--kind", "single-rod", "--rho", "100", "--length", "2.4", "--diameter",
            "0.015", "--parameter", "area", "--start", "1", "--stop", "10",
        ])
        .assert()
        .failure()
        .stderr(contains("single-rod has no area parameter"));
}

#[test]
fn compare_lists_every_soil() {
    cmd()
        .args(["compare", "--kind", "single-rod", "--length", "2.4", "--diameter", "0.015", "--rho", "300"])
        .assert()
        .success()
        .stdout(contains("wet clay"))
        .stdout(contains("rock"))
        .stdout(contains("300 Ω·m"));
}

#[test]
fn calc_target_drives_rod_count_advice() {
    cmd()
        .args([
            "calc", "--kind", "rod-array", "--rho", "100", "--count", "4", "--length", "2.4",
            "--diameter", "0.016", "--spacing", "3", "--target", "5",
        ])
        .assert()
        .success()
        .stdout(contains("Minimum rods for ≤ 5 Ω: 18"));

    cmd()
        .args([
            "calc", "--kind", "rod-array", "--rho", "100", "--count", "4", "--length", "2.4",
            "--diameter", "0.016", "--spacing", "3", "--target", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("target_resistance"));
}

#[test]
fn log_resistivity_sweep_uses_default_range() {
    cmd()
        .args([
            "sweep", "--kind", "single-rod", "--length", "2.4", "--diameter", "0.016",
            "--parameter", "resistivity", "--points", "4", "--log",
        ])
        .assert()
        .success()
        .stdout(contains("resistivity_ohm_m,resistance_ohm,status"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 5))
        .stdout(predicate::function(|out: &str| {
            out.lines()
                .nth(1)
                .and_then(|row| row.split(',').next())
                .and_then(|value| value.parse::<f64>().ok())
                .is_some_and(|value| (value - 10.0).abs() < 1e-9)
        }));
}

#[test]
fn length_sweep_requires_bounds() {
    cmd()
        .args([
            "sweep", "--kind", "single-rod", "--rho", "100", "--length", "2.4", "--diameter",
            "0.016", "--parameter", "length", "--stop", "10",
        ])
        .assert()
        .failure()
        .stderr(contains("missing parameter: start"));
}

#[test]
fn compare_prints_csv() {
    cmd()
        .args(["compare", "--kind", "single-rod", "--length", "2.4", "--diameter", "0.015", "--csv"])
        .assert()
        .success()
        .stdout(contains("soil,resistivity_ohm_m,resistance_ohm"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 5));
}
