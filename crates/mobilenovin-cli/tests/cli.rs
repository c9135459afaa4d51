//! Integration tests for the `mobilenovin` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary with a scrubbed environment so the host's NODE_ENV/TARGET and
/// settings variables never leak into a test.
fn mobilenovin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mobilenovin").expect("binary built");
    cmd.current_dir(dir.path())
        .env_remove("NODE_ENV")
        .env_remove("TARGET")
        .env_remove("MOBILENOVIN_BUDGET__PRODUCTION")
        .env_remove("MOBILENOVIN_BUDGET__DEVELOPMENT")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn resolve_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = mobilenovin(dir)
        .arg("resolve")
        .args(args)
        .output()
        .expect("run resolve");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

#[test]
fn resolve_defaults_to_development_standard() {
    let dir = TempDir::new().unwrap();
    let config = resolve_json(&dir, &[]);
    assert_eq!(config["request"]["mode"], "development");
    assert_eq!(config["request"]["target"], "standard");
    assert_eq!(config["output"]["filename"], "mobilenovin-ai.js");
    assert_eq!(config["optimization"]["minify"], false);
    assert_eq!(config["budget"]["max_entrypoint_bytes"], 512_000);
    assert_eq!(config["budget"]["enforcement"], "off");
}

#[test]
fn resolve_production_edge_from_env_flags() {
    let dir = TempDir::new().unwrap();
    let config = resolve_json(&dir, &["--env", "NODE_ENV=production", "--env", "TARGET=edge"]);
    assert_eq!(config["output"]["filename"], "mobilenovin-ai-edge.js");
    assert_eq!(config["output"]["exposed_name"], "MobileNovinAI");
    assert_eq!(config["optimization"]["minify"], true);
    assert_eq!(config["optimization"]["reserved_identifiers"][0], "MobileNovinAI");
    assert_eq!(config["budget"]["max_asset_bytes"], 51_200);
    assert_eq!(config["externals"]["crypto"], "commonjs crypto");
}

#[test]
fn resolve_inherits_process_environment() {
    let dir = TempDir::new().unwrap();
    let output = mobilenovin(&dir)
        .env("NODE_ENV", "production")
        .args(["resolve", "--inherit-env", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["request"]["mode"], "production");
    assert_eq!(config["budget"]["enforcement"], "warn");
}

#[test]
fn resolve_ignores_process_environment_by_default() {
    let dir = TempDir::new().unwrap();
    let output = mobilenovin(&dir)
        .env("TARGET", "edge")
        .arg("resolve")
        .output()
        .unwrap();
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["request"]["target"], "standard");
}

#[test]
fn resolve_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let run = || {
        mobilenovin(&dir)
            .args(["resolve", "-e", "NODE_ENV=production", "-e", "TARGET=edge"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn resolve_writes_output_file() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .args(["resolve", "--out", "build/config.json"])
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("build/config.json")).unwrap();
    assert!(written.contains("\"mobilenovin-ai.js\""));
}

#[test]
fn settings_file_selects_fail_enforcement() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mobilenovin.toml"), "[budget]\nproduction = \"fail\"\n").unwrap();
    let config = resolve_json(&dir, &["-e", "NODE_ENV=production"]);
    assert_eq!(config["budget"]["enforcement"], "fail");
}

#[test]
fn missing_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .args(["--settings", "absent.toml", "resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn matrix_lists_four_combinations() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("development  standard  mobilenovin-ai.js"))
        .stdout(predicate::str::contains("production   edge      mobilenovin-ai-edge.js"));

    let output = mobilenovin(&dir).args(["matrix", "--json"]).output().unwrap();
    let configs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(configs.as_array().map(Vec::len), Some(4));
}

#[test]
fn wrap_renders_universal_wrapper() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("factory.js"), "return { ready: true };\n").unwrap();
    mobilenovin(&dir)
        .args(["wrap", "--target", "edge", "--body", "factory.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typeof self !== 'undefined' ? self : this"))
        .stdout(predicate::str::contains(r#"define("MobileNovinAI", [], factory);"#))
        .stdout(predicate::str::contains("return { ready: true };"));
}

#[test]
fn wrap_reports_missing_body() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .args(["wrap", "--body", "nope.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.js"));
}

fn write_artifact(dir: &TempDir, name: &str, len: usize) {
    fs::write(dir.path().join(name), vec![b'x'; len]).unwrap();
}

#[test]
fn check_skips_budget_in_development() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai-edge.js", 80_000);
    mobilenovin(&dir)
        .args(["check", "--entrypoint", "mobilenovin-ai-edge.js", "--target", "edge"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not enforced"));
}

#[test]
fn check_warns_but_succeeds_in_production() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai-edge.js", 80_000);
    mobilenovin(&dir)
        .args([
            "check",
            "--entrypoint",
            "mobilenovin-ai-edge.js",
            "-e",
            "NODE_ENV=production",
            "-e",
            "TARGET=edge",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Size budget exceeded"));
}

#[test]
fn check_passes_within_budget() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai.js", 400_000);
    write_artifact(&dir, "model.bin", 512_000);
    mobilenovin(&dir)
        .args([
            "check",
            "--entrypoint",
            "mobilenovin-ai.js",
            "--asset",
            "model.bin",
            "--mode",
            "production",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("within the size budget"));
}

#[test]
fn check_fails_when_enforcement_is_fail() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai-edge.js", 1_000);
    write_artifact(&dir, "model.bin", 60_000);
    mobilenovin(&dir)
        .env("MOBILENOVIN_BUDGET__PRODUCTION", "fail")
        .args([
            "check",
            "--entrypoint",
            "mobilenovin-ai-edge.js",
            "--asset",
            "model.bin",
            "--mode",
            "production",
            "--target",
            "edge",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ Size budget exceeded; failing the build"))
        .stderr(predicate::str::contains("model.bin"))
        .stderr(predicate::str::contains("51200"));
}

#[test]
fn quiet_check_prints_nothing_on_success() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai.js", 1_000);
    mobilenovin(&dir)
        .args([
            "--quiet",
            "check",
            "--entrypoint",
            "mobilenovin-ai.js",
            "--mode",
            "production",
        ])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_check_still_reports_failure() {
    let dir = TempDir::new().unwrap();
    write_artifact(&dir, "mobilenovin-ai.js", 600_000);
    mobilenovin(&dir)
        .env("MOBILENOVIN_BUDGET__PRODUCTION", "fail")
        .args([
            "--quiet",
            "check",
            "--entrypoint",
            "mobilenovin-ai.js",
            "--mode",
            "production",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Size budget exceeded; failing the build"));
}

#[test]
fn resolve_logs_whether_output_is_optimized() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .args(["resolve", "--env", "NODE_ENV=production"])
        .assert()
        .success()
        .stderr(predicate::str::contains("optimized=true"));
}

#[test]
fn check_reports_missing_entrypoint() {
    let dir = TempDir::new().unwrap();
    mobilenovin(&dir)
        .args(["check", "--entrypoint", "dist/missing.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
