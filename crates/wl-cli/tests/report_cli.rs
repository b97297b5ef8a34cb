//! End-to-end tests for the `wl` binary.
//!
//! Each test writes a work log into a temp directory and runs the built
//! binary with `HOME` pointed there, so no user config is picked up.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn wl_binary() -> String {
    env!("CARGO_BIN_EXE_wl").to_string()
}

fn wl(home: &Path) -> Command {
    let mut command = Command::new(wl_binary());
    command
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("WL_LOG_PATH")
        .env_remove("WL_JSON")
        .env_remove("RUST_LOG");
    command
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "wl should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

const LOG: &str = "\
Notes before the first day are ignored.
* 0600-0700: orphan event

# 2024-01-01
* 0900-1700 with Acme, Co at HQ: Wrote spec
  * Reviewed PR

# TODO: 2024-02-02
* 2200-0200: Night shift

# January 2nd, 2024
* 2330-0030 at Home: Release
* 1300-1300
  * On call
";

#[test]
fn test_text_report() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("work.md");
    std::fs::write(&log, LOG).unwrap();

    let output = wl(temp.path()).arg(&log).output().unwrap();

    assert_eq!(
        stdout(&output),
        "2024-01-01 (worked 8:00:00)\n\
         * Wrote spec\n\
         * Reviewed PR\n\
         \n\
         2024-01-02 (worked 25:00:00)\n\
         * Release\n\
         * On call\n\
         \n\
         Total time worked: 33:00:00\n"
    );
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("work.md");
    std::fs::write(&log, LOG).unwrap();

    let output = wl(temp.path()).arg("--json").arg(&log).output().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-01-01");
    assert_eq!(days[1]["date"], "2024-01-02");
    assert_eq!(days[1]["events"][0]["locations"][0], "Home");
    assert_eq!(days[1]["events"][1]["duration_seconds"], 24 * 3600);
    assert_eq!(json["total"], "33:00:00");
    assert_eq!(json["total_seconds"], 33 * 3600);
}

#[test]
fn test_log_path_from_config_file() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("work.md");
    std::fs::write(&log, "# 2024-01-01\n* 0900-1000: Call\n").unwrap();
    let config = temp.path().join("wl.toml");
    std::fs::write(&config, format!("log_path = {:?}\n", log.display().to_string())).unwrap();

    let output = wl(temp.path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(
        stdout(&output),
        "2024-01-01 (worked 1:00:00)\n* Call\n\nTotal time worked: 1:00:00\n"
    );
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = wl(temp.path())
        .arg(temp.path().join("absent.md"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read work log"));
}

#[test]
fn test_no_log_given_fails() {
    let temp = TempDir::new().unwrap();

    let output = wl(temp.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no work log given"));
}
