use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with `HOME` pointed at an empty directory.
fn fitshift(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fitshift").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("FITSHIFT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_generate_json() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(fitshift(&home).args([
        "generate", "--output", "json", "--seed", "42", "-m", "5", "-f", "upper",
    ]));

    assert_eq!(value["total_duration"], 300);
    assert_eq!(value["focus"], "upper");
    assert_eq!(value["name"], "Upper Body Starter Break");
    assert_eq!(value["id"].as_str().unwrap().len(), 9);

    let exercises = value["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 3);
    assert_eq!(exercises[0]["type"], "active");
    for exercise in exercises {
        assert_ne!(exercise["category"], "lower");
        assert_eq!(exercise["difficulty"], "beginner");
    }
}

#[test]
fn test_generate_seed_is_reproducible() {
    let home = TempDir::new().unwrap();
    let args = ["generate", "-o", "json", "--seed", "7", "-m", "20"];

    let first = fitshift(&home).args(args).output().unwrap();
    let second = fitshift(&home).args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_pretty() {
    let home = TempDir::new().unwrap();
    fitshift(&home)
        .args(["generate", "-f", "lower", "-d", "beginner", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lower Body Starter Break"))
        .stdout(predicate::str::contains("10 minutes"));
}

#[test]
fn test_generate_rejects_unlisted_duration() {
    let home = TempDir::new().unwrap();
    fitshift(&home)
        .args(["generate", "-m", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected one of 5, 10, 15, 20"));
}

#[test]
fn test_catalog_list_filtered() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(fitshift(&home).args(["catalog", "list", "--focus", "upper", "-o", "json"]));

    assert_eq!(value["count"], 12);
    let items = value["items"].as_array().unwrap();
    assert!(items.iter().all(|e| e["category"] != "lower"));
}

#[test]
fn test_catalog_show() {
    let home = TempDir::new().unwrap();
    fitshift(&home)
        .args(["catalog", "show", "wall-sit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wall Sit"))
        .stdout(predicate::str::contains("Instructions"));
}

#[test]
fn test_catalog_show_unknown() {
    let home = TempDir::new().unwrap();
    fitshift(&home)
        .args(["catalog", "show", "handstand"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_config_language_selects_catalog() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".fitshift");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "general:\n  language: da\n").unwrap();

    fitshift(&home)
        .args(["catalog", "show", "push-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Armbøjninger"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".fitshift");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.yaml"),
        "rest:\n  min_seconds: 40\n  max_seconds: 10\n",
    )
    .unwrap();

    fitshift(&home)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));

    // config commands still work so the file can be repaired
    fitshift(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    fitshift(&home).arg("generate").assert().success();
}

#[test]
fn test_config_init_and_path() {
    let home = TempDir::new().unwrap();

    fitshift(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".fitshift/config.yaml"));

    fitshift(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
    assert!(home.path().join(".fitshift/config.yaml").exists());

    fitshift(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    fitshift(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitshift"));
}
