use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn alokasi(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("alokasi").unwrap();
    cmd.env("ALOKASI_DATA_DIR", data_dir.path())
        .env_remove("ALOKASI_LOG");
    cmd
}

#[test]
fn calc_reports_surplus() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args([
            "calc",
            "--budget",
            "7.000.000",
            "--expense",
            "Rent=2.000.000",
            "--income",
            "Bonus=500.000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.500.000"))
        .stdout(predicate::str::contains("SISA"))
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn calc_accumulates_repeated_label() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["calc", "-b", "1.000", "-e", "A=600", "-e", "A=400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEMUA TERALOKASI"));
}

#[test]
fn calc_json_output() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["calc", "-b", "100", "-e", "Food=150", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"standing\": \"deficit\""))
        .stdout(predicate::str::contains("\"remaining\": -5000"));
}

#[test]
fn calc_rejects_blank_label() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["calc", "-b", "100", "--expense", " =5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("label is required"));
}

#[test]
fn calc_without_budget() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["calc", "-e", "Food=10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget not set"));
}

#[test]
fn calc_uses_saved_default_budget() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "default_budget": 50000 }"#,
    )
    .unwrap();

    alokasi(&dir)
        .args(["calc", "-e", "Food=200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("300"));
}

#[test]
fn config_save_writes_settings() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alokasi Configuration"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn calc_with_out_of_range_budget() {
    let dir = TempDir::new().unwrap();
    alokasi(&dir)
        .args(["calc", "-b", "92.233.720.368.547.758"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget not set"));
}
