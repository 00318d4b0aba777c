//! End-to-end tests running the `denko` binary against a temporary database.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn denko_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_denko"))
}

fn denko(db: &Path, args: &[&str]) -> Output {
    Command::new(denko_bin())
        .arg("--database")
        .arg(db)
        .args(args)
        .env_remove("DENKO_DB")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run denko")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "denko failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_create_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    let created = denko(&db, &["create", "widget", "5"]);
    assert_ok(&created);
    assert!(created.stdout.is_empty());

    let listed = denko(&db, &["list"]);
    assert_ok(&listed);
    assert_eq!(
        stdout(&listed),
        "\n\
         -------------------------------------------\n\
         -       Denko Inventory Management        -\n\
         -------------------------------------------\n\
         - Widget              | 5    -| Misc\n\
         \n"
    );
}

#[test]
fn test_duplicate_create_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    assert_ok(&denko(&db, &["create", "widget", "5"]));
    let second = denko(&db, &["create", "WIDGET", "9"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("Item already tracked: Widget"));

    assert_eq!(stdout(&denko(&db, &["entries"])), "Total entries tracked 1  \n");
    assert!(stdout(&denko(&db, &["ls"])).contains("| 5    -|"));
}

#[test]
fn test_bad_amount_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    let output = denko(&db, &["create", "widget", "many"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid amount 'many'"));
    assert_eq!(stdout(&denko(&db, &["entries"])), "Total entries tracked 0  \n");
}

#[test]
fn test_update_missing_item_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    let output = denko(&db, &["update", "ghost", "3"]);
    assert_ok(&output);
    assert!(output.stdout.is_empty());
    assert_eq!(stdout(&denko(&db, &["entries"])), "Total entries tracked 0  \n");
}

#[test]
fn test_decrease_aliases_and_no_floor() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    assert_ok(&denko(&db, &["create", "Widget", "1"]));
    assert_ok(&denko(&db, &["decrease", "widget"]));
    assert_ok(&denko(&db, &["d", "WIDGET"]));
    assert_ok(&denko(&db, &["dec", "Widget"]));

    assert!(stdout(&denko(&db, &["l"])).contains("- Widget              | -2   -| Misc\n"));
}

#[test]
fn test_decrease_missing_item_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    let output = denko(&db, &["dec", "ghost"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Item not found: Ghost"));
}

#[test]
fn test_remove_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    for name in ["alpha", "beta", "gamma"] {
        assert_ok(&denko(&db, &["create", name, "1"]));
    }
    assert_ok(&denko(&db, &["rm", "alpha"]));
    assert_ok(&denko(&db, &["rem", "BETA"]));
    assert_ok(&denko(&db, &["remove", "nothing"]));

    assert_eq!(stdout(&denko(&db, &["entries"])), "Total entries tracked 1  \n");
}

#[test]
fn test_namespace_listing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    assert_ok(&denko(&db, &["create", "hammer", "2", "tools"]));
    assert_ok(&denko(&db, &["create", "apple", "6", "food"]));

    assert_eq!(
        stdout(&denko(&db, &["namespace", "tools"])),
        "Tools\n\t- Hammer              | 2    -| Tools\n"
    );
    assert_eq!(stdout(&denko(&db, &["nm", "garden"])), "Garden\n");
    assert_eq!(stdout(&denko(&db, &["name"])), "No namespace given\n");
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("inventory.db");

    let created = denko(&db, &["--json", "create", "bolt", "40", "hardware"]);
    assert_ok(&created);
    let value: serde_json::Value = serde_json::from_slice(&created.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["item"], "Bolt");

    let entries = denko(&db, &["entries", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&entries.stdout).unwrap();
    assert_eq!(value["data"]["entries"], 1);
}

#[test]
fn test_database_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("denko.toml");
    let db = dir.path().join("stock").join("shop.db");
    std::fs::write(&config, format!("database = {:?}\n", db.to_string_lossy())).unwrap();

    let output = Command::new(denko_bin())
        .arg("--config")
        .arg(&config)
        .args(["create", "widget", "5"])
        .env_remove("DENKO_DB")
        .output()
        .unwrap();
    assert_ok(&output);
    assert!(db.exists());
}

#[test]
fn test_database_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("env.db");

    let output = Command::new(denko_bin())
        .current_dir(dir.path())
        .env("DENKO_DB", &db)
        .args(["create", "widget", "5"])
        .output()
        .unwrap();
    assert_ok(&output);
    assert!(db.exists());
}

#[test]
fn test_default_database_location() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(denko_bin())
        .current_dir(dir.path())
        .env_remove("DENKO_DB")
        .args(["entries"])
        .output()
        .unwrap();
    assert_ok(&output);
    assert!(dir.path().join("data").join("inventory.db").exists());
}

#[test]
fn test_unopenable_database_fails() {
    let dir = tempfile::tempdir().unwrap();

    // A directory cannot be opened as a database file
    let output = denko(dir.path(), &["entries"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not open inventory"));
}
