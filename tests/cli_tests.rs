mod common;
use common::{path_str, setup_images, setup_test_db, slvm, temp_out};

use predicates::prelude::*;
use std::fs;

/// Run `slvm init` against a fresh database with every seed portrait present.
fn init_db(name: &str) -> (String, String) {
    let db_path = setup_test_db(name);
    let images = path_str(&setup_images(name));

    slvm()
        .args(["--db", &db_path, "--images", &images, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data"));

    (db_path, images)
}

#[test]
fn test_init_seeds_once() {
    let (db_path, images) = init_db("cli_init");

    slvm()
        .args(["--db", &db_path, "--images", &images, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_without_portraits_fails() {
    let db_path = setup_test_db("cli_init_no_images");
    let images = setup_images("cli_init_no_images");
    fs::remove_file(images.join("marta.png")).expect("remove portrait");

    slvm()
        .args(["--db", &db_path, "--images", &path_str(&images), "--test", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seed image not found"))
        .stderr(predicate::str::contains("marta.png"));

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_succeeds_once_portraits_are_restored() {
    let db_path = setup_test_db("cli_init_retry");
    let images = setup_images("cli_init_retry");
    let portrait = fs::read(images.join("pep.png")).expect("read portrait");
    fs::remove_file(images.join("pep.png")).expect("remove portrait");

    slvm()
        .args(["--db", &db_path, "--images", &path_str(&images), "--test", "init"])
        .assert()
        .failure();

    fs::write(images.join("pep.png"), portrait).expect("restore portrait");

    slvm()
        .args(["--db", &db_path, "--images", &path_str(&images), "players"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized with some sample data."))
        .stdout(predicate::str::contains("Pep"));
}

#[test]
fn test_players_table() {
    let (db_path, images) = init_db("cli_players");

    slvm()
        .args(["--db", &db_path, "--images", &images, "players"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aina"))
        .stdout(predicate::str::contains("Jordi"))
        .stdout(predicate::str::contains("+1.2"))
        .stdout(predicate::str::contains("17.2"));
}

#[test]
fn test_players_dump_images() {
    let (db_path, images) = init_db("cli_players_dump");
    let out = temp_out("cli_players_dump", "d");

    slvm()
        .args(["--db", &db_path, "--images", &images, "players", "--dump-images", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 portraits written"));

    let bytes = fs::read(format!("{out}/1_aina.png")).expect("portrait written");
    assert!(bytes.ends_with(b"Aina"));
    fs::remove_dir_all(&out).ok();
}

#[test]
fn test_results_table() {
    let (db_path, images) = init_db("cli_results");

    slvm()
        .args(["--db", &db_path, "--images", &images, "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aina"))
        .stdout(predicate::str::contains("Pep"))
        .stdout(predicate::str::contains("15-03-2025"));
}

#[test]
fn test_edit_commits_single_field() {
    let (db_path, images) = init_db("cli_edit");

    slvm()
        .args(["--db", &db_path, "--images", &images, "edit", "0", "--set", "score2=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 updated, 0 added, 0 deleted"));

    let out = temp_out("cli_edit", "csv");
    slvm()
        .args(["--db", &db_path, "--images", &images, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("2025-03-15,Aina,2,Pep,1"), "got: {content}");
}

#[test]
fn test_edit_rejects_unknown_row() {
    let (db_path, images) = init_db("cli_edit_bad_row");

    slvm()
        .args(["--db", &db_path, "--images", &images, "edit", "7", "--set", "score2=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row index 7 is out of range"));
}

#[test]
fn test_add_and_delete() {
    let (db_path, images) = init_db("cli_add_del");

    slvm()
        .args([
            "--db", &db_path, "--images", &images, "add", "--day", "2025-04-01", "--player", "X:3",
            "--player", "Y:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 updated, 1 added, 0 deleted"))
        .stdout(predicate::str::contains("01-04-2025"));

    slvm()
        .args(["--db", &db_path, "--images", &images, "del", "0", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 updated, 0 added, 1 deleted"));

    slvm()
        .args(["--db", &db_path, "--images", &images, "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aina").not())
        .stdout(predicate::str::contains("X"));
}

#[test]
fn test_add_needs_two_players() {
    let (db_path, images) = init_db("cli_add_one_player");

    slvm()
        .args(["--db", &db_path, "--images", &images, "add", "--day", "2025-04-01", "--player", "X:3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid result row"));
}

#[test]
fn test_commit_changeset_file() {
    let (db_path, images) = init_db("cli_commit");
    let changeset = temp_out("cli_commit", "json");
    fs::write(
        &changeset,
        r#"{"edited_rows": {"0": {"score 1": 4}},
            "added_rows": [{"day": "22-03-2025", "p1": "Marta", "s1": 1, "p2": "Jordi", "s2": 3}],
            "deleted_rows": []}"#,
    )
    .expect("write changeset");

    slvm()
        .args(["--db", &db_path, "--images", &images, "commit", "--changeset", &changeset])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 updated, 1 added, 0 deleted"))
        .stdout(predicate::str::contains("Marta"));

    slvm()
        .args(["--db", &db_path, "--images", &images, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_commit_empty_changeset() {
    let (db_path, images) = init_db("cli_commit_empty");
    let changeset = temp_out("cli_commit_empty", "json");
    fs::write(&changeset, r#"{"edited": {}, "added": [], "deleted": []}"#).expect("write");

    slvm()
        .args(["--db", &db_path, "--images", &images, "commit", "--changeset", &changeset])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to commit"));
}

#[test]
fn test_commit_malformed_changeset() {
    let (db_path, images) = init_db("cli_commit_malformed");
    let changeset = temp_out("cli_commit_malformed", "json");
    fs::write(&changeset, r#"{"edited": {}}"#).expect("write");

    slvm()
        .args(["--db", &db_path, "--images", &images, "commit", "--changeset", &changeset])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed changeset"));
}

#[test]
fn test_export_players_json() {
    let (db_path, images) = init_db("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    slvm()
        .args([
            "--db", &db_path, "--images", &images, "export", "--table", "players", "--format",
            "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[3]["name"], "Jordi");
}

#[test]
fn test_backup_copies_database() {
    let (db_path, images) = init_db("cli_backup");
    let out = temp_out("cli_backup", "sqlite");

    slvm()
        .args(["--db", &db_path, "--images", &images, "backup", "--file", &out])
        .assert()
        .success();

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_db_info() {
    let (db_path, images) = init_db("cli_db_info");

    slvm()
        .args(["--db", &db_path, "--images", &images, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("players"))
        .stdout(predicate::str::contains("results"))
        .stdout(predicate::str::contains("from: 15-03-2025"))
        .stdout(predicate::str::contains("2025-03-15").not());
}

#[test]
fn test_db_check_and_vacuum() {
    let (db_path, images) = init_db("cli_db_maintenance");

    slvm()
        .args(["--db", &db_path, "--images", &images, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed."));

    slvm()
        .args(["--db", &db_path, "--images", &images, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacuum completed."));

    slvm()
        .args(["--db", &db_path, "--images", &images, "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aina"));
}

#[test]
fn test_config_print_shows_effective_settings() {
    let (db_path, images) = init_db("cli_config_print");

    slvm()
        .args(["--db", &db_path, "--images", &images, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current configuration"))
        .stdout(predicate::str::contains(db_path.as_str()))
        .stdout(predicate::str::contains("date_format"));
}
