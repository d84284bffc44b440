use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn create_files(dir: &std::path::Path, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, *name).unwrap();
            path.to_str().unwrap().to_string()
        })
        .collect()
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("renumber")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch-rename files"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("renumber")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_arguments() {
    Command::cargo_bin("renumber")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_pattern_alone_is_not_enough() {
    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_renames_files_in_order() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt", "b.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .args(&files)
        .args(["--start", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed: "))
        .stdout(predicate::str::contains("2 file(s) renamed"));

    assert!(!dir.path().join("a.txt").exists());
    assert!(!dir.path().join("b.txt").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out5.dat")).unwrap(),
        "a.txt"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out6.dat")).unwrap(),
        "b.txt"
    );
}

#[test]
fn test_argument_order_determines_numbering() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .arg(dir.path().join("b.txt"))
        .arg(dir.path().join("a.txt"))
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("out1.dat")).unwrap(),
        "b.txt"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out2.dat")).unwrap(),
        "a.txt"
    );
}

#[test]
fn test_default_start_number_is_one() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .args(&files)
        .assert()
        .success();

    assert!(dir.path().join("out1.dat").exists());
}

#[test]
fn test_negative_start_number() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt", "b.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .args(&files)
        .args(["--start", "-3"])
        .assert()
        .success();

    assert!(dir.path().join("out-3.dat").exists());
    assert!(dir.path().join("out-2.dat").exists());
}

#[test]
fn test_collision_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt", "b.txt"]);
    std::fs::write(dir.path().join("out5.dat"), "seeded").unwrap();

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .args(&files)
        .args(["--start", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped: "))
        .stdout(predicate::str::contains("0 file(s) renamed"));

    // Nothing moved; the seeded file is untouched.
    assert!(dir.path().join("a.txt").exists());
    assert!(dir.path().join("b.txt").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out5.dat")).unwrap(),
        "seeded"
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_directory_input_is_rejected() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .arg(&sub)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not a regular file"));
}

#[test]
fn test_pattern_without_token_reuses_one_name() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt", "b.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("fixed.dat")
        .args(&files)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) renamed"));

    assert!(dir.path().join("fixed.dat").exists());
    assert!(dir.path().join("b.txt").exists());
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .args(["--verbose", "out[N].dat"])
        .args(&files)
        .assert()
        .success();
}

#[test]
fn test_session_log_includes_added_lines() {
    let dir = tempdir().unwrap();
    let files = create_files(dir.path(), &["a.txt"]);

    Command::cargo_bin("renumber")
        .unwrap()
        .arg("out[N].dat")
        .args(&files)
        .assert()
        .success()
        .stdout(predicate::str::contains("added: "))
        .stdout(predicate::str::contains("a.txt"));
}
