use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn squares(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_squares"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run squares binary")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── Success paths ─────────────────────────────────────────────────────────

#[test]
fn prints_unweighted_average() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "1\n2 4\n");

    let out = squares(&[numbers.as_path()]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "7.0\n");
}

#[test]
fn prints_weighted_average() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", " 2\t4 \n");
    let weights = write(&dir, "weights.txt", "1\n\n0.5\n");

    let out = squares(&[numbers.as_path(), Path::new("--weights"), weights.as_path()]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "6.0\n");
}

#[test]
fn fractional_result_is_printed_in_full() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "1 2\n");

    let out = squares(&[numbers.as_path()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2.5\n");
}

// ── Failure paths ─────────────────────────────────────────────────────────

#[test]
fn missing_numbers_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let out = squares(&[missing.as_path()]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("absent.txt"), "stderr: {}", stderr(&out));
}

#[test]
fn missing_weights_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "1 2 3\n");
    let missing = dir.path().join("no_weights.txt");

    let out = squares(&[numbers.as_path(), Path::new("--weights"), missing.as_path()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no_weights.txt"));
}

#[test]
fn bad_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "1 2\nabc\n");

    let out = squares(&[numbers.as_path()]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("'abc' is not a number"), "stderr: {err}");
    assert!(err.contains("line 2"), "stderr: {err}");
}

#[test]
fn length_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "1 2 4\n");
    let weights = write(&dir, "weights.txt", "1 0.5\n");

    let out = squares(&[numbers.as_path(), Path::new("--weights"), weights.as_path()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("same length"), "stderr: {}", stderr(&out));
}

#[test]
fn empty_numbers_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let numbers = write(&dir, "numbers.txt", "  \n\n");

    let out = squares(&[numbers.as_path()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("empty"), "stderr: {}", stderr(&out));
}

#[test]
fn numbers_file_is_required() {
    let out = squares(&[]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("FILE_NUMBERS"));
}

// ── Sample generator ──────────────────────────────────────────────────────

#[test]
fn generated_sample_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Command::new(env!("CARGO_BIN_EXE_generate_sample"))
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(generator.status.success(), "stderr: {}", stderr(&generator));

    let numbers = dir.path().join("numbers.txt");
    let weights = dir.path().join("weights.txt");
    let out = squares(&[numbers.as_path(), Path::new("--weights"), weights.as_path()]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let value: f64 = stdout(&out).trim().parse().unwrap();
    assert!(value.is_finite() && value >= 0.0);
}
