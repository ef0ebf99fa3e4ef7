// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = "[package]\nname = \"infra\"\nversion = \"1.4.2\"\n";

fn run_cli(workdir: &Path, args: &[&str]) -> Output {
    // Keep git from discovering a repository above the scratch directory
    let ceiling = workdir.parent().unwrap_or(workdir);

    Command::new(env!("CARGO_BIN_EXE_auto-version"))
        .args(args)
        .current_dir(workdir)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("auto-version"));
    assert!(stdout.contains("Bump the project version"));
}

#[test]
fn test_invalid_bump_type_exits_before_touching_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    let output = run_cli(dir.path(), &["foo"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid bump type 'foo'. Use: major, minor, or patch"));
    assert_eq!(
        fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
        MANIFEST
    );
    assert!(!dir.path().join("wix").exists());
}

#[test]
fn test_unknown_arguments_exit_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    for args in [&["-x"][..], &["patch", "extra"][..]] {
        let output = run_cli(dir.path(), args);

        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("ERROR:"));
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
        MANIFEST
    );
}

#[test]
fn test_version_flag_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["--version"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("auto-version"));
}

#[test]
fn test_dry_run_exits_zero_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    let output = run_cli(dir.path(), &["major", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2.0.0"));
    assert!(stdout.contains("chore: bump version to 2.0.0"));
    assert!(stdout.contains("v2.0.0"));
    assert_eq!(
        fs::read_to_string(dir.path().join("Cargo.toml")).unwrap(),
        MANIFEST
    );
}

#[test]
fn test_commit_failure_exits_one() {
    // Not a repository: staging fails, so no tag or push is attempted
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to create version commit"));
    assert!(!stdout.contains("Created tag"));
    assert!(!stdout.contains("Pushed tag"));

    // Patching ran before the commit step, defaulting to a patch bump
    let manifest = fs::read_to_string(dir.path().join("Cargo.toml")).unwrap();
    assert!(manifest.contains("version = \"1.4.3\""));
}

#[test]
fn test_workdir_flag() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("Cargo.toml"), MANIFEST).unwrap();

    let output = run_cli(
        dir.path(),
        &["minor", "--dry-run", "--workdir", project.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.5.0"));
}
