// tests/release_test.rs
//
// Runs the full release against scratch repositories using the system git.
use auto_version::cli::{run_release, ReleaseArgs};
use auto_version::config::Config;
use auto_version::domain::{BumpKind, Version};
use auto_version::git::SystemGit;
use auto_version::patcher::PatchOutcome;
use auto_version::resolver::resolve_current_version;
use auto_version::AutoVersionError;
use chrono::{TimeZone, Utc};
use git2::Repository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"[package]
name = "infra"
version = "0.9.3"
edition = "2021"

# installer metadata
[package.metadata.wix]
version = "0.9.3"
url = "https://example.com/infra"
"#;

const DESCRIPTOR: &str = r#"<?xml version="1.0"?>
<Wix>
  <Product Name="Infra" Version="$(var.Version)">
    <Property Id="DISPLAY_VERSION" Value="$(var.Version)"/>
  </Product>
</Wix>
"#;

// Helper: working repository on an unborn `main`, with a bare `origin`
fn setup_release_repo() -> (TempDir, TempDir) {
    let work = TempDir::new().expect("Could not create temp dir");
    let remote = TempDir::new().expect("Could not create temp dir");

    Repository::init_bare(remote.path()).expect("Could not init bare repo");

    let repo = Repository::init(work.path()).expect("Could not init git repo");
    repo.set_head("refs/heads/main")
        .expect("Could not point HEAD at main");
    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Could not disable signing");
        config
            .set_bool("tag.gpgsign", false)
            .expect("Could not disable signing");
    }
    repo.remote("origin", remote.path().to_str().unwrap())
        .expect("Could not add origin");

    fs::write(work.path().join("Cargo.toml"), MANIFEST).unwrap();
    fs::create_dir_all(work.path().join("wix")).unwrap();
    fs::write(work.path().join("wix/main.wxs"), DESCRIPTOR).unwrap();

    (work, remote)
}

fn release_args(workdir: &Path, bump: BumpKind) -> ReleaseArgs {
    ReleaseArgs {
        bump,
        workdir: workdir.to_path_buf(),
        dry_run: false,
    }
}

#[test]
fn test_full_release_pushes_commit_and_tag() {
    let (work, remote) = setup_release_repo();
    let git = SystemGit::new(work.path());
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();

    let outcome = run_release(
        &release_args(work.path(), BumpKind::Minor),
        &Config::default(),
        &git,
        now,
    )
    .expect("release should succeed");

    assert_eq!(outcome.version, Version::new(0, 10, 0));
    assert_eq!(outcome.tag, "v0.10.0");
    assert!(outcome
        .patched
        .iter()
        .all(|report| report.outcome == PatchOutcome::Updated));

    // Files on disk carry the new version
    let manifest = fs::read_to_string(work.path().join("Cargo.toml")).unwrap();
    assert!(manifest.contains("version = \"0.10.0\"\nedition"));
    assert!(manifest.contains("version = \"0.10.0\"\nurl = \"https://example.com/infra\""));
    assert!(manifest.contains("# installer metadata"));
    assert_eq!(
        resolve_current_version(&work.path().join("Cargo.toml"), "0.1.0").unwrap(),
        "0.10.0"
    );

    let descriptor = fs::read_to_string(work.path().join("wix/main.wxs")).unwrap();
    assert!(descriptor.contains(r#"<Product Name="Infra" Version="0.10.0">"#));
    assert!(descriptor.contains(r#"Value="0.10.0""#));
    assert!(!descriptor.contains("$(var.Version)"));

    // Local history: one release commit and an annotated tag
    let repo = Repository::open(work.path()).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("chore: bump version to 0.10.0\n"));

    let tag_ref = repo.find_reference("refs/tags/v0.10.0").unwrap();
    let tag = tag_ref.peel_to_tag().expect("tag should be annotated");
    let message = tag.message().unwrap();
    assert!(message.starts_with("Infra v0.10.0 - Automated Release"));
    assert!(message.contains("Automatic version bump and release."));
    assert!(message.contains("Date: 2024-03-15 08:30:00 UTC"));

    // Remote received both the branch and the tag
    let bare = Repository::open_bare(remote.path()).unwrap();
    let remote_main = bare.find_reference("refs/heads/main").unwrap();
    assert_eq!(remote_main.target(), Some(head.id()));
    assert!(bare.find_reference("refs/tags/v0.10.0").is_ok());
}

#[test]
fn test_push_failure_is_reported() {
    let (work, remote) = setup_release_repo();
    // Make the remote unreachable after setup
    drop(remote);

    let git = SystemGit::new(work.path());
    let err = run_release(
        &release_args(work.path(), BumpKind::Patch),
        &Config::default(),
        &git,
        Utc::now(),
    )
    .unwrap_err();

    assert!(matches!(err, AutoVersionError::Push(_)));

    // Commit and tag stay in place; there is no rollback
    let repo = Repository::open(work.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v0.9.4").is_ok());
}

#[test]
fn test_nothing_to_commit_fails_before_tag() {
    let (work, _remote) = setup_release_repo();
    let git = SystemGit::new(work.path());

    // Configure the run so that no file exists to patch and nothing is staged
    fs::remove_file(work.path().join("Cargo.toml")).unwrap();
    fs::remove_dir_all(work.path().join("wix")).unwrap();

    let err = run_release(
        &release_args(work.path(), BumpKind::Patch),
        &Config::default(),
        &git,
        Utc::now(),
    )
    .unwrap_err();

    assert!(matches!(err, AutoVersionError::Commit(_)));
    let repo = Repository::open(work.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v0.1.1").is_err());
}
