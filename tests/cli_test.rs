//! Integration tests for the resume-state binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A command pointed at a store inside `temp`, with extraction disabled.
fn resume_state(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("resume-state"));
    cmd.current_dir(temp.path())
        .env("RESUME_VERSIONS_PATH", temp.path().join("store"))
        .env("RESUME_EXTRACTOR_PATH", temp.path().join("no-extractor"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write_pdf(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("resume.pdf");
    fs::write(&path, b"%PDF-1.4 test").unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("resume-state"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Version tracking"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("resume-state"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn init_creates_project_layout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp)
        .args(["init", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project: demo"));

    let project = temp.path().join("store/projects/demo");
    assert!(project.join("project.json").is_file());
    assert!(project.join("sources").is_dir());
    assert!(project.join("versions").is_dir());
    assert!(project.join("jobs").is_dir());

    let config = fs::read_to_string(temp.path().join("store/config.json"))?;
    assert!(config.contains("\"active_project\": \"demo\""));
    Ok(())
}

#[test]
fn init_twice_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp).args(["init", "demo"]).assert().success();
    resume_state(&temp)
        .args(["init", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Project already exists: demo"));
    Ok(())
}

#[test]
fn demo_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let pdf = write_pdf(temp.path());

    resume_state(&temp).args(["init", "demo"]).assert().success();

    // No extractor scripts, so the import warns and carries on.
    resume_state(&temp)
        .arg("import")
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported as v1 in project: demo"))
        .stderr(predicate::str::contains("Extraction failed"));

    resume_state(&temp)
        .args(["version", "create", "-t", "acme", "-o", "tailor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created v2 in project: demo"));

    let versions = temp.path().join("store/projects/demo/versions");
    assert!(versions.join("v1/resume.yaml").is_file());
    assert!(versions.join("v2_acme/resume.yaml").is_file());
    assert!(temp
        .path()
        .join("store/projects/demo/sources/v1_resume.pdf")
        .is_file());

    resume_state(&temp)
        .args(["version", "switch", "v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to v1"));

    resume_state(&temp)
        .args(["version", "diff", "v1", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences between v1 and v2"));

    resume_state(&temp)
        .args(["version", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* v1     [import ]"))
        .stdout(predicate::str::contains("  v2     [derived]"))
        .stdout(predicate::str::contains("acme - Derived from v1"));

    resume_state(&temp)
        .args(["version", "active"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("v1/resume.yaml\n"));
    Ok(())
}

#[test]
fn strict_import_without_extractor_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let pdf = write_pdf(temp.path());
    resume_state(&temp).args(["init", "demo"]).assert().success();

    resume_state(&temp)
        .arg("import")
        .arg(&pdf)
        .arg("--strict")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Extraction failed"));

    resume_state(&temp)
        .args(["version", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No versions in project: demo"));
    Ok(())
}

#[test]
fn import_rejects_unsupported_type() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let txt = temp.path().join("resume.txt");
    fs::write(&txt, "plain")?;
    resume_state(&temp).args(["init", "demo"]).assert().success();

    resume_state(&temp)
        .arg("import")
        .arg(&txt)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported file type"));
    Ok(())
}

#[test]
fn diff_shows_edits() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let pdf = write_pdf(temp.path());
    resume_state(&temp).args(["init", "demo"]).assert().success();
    resume_state(&temp).arg("import").arg(&pdf).assert().success();
    resume_state(&temp)
        .args(["version", "create"])
        .assert()
        .success();

    let v2 = temp.path().join("store/projects/demo/versions/v2/resume.yaml");
    let edited = fs::read_to_string(&v2)?.replace("summary: ''", "summary: Analyst");
    fs::write(&v2, edited)?;

    resume_state(&temp)
        .args(["version", "diff", "v1", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- v1/resume.yaml"))
        .stdout(predicate::str::contains("+++ v2/resume.yaml"))
        .stdout(predicate::str::contains("+summary: Analyst"));
    Ok(())
}

#[test]
fn export_yaml_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let pdf = write_pdf(temp.path());
    resume_state(&temp).args(["init", "demo"]).assert().success();
    resume_state(&temp).arg("import").arg(&pdf).assert().success();

    let out = temp.path().join("out");
    resume_state(&temp)
        .args(["version", "export", "v1"])
        .arg(&out)
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 file(s)"));

    assert!(out.join("resume.yaml").is_file());
    Ok(())
}

#[test]
fn unknown_version_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp).args(["init", "demo"]).assert().success();

    resume_state(&temp)
        .args(["version", "switch", "v9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Version not found: v9"));
    Ok(())
}

#[test]
fn commands_without_project_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp)
        .args(["version", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no active project"));
    Ok(())
}

#[test]
fn projects_and_use() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp).args(["init", "alpha"]).assert().success();
    resume_state(&temp)
        .args(["init", "beta", "--no-activate"])
        .assert()
        .success();

    resume_state(&temp)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("* alpha"))
        .stdout(predicate::str::contains("  beta"));

    resume_state(&temp).args(["use", "beta"]).assert().success();
    resume_state(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active project: beta"));
    Ok(())
}

#[test]
fn quiet_suppresses_status_messages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resume_state(&temp)
        .args(["--quiet", "init", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("resume-state"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resume-state"));
    Ok(())
}
