// nospaces/tests/cli_integration_tests.rs
//! Command-line integration tests for the `nospaces` binary.
//!
//! Each test runs the real executable against a fresh temporary directory via
//! `assert_cmd`. `XDG_CONFIG_HOME` points at an empty temp dir so a user config
//! file on the machine running the tests cannot leak in. Output is passed
//! through `strip_ansi_escapes` before comparison.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

/// Isolated working area: a target directory plus an empty config home.
struct TestEnv {
    target: TempDir,
    config_home: TempDir,
}

impl TestEnv {
    fn new() -> Result<Self> {
        Ok(Self { target: tempdir()?, config_home: tempdir()? })
    }

    fn dir(&self) -> &Path {
        self.target.path()
    }

    fn touch(&self, name: &str) {
        fs::write(self.dir().join(name), name).expect("Failed to create test file");
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo_bin!("nospaces"));
        cmd.env("XDG_CONFIG_HOME", self.config_home.path());
        cmd.env_remove("NOSPACES_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

fn strip_ansi(bytes: &[u8]) -> String {
    let cleaned = strip_ansi_escapes_fn(bytes);
    String::from_utf8_lossy(&cleaned).to_string()
}

#[test]
fn test_renames_directory_given_as_argument() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("holiday photo.jpg");
    env.touch("notes!!.txt");
    env.touch("clean-name.md");
    fs::create_dir(env.dir().join("sub folder"))?;

    let output = env.command().arg(env.dir()).output()?;
    assert!(output.status.success());

    let stdout = strip_ansi(&output.stdout);
    let expected = format!(
        "Renaming files in directory: {}\n\
         No change needed for: clean-name.md\n\
         Renamed: holiday photo.jpg -> holiday_photo.jpg\n\
         Renamed: notes!!.txt -> notes.txt\n\
         Done: 2 renamed, 1 unchanged, 0 skipped, 0 failed.\n",
        env.dir().display()
    );
    assert_eq!(stdout, expected);

    assert!(env.dir().join("holiday_photo.jpg").is_file());
    assert!(env.dir().join("notes.txt").is_file());
    assert!(env.dir().join("sub folder").is_dir());

    let log = fs::read_to_string(env.dir().join("rename_log.txt"))?;
    let expected_log = format!(
        "{} -> {}\n{} -> {}\n",
        env.dir().join("holiday photo.jpg").display(),
        env.dir().join("holiday_photo.jpg").display(),
        env.dir().join("notes!!.txt").display(),
        env.dir().join("notes.txt").display(),
    );
    assert_eq!(log, expected_log);
    Ok(())
}

#[test]
fn test_prompts_for_directory_when_argument_missing() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("a b.txt");

    env.command()
        .write_stdin(format!("{}\n", env.dir().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter the path to the directory you want to clean up:\n"))
        .stdout(predicate::str::contains("Renamed: a b.txt -> a_b.txt"));

    assert!(env.dir().join("a_b.txt").is_file());
    Ok(())
}

#[test]
fn test_no_input_exits_with_status_one() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("a b.txt");

    env.command()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input received. Exiting."));

    assert!(env.dir().join("a b.txt").is_file());
    assert!(!env.dir().join("rename_log.txt").exists());
    Ok(())
}

#[test]
fn test_missing_directory_is_reported_with_status_zero() -> Result<()> {
    let env = TestEnv::new()?;
    let missing = env.dir().join("not here");

    let output = env.command().arg(&missing).output()?;
    assert!(output.status.success());

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("Error: Failed to read directory"), "stderr: {stderr}");
    assert!(stderr.contains("not here"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_second_run_renames_nothing() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("one two.txt");
    env.touch("three (3).pdf");

    env.command().arg(env.dir()).assert().success();
    let output = env.command().arg(env.dir()).output()?;

    let stdout = strip_ansi(&output.stdout);
    assert!(!stdout.contains("Renamed:"), "stdout: {stdout}");
    assert!(stdout.contains("Done: 0 renamed, 2 unchanged"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(env.dir().join("rename_log.txt"))?, "");
    Ok(())
}

#[test]
fn test_collision_does_not_stop_the_run() -> Result<()> {
    let env = TestEnv::new()?;
    fs::write(env.dir().join("x y.txt"), "spaced")?;
    fs::write(env.dir().join("x_y.txt"), "keep me")?;
    env.touch("z z.txt");

    let output = env.command().arg(env.dir()).output()?;
    assert!(output.status.success());

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("target already exists"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(env.dir().join("x_y.txt"))?, "keep me");
    assert!(env.dir().join("z_z.txt").is_file());
    Ok(())
}

#[test]
fn test_dry_run_changes_nothing() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("draft v1.doc");

    env.command()
        .arg("--dry-run")
        .arg(env.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename: draft v1.doc -> draft_v1.doc"))
        .stdout(predicate::str::contains("Dry run complete: 1 renamed"));

    assert!(env.dir().join("draft v1.doc").is_file());
    assert!(!env.dir().join("rename_log.txt").exists());
    Ok(())
}

#[test]
fn test_quiet_prints_only_renames() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("a b.txt");
    env.touch("fine.txt");

    let output = env.command().arg("-q").arg(env.dir()).output()?;
    assert!(output.status.success());
    assert_eq!(strip_ansi(&output.stdout), "Renamed: a b.txt -> a_b.txt\n");
    Ok(())
}

#[test]
fn test_keep_trailing_dot_flag() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("read me");

    env.command().arg("--keep-trailing-dot").arg(env.dir()).assert().success();

    assert!(env.dir().join("read_me.").is_file());
    Ok(())
}

#[test]
fn test_config_file_from_environment() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("a b.txt");
    let config_path = env.config_home.path().join("run.yaml");
    fs::write(&config_path, "log_file_name: changes.log\n")?;

    env.command()
        .env("NOSPACES_CONFIG", &config_path)
        .arg(env.dir())
        .assert()
        .success();

    assert!(env.dir().join("changes.log").is_file());
    assert!(!env.dir().join("rename_log.txt").exists());
    Ok(())
}

#[test]
fn test_user_config_file_is_picked_up() -> Result<()> {
    let env = TestEnv::new()?;
    env.touch("a b.txt");
    let user_dir = env.config_home.path().join("nospaces");
    fs::create_dir_all(&user_dir)?;
    fs::write(user_dir.join("config.yaml"), "dry_run: true\n")?;

    let output = env.command().arg(env.dir()).output()?;
    assert!(output.status.success());

    // dirs only honours XDG_CONFIG_HOME on Linux.
    if cfg!(target_os = "linux") {
        assert!(env.dir().join("a b.txt").is_file());
    }
    Ok(())
}

#[test]
fn test_invalid_config_exits_with_failure() -> Result<()> {
    let env = TestEnv::new()?;
    let config_path = env.config_home.path().join("bad.yaml");
    fs::write(&config_path, "order: sideways\n")?;

    env.command()
        .arg("--config")
        .arg(&config_path)
        .arg(env.dir())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
    Ok(())
}

#[test]
fn test_log_file_with_separator_is_rejected() -> Result<()> {
    let env = TestEnv::new()?;

    env.command()
        .args(["--log-file", "../outside.txt"])
        .arg(env.dir())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("plain file name"));
    Ok(())
}

#[test]
fn test_missing_theme_file_exits_with_failure() -> Result<()> {
    let env = TestEnv::new()?;

    env.command()
        .arg("--theme")
        .arg(env.dir().join("theme.yaml"))
        .arg(env.dir())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read theme file"));
    Ok(())
}

#[test]
fn test_debug_flag_emits_logs() -> Result<()> {
    let env = TestEnv::new()?;

    env.command()
        .arg("--debug")
        .arg(env.dir())
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO nospaces] nospaces started."))
        .stderr(predicate::str::contains("[INFO nospaces_core::renamer] Starting rename pass"));
    Ok(())
}
