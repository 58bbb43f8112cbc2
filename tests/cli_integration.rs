//! Integration tests for the `superenv` binary.
//!
//! These tests run the real binary against temporary project directories and
//! check exit codes, console output and the resulting files. Each command is
//! isolated from the user's global configuration by pointing `HOME` and
//! `XDG_CONFIG_HOME` into the fixture.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

struct TestProject {
    dir: TempDir,
    config_home: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create project dir"),
            config_home: TempDir::new().expect("failed to create config dir"),
        }
    }

    fn initialized() -> Self {
        let project = Self::new();
        project.cmd(&["init"]).assert().success();
        project
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A `superenv` invocation rooted at this project.
    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("superenv").expect("binary built");
        cmd.arg("--cwd")
            .arg(self.path())
            .args(args)
            .env_remove("SUPERENV_CONFIG")
            .env_remove("SUPERENV_LOG")
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path());
        cmd
    }

    fn write_env(&self, contents: &str) {
        fs::write(self.path().join(".env"), contents).unwrap();
    }

    fn snapshot(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(".superenv").join(format!(".{name}.env"))).unwrap()
    }
}

// =============================================================================
// Tests: greet / init
// =============================================================================

#[test]
fn greet_says_hello() {
    TestProject::new()
        .cmd(&["greet", "World"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn quiet_keeps_greeting() {
    TestProject::new()
        .cmd(&["-q", "greet", "World"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn init_creates_store_and_gitignore() {
    let project = TestProject::new();

    project
        .cmd(&["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".superenv folder created successfully"))
        .stdout(predicate::str::contains(".gitignore created"));

    assert!(project.path().join(".superenv").is_dir());
    assert_eq!(
        fs::read_to_string(project.path().join(".gitignore")).unwrap(),
        ".superenv\n"
    );
}

#[test]
fn init_twice_is_informational() {
    let project = TestProject::initialized();

    project
        .cmd(&["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("already listed in .gitignore"));

    let gitignore = fs::read_to_string(project.path().join(".gitignore")).unwrap();
    assert_eq!(gitignore.matches(".superenv").count(), 1);
}

#[test]
fn init_appends_to_existing_gitignore() {
    let project = TestProject::new();
    fs::write(project.path().join(".gitignore"), "target\n").unwrap();

    project
        .cmd(&["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".superenv added to .gitignore"));

    assert_eq!(
        fs::read_to_string(project.path().join(".gitignore")).unwrap(),
        "target\n.superenv\n"
    );
}

// =============================================================================
// Tests: preconditions
// =============================================================================

#[test]
fn create_before_init_fails() {
    let project = TestProject::new();

    project
        .cmd(&["create", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("superenv init"));

    assert!(!project.path().join(".superenv").exists());
}

#[test]
fn push_without_env_file_fails() {
    let project = TestProject::initialized();

    project
        .cmd(&["push", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env").and(predicate::str::contains("does not exist")));
}

#[test]
fn push_before_init_fails() {
    let project = TestProject::new();
    project.write_env("A=1\n");

    project
        .cmd(&["push", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn invalid_name_is_rejected() {
    let project = TestProject::initialized();

    project
        .cmd(&["create", "a.b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid environment name"));
}

// =============================================================================
// Tests: create / list / show
// =============================================================================

#[test]
fn create_twice_reports_existing() {
    let project = TestProject::initialized();

    project
        .cmd(&["create", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created environment 'staging'"));
    project
        .cmd(&["create", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn list_is_sorted() {
    let project = TestProject::initialized();
    for name in ["prod", "dev", "staging"] {
        project.cmd(&["create", name]).assert().success();
    }

    project
        .cmd(&["list"])
        .assert()
        .success()
        .stdout("dev\nprod\nstaging\n");
    project
        .cmd(&["list", "--json"])
        .assert()
        .success()
        .stdout("[\"dev\",\"prod\",\"staging\"]\n");
}

#[test]
fn list_empty_store() {
    let project = TestProject::initialized();

    project
        .cmd(&["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No environments yet"));
    project.cmd(&["list", "--json"]).assert().success().stdout("[]\n");
}

#[test]
fn show_prints_snapshot() {
    let project = TestProject::initialized();
    project.write_env("A=1\nB=2\n");
    project.cmd(&["push", "dev"]).assert().success();

    project
        .cmd(&["show", "dev"])
        .assert()
        .success()
        .stdout("A=1\nB=2\n");
    project
        .cmd(&["show", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'ghost' does not exist"));
}

// =============================================================================
// Tests: push / pull
// =============================================================================

#[test]
fn push_confirm_flow() {
    let project = TestProject::initialized();
    project.cmd(&["create", "staging"]).assert().success();
    project.write_env("A=1");

    project
        .cmd(&["--interactive", "push", "staging"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Overwrote environment 'staging'"));
    assert_eq!(project.snapshot("staging"), "A=1");

    project
        .cmd(&["push", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn push_declined_keeps_snapshot() {
    let project = TestProject::initialized();
    project.cmd(&["create", "staging"]).assert().success();
    let before = project.snapshot("staging");
    project.write_env("A=1\n");

    project
        .cmd(&["--interactive", "push", "staging"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Push aborted"));
    assert_eq!(project.snapshot("staging"), before);
}

#[test]
fn push_conflict_without_terminal_requires_yes() {
    let project = TestProject::initialized();
    project.cmd(&["create", "staging"]).assert().success();
    let before = project.snapshot("staging");
    project.write_env("A=1\n");

    project
        .cmd(&["push", "staging"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"))
        .stderr(predicate::str::contains("--interactive"));
    assert_eq!(project.snapshot("staging"), before);

    project
        .cmd(&["push", "staging", "--yes"])
        .assert()
        .success();
    assert_eq!(project.snapshot("staging"), "A=1\n");
}

#[test]
fn pull_restores_working_file() {
    let project = TestProject::initialized();
    project.write_env("MODE=dev\n");
    project.cmd(&["push", "dev"]).assert().success();
    project.write_env("MODE=scratch\n");

    project
        .cmd(&["pull", "dev", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote .env"));
    assert_eq!(
        fs::read_to_string(project.path().join(".env")).unwrap(),
        "MODE=dev\n"
    );
}

#[test]
fn pull_missing_environment_fails() {
    let project = TestProject::initialized();

    project
        .cmd(&["pull", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'ghost' does not exist"));
    assert!(!project.path().join(".env").exists());
}

// =============================================================================
// Tests: global flags and configuration
// =============================================================================

#[test]
fn quiet_suppresses_messages() {
    let project = TestProject::new();

    project.cmd(&["-q", "init"]).assert().success().stdout("");
    project
        .cmd(&["-q", "create", "dev"])
        .assert()
        .success()
        .stdout("");
    project.cmd(&["-q", "list"]).assert().success().stdout("dev\n");
}

#[test]
fn project_config_changes_layout() {
    let project = TestProject::new();
    fs::write(
        project.path().join(".superenv.toml"),
        "store_dir = \".envs\"\nenv_file = \"local.env\"\n",
    )
    .unwrap();

    project.cmd(&["init"]).assert().success();
    fs::write(project.path().join("local.env"), "X=1\n").unwrap();
    project.cmd(&["push", "dev"]).assert().success();

    assert_eq!(
        fs::read_to_string(project.path().join(".envs/.dev.env")).unwrap(),
        "X=1\n"
    );
    assert_eq!(
        fs::read_to_string(project.path().join(".gitignore")).unwrap(),
        ".envs\n"
    );
}

#[test]
fn bad_project_config_fails() {
    let project = TestProject::new();
    fs::write(project.path().join(".superenv.toml"), "store_dir = \"../up\"\n").unwrap();

    project
        .cmd(&["init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn completion_generates_script() {
    TestProject::new()
        .cmd(&["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("superenv"));
}
