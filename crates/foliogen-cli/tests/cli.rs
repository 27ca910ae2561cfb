// crates/foliogen-cli/tests/cli.rs - End-to-End CLI Tests
//
// These drive the compiled `foliogen` binary the way a user would, inside
// throwaway temp directories so the process working directory never
// matters. Asset content checks compare against the embedded registry
// bodies, which are the single source of truth.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use foliogen_core::{Asset, Template};

fn foliogen() -> Command {
    Command::cargo_bin("foliogen").unwrap()
}

#[test]
fn list_names_every_template_and_creates_nothing() {
    let temp = TempDir::new().unwrap();

    let mut cmd = foliogen();
    cmd.current_dir(temp.path()).arg("--list");

    let mut assert = cmd.assert().success();
    for template in Template::ALL {
        assert = assert.stdout(predicate::str::contains(template.name()));
    }

    // --list must not touch the filesystem
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn list_json_is_machine_readable() {
    let output = foliogen().args(["--list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), Template::ALL.len());
    assert_eq!(entries[0]["name"], "developer");
    assert_eq!(entries[0]["default"], true);
    assert_eq!(entries[1]["name"], "photographer");
}

#[test]
fn version_prints_semver() {
    foliogen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^foliogen \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn generates_demo_with_developer_template() {
    let temp = TempDir::new().unwrap();

    foliogen()
        .current_dir(temp.path())
        .args(["Demo", "-t", "developer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Portfolio successfully created!"))
        .stdout(predicate::str::contains("📁 Location:"));

    let demo = temp.path().join("Demo");
    for asset in Asset::ALL {
        let on_disk = std::fs::read_to_string(demo.join(asset.filename())).unwrap();
        assert_eq!(on_disk, Template::Developer.asset(asset), "{:?}", asset);
    }
    assert!(demo.join("assets").join("README.md").exists());
}

#[test]
fn default_invocation_creates_myportfolio() {
    let temp = TempDir::new().unwrap();

    foliogen().current_dir(temp.path()).assert().success();

    assert!(temp.path().join("MyPortfolio").join("index.html").exists());
}

#[test]
fn non_default_template_is_called_out() {
    let temp = TempDir::new().unwrap();

    foliogen()
        .current_dir(temp.path())
        .args(["Shots", "--template", "photographer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🎨 Template: photographer"));

    let markup = std::fs::read_to_string(temp.path().join("Shots").join("index.html")).unwrap();
    assert_eq!(markup, Template::Photographer.asset(Asset::Markup));
}

#[test]
fn unknown_template_fails_without_writing() {
    let temp = TempDir::new().unwrap();

    foliogen()
        .current_dir(temp.path())
        .args(["Demo", "-t", "not-a-real-template"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("❌"))
        .stderr(predicate::str::contains("Invalid template"))
        .stderr(predicate::str::contains("developer, photographer"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn rerun_on_existing_folder_warns_and_succeeds() {
    let temp = TempDir::new().unwrap();

    foliogen()
        .current_dir(temp.path())
        .arg("Demo")
        .assert()
        .success();

    foliogen()
        .current_dir(temp.path())
        .arg("Demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn json_without_list_is_rejected_by_clap() {
    foliogen().arg("--json").assert().failure();
}
