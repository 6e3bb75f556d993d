//! Basic CLI surface tests: help, version, argument parsing.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_exits_zero() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("find-duplicates"))
        .stdout(predicate::str::contains("generate-foundation"));
}

#[test]
fn test_version_exits_zero() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("paramtree"));
}

#[test]
fn test_subcommand_help() {
    let env = TestEnv::new();
    env.command()
        .args(["generate-foundation", "--help"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--environment"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_list_files_shows_levels_and_variants() {
    let env = TestEnv::sample();
    env.command()
        .arg("list-files")
        .assert()
        .success()
        .stdout(predicate::str::contains("Global      base     global.yml"))
        .stdout(predicate::str::contains("Global      lab      global-lab.yml"))
        .stdout(predicate::str::contains("Datacenter  lab      dc1/datacenter-lab.yml"))
        .stdout(predicate::str::contains("Foundation  base     dc2/foundation2.yml"));
}

#[test]
fn test_show_sources_in_precedence_order() {
    let env = TestEnv::sample();
    let output = env
        .command()
        .args(["show-sources", "dc1", "foundation1", "-e", "lab"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let files: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .collect();
    assert_eq!(
        files,
        vec![
            "global.yml",
            "global-lab.yml",
            "dc1/datacenter.yml",
            "dc1/datacenter-lab.yml",
            "dc1/foundation1.yml",
        ]
    );
}

#[test]
fn test_verbose_emits_debug_lines() {
    let env = TestEnv::sample();
    env.command()
        .args(["--verbose", "list-files"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}
