//! Integration tests for the `resolve` command.

mod common;

use common::{TestEnv, NETWORK_CONFIG};
use predicates::prelude::*;

#[test]
fn test_mapped_drive_steps() {
    let env = TestEnv::new();
    env.write_project_config(NETWORK_CONFIG);

    env.command()
        .args(["resolve", r"Z:\docs\a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("computer\tbuildbox\n"))
        .stdout(predicate::str::contains("mapped-drive\t\\\\files\\team\\docs\\a.txt\n"))
        .stdout(predicate::str::contains("local-share\t-\n"))
        .stdout(predicate::str::contains("result\t\\\\files\\team\\docs\\a.txt\n"));
}

#[test]
fn test_hidden_share_reported_but_not_used_without_flag() {
    let env = TestEnv::new();
    env.write_project_config(NETWORK_CONFIG);

    env.command()
        .args(["resolve", r"D:\x.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("hidden-share\t\\\\buildbox\\D$\\x.txt\n"))
        .stdout(predicate::str::contains("result\t-\n"))
        .stderr(predicate::str::contains("No network path"));
}

#[test]
fn test_fqdn_applies_to_result() {
    let env = TestEnv::new();
    env.write_project_config(&format!(
        "{NETWORK_CONFIG}use_fqdn: true\nuse_hidden_shares: true\n"
    ));

    env.command()
        .args(["resolve", r"D:\x.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "result\t\\\\buildbox.corp.example.com\\D$\\x.txt\n",
        ));
}

#[test]
fn test_offline_network_keeps_host() {
    let env = TestEnv::new();
    env.write_project_config(&format!(
        "{}  offline: true\nuse_fqdn: true\n",
        NETWORK_CONFIG
    ));

    env.command()
        .args(["resolve", r"Z:\a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result\t\\\\files\\team\\a\n"))
        .stderr(predicate::str::contains("unavailable"));
}
