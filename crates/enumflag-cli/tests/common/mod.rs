#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;

const ENV_VARS: [&str; 5] = [
    "COMPLETE",
    "ENUMFLAG_LOG",
    "ENUMFLAG_FORMAT",
    "ENUMFLAG_MODE",
    "ENUMFLAG_MODES",
];

/// Create an `enumflag` command isolated from the caller's environment.
pub fn enumflag_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("enumflag"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Ask the binary for fish completions of `words`, as the shell hook would.
#[allow(dead_code)]
pub fn complete_fish(words: &[&str]) -> Vec<String> {
    let output = enumflag_cmd()
        .env("COMPLETE", "fish")
        .arg("--")
        .arg("enumflag")
        .args(words)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
