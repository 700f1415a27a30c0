use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Command for the hypergraphs binary, isolated from any user config and log settings
pub fn hypergraphs(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("hypergraphs");
    cmd.env("HYPERGRAPHS_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .env_remove("HYPERGRAPHS_LOG")
        .env_remove("HYPERGRAPHS_LOG_LEVEL");
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[allow(dead_code)]
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON")
}
