use crate::error::Result;
use crate::ui;
use anyhow::Context;
use shell::{CommandResult, ExecOptions};

fn options(silent: bool, tolerate_failure: bool) -> ExecOptions {
    let mut options = ExecOptions::default();
    if silent {
        options = options.silent();
    }
    if tolerate_failure {
        options = options.tolerate_failure();
    }
    options
}

fn to_json(result: &CommandResult) -> anyhow::Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize command result")
}

/// Run one command with the requested failure policy and print what it wrote
pub fn execute(
    command: String,
    error_message: String,
    silent: bool,
    tolerate_failure: bool,
    json: bool,
) -> Result<()> {
    let result = shell::execute(&command, &error_message, &options(silent, tolerate_failure))?;

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", result.output);
    }

    if !result.passed() && !json {
        ui::warning_message(&format!(
            "'{}' failed with exit code {}, continuing",
            result.command,
            result
                .exit_code
                .map_or_else(|| "unknown".to_string(), |code| code.to_string())
        ));
    }

    Ok(())
}
