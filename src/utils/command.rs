//! Command execution utilities

use crate::error::{FetchError, Result};
use std::process::{Command, Stdio};

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(FetchError::Detection(format!(
            "command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Execute `producer | filter` and return the filter's stdout.
///
/// Both children are spawned; the producer's stdout feeds the filter's
/// stdin directly, no intermediate buffering in this process.
pub fn run_piped(producer: (&str, &[&str]), filter: (&str, &[&str])) -> Result<String> {
    let mut first = Command::new(producer.0)
        .args(producer.1)
        .stdout(Stdio::piped())
        .spawn()?;

    let stdout = first.stdout.take().ok_or_else(|| {
        FetchError::Detection(format!("no stdout handle from '{}'", producer.0))
    })?;

    let output = Command::new(filter.0)
        .args(filter.1)
        .stdin(Stdio::from(stdout))
        .output()?;

    first.wait()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(FetchError::Detection(format!(
            "command '{}' failed with exit code: {:?}",
            filter.0,
            output.status.code()
        )))
    }
}
