//! Publishing step results through the GitHub Actions runner.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. When that
//! variable is absent (older runners, local runs) the legacy `::set-output`
//! workflow command is printed instead.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use rand::RngCore;

use crate::error::ActionError;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

#[derive(Debug, Clone, Default)]
pub struct ActionOutput {
    path: Option<PathBuf>,
}

impl ActionOutput {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn from_env() -> Self {
        let path = env::var(GITHUB_OUTPUT_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self { path }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn set_output(&self, name: &str, value: &str) -> Result<(), ActionError> {
        match &self.path {
            Some(path) => {
                let delimiter = random_delimiter();
                let entry = file_command_entry(name, value, &delimiter)?;
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ActionError::Output(format!("{}: {}", path.display(), e)))?;
                file.write_all(entry.as_bytes())
                    .map_err(|e| ActionError::Output(format!("{}: {}", path.display(), e)))?;
                tracing::debug!(name, path = %path.display(), "Wrote step output");
            }
            None => {
                println!();
                println!("{}", set_output_command(name, value));
            }
        }
        Ok(())
    }

    /// Publish `values` as a JSON array, the way the runner toolkit serialises
    /// non-string outputs.
    pub fn set_json_output(&self, name: &str, values: &[String]) -> Result<(), ActionError> {
        let json = serde_json::to_string(values)
            .map_err(|e| ActionError::Output(format!("Failed to serialise {}: {}", name, e)))?;
        self.set_output(name, &json)
    }
}

fn random_delimiter() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    format!("ghadelimiter_{}", hex::encode(bytes))
}

/// Heredoc-style entry understood by the runner's file commands.
pub fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Result<String, ActionError> {
    if name.contains(delimiter) {
        return Err(ActionError::Output(format!(
            "Unexpected input: name should not contain the delimiter \"{}\"",
            delimiter
        )));
    }
    if value.contains(delimiter) {
        return Err(ActionError::Output(format!(
            "Unexpected input: value should not contain the delimiter \"{}\"",
            delimiter
        )));
    }
    Ok(format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
}

/// Legacy workflow command setting output `name` to `value`.
pub fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", escape_property(name), escape_data(value))
}

/// Workflow command that marks the step failed with `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report a failed run. The runner picks up the `::error::` command from stdout.
pub fn set_failed(message: &str) {
    tracing::error!(%message, "Action failed");
    println!("{}", error_command(message));
}

pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_is_random_hex() {
        let a = random_delimiter();
        let b = random_delimiter();
        assert!(a.starts_with("ghadelimiter_"));
        assert_eq!(a.len(), "ghadelimiter_".len() + 32);
        assert_ne!(a, b);
    }

    #[test]
    fn property_escaping_covers_separators() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }
}
