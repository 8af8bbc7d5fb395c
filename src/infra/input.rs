//! Source text acquisition for the CLI.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Where a source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Stdin,
    File(std::path::PathBuf),
}

impl SourceInput {
    /// `-` means stdin, anything else is a path.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            SourceInput::Stdin
        } else {
            SourceInput::File(arg.into())
        }
    }
}

pub fn read_source(input: &SourceInput) -> Result<String> {
    match input {
        SourceInput::Stdin => read_stdin(),
        SourceInput::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    if std::io::stdin().is_terminal() {
        anyhow::bail!("Expected source code on stdin, but stdin is a terminal");
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(SourceInput::parse("-"), SourceInput::Stdin);
        assert_eq!(
            SourceInput::parse("a.py"),
            SourceInput::File("a.py".into())
        );
    }

    #[test]
    fn test_read_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code.js");
        std::fs::write(&path, "let x = 1;\n").unwrap();

        assert_eq!(
            read_source(&SourceInput::File(path)).unwrap(),
            "let x = 1;\n"
        );

        let err = read_source(&SourceInput::File(dir.path().join("nope.js"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
