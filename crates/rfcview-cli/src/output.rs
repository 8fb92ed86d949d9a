//! Output formatting utilities

use std::io::Write;
use std::path::Path;

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Dot,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "dot" => Self::Dot,
            _ => Self::Table,
        }
    }
}

impl OutputFormat {
    /// Resolve the global `--format` flag against a command's own default
    pub fn resolve(flag: Option<&str>, default: OutputFormat) -> Self {
        flag.map(Self::from).unwrap_or(default)
    }

    /// Resolve the format for commands that only print tables or JSON
    pub fn resolve_tabular(flag: Option<&str>) -> anyhow::Result<Self> {
        match Self::resolve(flag, OutputFormat::Table) {
            OutputFormat::Dot => anyhow::bail!("DOT output is only available from the graph command"),
            format => Ok(format),
        }
    }
}

/// Pretty JSON for machine-readable output
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write `content` to `path`, or to stdout when no path is given
pub fn emit(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("dot"), OutputFormat::Dot);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(OutputFormat::resolve(None, OutputFormat::Dot), OutputFormat::Dot);
        assert_eq!(
            OutputFormat::resolve(Some("json"), OutputFormat::Dot),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_resolve_tabular_rejects_dot() {
        assert!(OutputFormat::resolve_tabular(Some("dot")).is_err());
        assert_eq!(OutputFormat::resolve_tabular(None).unwrap(), OutputFormat::Table);
        assert_eq!(
            OutputFormat::resolve_tabular(Some("json")).unwrap(),
            OutputFormat::Json
        );
    }
}
