//! Result rendering
//!
//! Renders the accumulated file list to different output formats:
//! plain (space-joined, the historical default), lines, json.

use crate::core::model::WalkEntry;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Lines,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render the result list to a string, without a trailing newline.
pub fn render(entries: &[WalkEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => entries
            .iter()
            .map(|e| e.path.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        OutputFormat::Lines => entries
            .iter()
            .map(|e| e.path.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FileKind;

    fn entries() -> Vec<WalkEntry> {
        vec![
            WalkEntry::new("a.cc", FileKind::Source),
            WalkEntry::new("sub/b.hh", FileKind::Header),
        ]
    }

    #[test]
    fn test_plain_is_space_joined() {
        assert_eq!(render(&entries(), OutputFormat::Plain), "a.cc sub/b.hh");
    }

    #[test]
    fn test_lines_is_newline_joined() {
        assert_eq!(render(&entries(), OutputFormat::Lines), "a.cc\nsub/b.hh");
    }

    #[test]
    fn test_json_carries_path_and_kind() {
        let json = render(&entries(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["path"], "a.cc");
        assert_eq!(parsed[0]["kind"], "source");
        assert_eq!(parsed[1]["kind"], "header");
    }

    #[test]
    fn test_empty_result_renders_empty() {
        assert_eq!(render(&[], OutputFormat::Plain), "");
        assert_eq!(render(&[], OutputFormat::Json), "[]");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("md".parse::<OutputFormat>().is_err());
    }
}
