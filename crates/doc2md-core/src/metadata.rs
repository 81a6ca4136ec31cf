//! Converter metadata and conversion results.

use crate::kind::ConverterKind;
use serde::Serialize;
use std::time::Duration;

/// Static descriptive metadata for a converter backend.
///
/// Retrievable without constructing an instance; the CLI projects this
/// straight into its `list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConverterInfo {
    /// Lookup identifier (matches [`ConverterKind::as_str`]).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// File extensions the backend advertises support for.
    pub extensions: &'static [&'static str],
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The converted document as markdown.
    pub markdown: String,
    /// Which converter produced the output.
    pub converter: ConverterKind,
    /// Wall-clock time the conversion took.
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_serializes() {
        let info = ConverterInfo {
            id: "pandoc",
            name: "Pandoc",
            description: "Universal markup converter",
            extensions: &["docx", "html"],
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["id"], "pandoc");
        assert_eq!(json["extensions"][1], "html");
    }

    #[test]
    fn test_conversion_fields() {
        let conversion = Conversion {
            markdown: "# Title".to_string(),
            converter: ConverterKind::Html2text,
            elapsed: Duration::from_millis(5),
        };
        assert_eq!(conversion.converter, ConverterKind::Html2text);
        assert!(conversion.markdown.starts_with('#'));
    }
}
