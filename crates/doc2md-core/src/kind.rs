//! Converter identifiers
//!
//! [`ConverterKind`] names the converter backends the directory knows about.
//! Variant declaration order is the registration order, which doubles as the
//! fallback priority for files whose extension has no explicit entry in the
//! priority table.

use serde::{Deserialize, Serialize};

/// Identifier of a converter backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    /// Microsoft `MarkItDown` (general-purpose office/image/audio converter)
    Markitdown,
    /// IBM Docling (layout-aware document understanding)
    Docling,
    /// Marker (high-accuracy PDF conversion)
    Marker,
    /// Pandoc (universal markup converter)
    Pandoc,
    /// Unstructured hosted partition API
    Unstructured,
    /// Mammoth (DOCX to markdown)
    Mammoth,
    /// Built-in HTML renderer
    Html2text,
}

impl ConverterKind {
    /// All declared converters, in registration (priority) order.
    pub const DECLARED: &'static [Self] = &[
        Self::Markitdown,
        Self::Docling,
        Self::Marker,
        Self::Pandoc,
        Self::Unstructured,
        Self::Mammoth,
        Self::Html2text,
    ];

    /// The identifier string used in lookups, config, and CLI output.
    #[inline]
    #[must_use = "returns the identifier string for this converter"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markitdown => "markitdown",
            Self::Docling => "docling",
            Self::Marker => "marker",
            Self::Pandoc => "pandoc",
            Self::Unstructured => "unstructured",
            Self::Mammoth => "mammoth",
            Self::Html2text => "html2text",
        }
    }
}

impl std::fmt::Display for ConverterKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConverterKind {
    type Err = String;

    /// Parse an identifier (case-insensitive). "pypandoc" is accepted as an
    /// alias for the pandoc backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markitdown" => Ok(Self::Markitdown),
            "docling" => Ok(Self::Docling),
            "marker" => Ok(Self::Marker),
            "pandoc" | "pypandoc" => Ok(Self::Pandoc),
            "unstructured" => Ok(Self::Unstructured),
            "mammoth" => Ok(Self::Mammoth),
            "html2text" => Ok(Self::Html2text),
            _ => Err(format!("unknown converter: '{s}'")),
        }
    }
}
