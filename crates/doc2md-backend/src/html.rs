//! Built-in HTML converter backend.
//!
//! The only backend without an external dependency: HTML is rendered to
//! text with the `html2text` crate, compiled in. Its probe therefore always
//! succeeds, which makes it the one converter a bare installation can count
//! on.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;
use std::time::Instant;

/// Render width for text output.
const RENDER_WIDTH: usize = 80;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Html2text,
    probe,
    build,
    info,
};

const fn probe() -> Result<()> {
    Ok(())
}

fn build(_credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(Html2textBackend::new()))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "html2text",
        name: "html2text",
        description: "Built-in HTML to text rendering",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// Native HTML backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html2textBackend;

impl Html2textBackend {
    /// Create a new HTML backend. Takes no credentials.
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl Converter for Html2textBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Html2text
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();
        let html = std::fs::read(path)?;
        let markdown = html2text::from_read(html.as_slice(), RENDER_WIDTH);

        Ok(Conversion {
            markdown,
            converter: ConverterKind::Html2text,
            elapsed: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_supports_html_variants() {
        let backend = Html2textBackend::new();
        assert!(backend.supports_file(Path::new("page.html")).unwrap());
        assert!(backend.supports_file(Path::new("page.HTM")).unwrap());
        assert!(!backend.supports_file(Path::new("page.md")).unwrap());
    }

    #[test]
    fn test_probe_always_succeeds() {
        assert!(probe().is_ok());
    }

    #[test]
    fn test_convert_renders_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<html><body><h1>Heading</h1><p>Some body text.</p></body></html>")
            .unwrap();

        let backend = Html2textBackend::new();
        let conversion = backend.convert_file(file.path()).unwrap();

        assert_eq!(conversion.converter, ConverterKind::Html2text);
        assert!(conversion.markdown.contains("Heading"));
        assert!(conversion.markdown.contains("Some body text."));
    }

    #[test]
    fn test_convert_missing_file_is_io_error() {
        let backend = Html2textBackend::new();
        let err = backend
            .convert_file(Path::new("/nonexistent/page.html"))
            .unwrap_err();
        assert!(matches!(err, doc2md_core::ConvertError::IoError(_)));
    }
}
