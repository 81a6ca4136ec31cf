//! `MarkItDown` converter backend.
//!
//! Wraps the `markitdown` CLI, the broadest of the external tools: office
//! documents, structured text, images (description/OCR), and audio
//! (transcription). Output goes to stdout as markdown.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BINARY: &str = "markitdown";
const INSTALL_HINT: &str = "Install with: pip install markitdown";

/// Extensions the markitdown CLI accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "pptx", "xlsx", "xls", "csv", "json", "xml", "html", "htm", "epub", "txt", "md",
    // Images, described via an OpenAI-compatible endpoint when a key is set
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "heic",
    // Audio, transcribed
    "mp3", "wav", "m4a", "ogg", "flac",
];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Markitdown,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    utils::probe_binary(BINARY, INSTALL_HINT)
}

fn build(credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(MarkitdownBackend::new(credentials)))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "markitdown",
        name: "MarkItDown",
        description: "General-purpose converter for office documents, images, and audio",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// markitdown CLI backend.
#[derive(Debug, Clone)]
pub struct MarkitdownBackend {
    api_key: Option<String>,
}

impl MarkitdownBackend {
    /// Create a backend; the API key, if any, enables image description.
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key.clone(),
        }
    }
}

impl Converter for MarkitdownBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Markitdown
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();

        let mut command = Command::new(BINARY);
        command.arg(path);
        if let Some(api_key) = &self.api_key {
            command.env("OPENAI_API_KEY", api_key);
        }

        let markdown = utils::run_capture(&mut command, BINARY)?;
        Ok(Conversion {
            markdown,
            converter: ConverterKind::Markitdown,
            elapsed: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_office_and_media() {
        let backend = MarkitdownBackend::new(&Credentials::new());
        assert!(backend.supports_file(Path::new("deck.pptx")).unwrap());
        assert!(backend.supports_file(Path::new("scan.PNG")).unwrap());
        assert!(backend.supports_file(Path::new("memo.mp3")).unwrap());
        assert!(!backend.supports_file(Path::new("model.stl")).unwrap());
    }

    #[test]
    fn test_info_id_matches_kind() {
        assert_eq!(info().id, ConverterKind::Markitdown.as_str());
        assert!(!info().extensions.is_empty());
    }
}
