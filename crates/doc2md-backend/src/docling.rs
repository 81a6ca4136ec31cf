//! Docling converter backend.
//!
//! Wraps the `docling` CLI (IBM's layout-aware document converter). Unlike
//! the stdout-based tools, docling writes its markdown into an output
//! directory, so conversion goes through a scratch `TempDir`.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{ConvertError, Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;
use std::process::Command;
use std::time::Instant;
use tempfile::TempDir;

const BINARY: &str = "docling";
const INSTALL_HINT: &str = "Install with: pip install docling";

/// Extensions the docling CLI accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "pptx", "xlsx", "html", "htm", "md", "csv", "png", "jpg", "jpeg", "tiff", "bmp",
    "webp",
];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Docling,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    utils::probe_binary(BINARY, INSTALL_HINT)
}

fn build(_credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(DoclingBackend::new()))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "docling",
        name: "Docling",
        description: "Layout-aware document understanding with OCR",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// docling CLI backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoclingBackend;

impl DoclingBackend {
    /// Create a new docling backend. Takes no credentials.
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl Converter for DoclingBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Docling
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();
        let temp_dir = TempDir::new()?;

        let mut command = Command::new(BINARY);
        command
            .arg(path)
            .arg("--to")
            .arg("md")
            .arg("--output")
            .arg(temp_dir.path());

        // stdout carries progress chatter, not the document.
        utils::run_capture(&mut command, BINARY)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let output_path = temp_dir.path().join(format!("{stem}.md"));
        let markdown = std::fs::read_to_string(&output_path).map_err(|_| {
            ConvertError::ToolError(format!("docling produced no output for {}", path.display()))
        })?;

        Ok(Conversion {
            markdown,
            converter: ConverterKind::Docling,
            elapsed: start.elapsed(),
        })
    }
}
