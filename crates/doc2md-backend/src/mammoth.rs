//! Mammoth converter backend.
//!
//! Wraps the `mammoth` CLI, which turns DOCX into clean markdown from the
//! document's semantic structure. Reads nothing but DOCX.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BINARY: &str = "mammoth";
const INSTALL_HINT: &str = "Install with: pip install mammoth";

pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx"];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Mammoth,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    utils::probe_binary(BINARY, INSTALL_HINT)
}

fn build(_credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(MammothBackend::new()))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "mammoth",
        name: "Mammoth",
        description: "DOCX to clean markdown via document semantics",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// mammoth CLI backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MammothBackend;

impl MammothBackend {
    /// Create a new mammoth backend. Takes no credentials.
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl Converter for MammothBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Mammoth
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();

        let mut command = Command::new(BINARY);
        command.arg("--output-format=markdown").arg(path);

        let markdown = utils::run_capture(&mut command, BINARY)?;
        Ok(Conversion {
            markdown,
            converter: ConverterKind::Mammoth,
            elapsed: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_only() {
        let backend = MammothBackend::new();
        assert!(backend.supports_file(Path::new("letter.docx")).unwrap());
        assert!(backend.supports_file(Path::new("LETTER.DOCX")).unwrap());
        assert!(!backend.supports_file(Path::new("letter.doc")).unwrap());
        assert!(!backend.supports_file(Path::new("letter.odt")).unwrap());
    }
}
