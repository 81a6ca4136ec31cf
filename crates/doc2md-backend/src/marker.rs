//! Marker converter backend.
//!
//! Wraps the `marker_single` CLI for high-accuracy PDF conversion. Marker
//! writes an output tree (`<out>/<stem>/<stem>.md`), so conversion runs
//! against a scratch `TempDir` and picks the markdown file out afterwards.
//! LLM-assisted mode is enabled when an API key is supplied.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{ConvertError, Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tempfile::TempDir;

const BINARY: &str = "marker_single";
const INSTALL_HINT: &str = "Install with: pip install marker-pdf";

/// Marker is PDF-only.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf"];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Marker,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    utils::probe_binary(BINARY, INSTALL_HINT)
}

fn build(credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(MarkerBackend::new(credentials)))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "marker",
        name: "Marker",
        description: "High-accuracy PDF to markdown conversion",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// marker CLI backend.
#[derive(Debug, Clone)]
pub struct MarkerBackend {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl MarkerBackend {
    /// Create a backend; credentials switch on LLM-assisted conversion.
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key.clone(),
            base_url: credentials.base_url.clone(),
        }
    }

    fn find_output(output_dir: &Path, stem: &str) -> Option<PathBuf> {
        let nested = output_dir.join(stem).join(format!("{stem}.md"));
        if nested.is_file() {
            return Some(nested);
        }
        let flat = output_dir.join(format!("{stem}.md"));
        flat.is_file().then_some(flat)
    }
}

impl Converter for MarkerBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Marker
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        if !utils::supports_extension(path, SUPPORTED_EXTENSIONS) {
            return Ok(false);
        }
        // Marker chokes on zero-byte PDFs; check up front.
        let metadata = std::fs::metadata(path)?;
        Ok(metadata.len() > 0)
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();
        let temp_dir = TempDir::new()?;

        let mut command = Command::new(BINARY);
        command
            .arg(path)
            .arg("--output_format")
            .arg("markdown")
            .arg("--output_dir")
            .arg(temp_dir.path());
        if let Some(api_key) = &self.api_key {
            command.arg("--use_llm").arg("--llm_api_key").arg(api_key);
            if let Some(base_url) = &self.base_url {
                command.arg("--llm_base_url").arg(base_url);
            }
        }

        utils::run_capture(&mut command, BINARY)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let output_path = Self::find_output(temp_dir.path(), stem).ok_or_else(|| {
            ConvertError::ToolError(format!("marker produced no output for {}", path.display()))
        })?;
        let markdown = std::fs::read_to_string(output_path)?;

        Ok(Conversion {
            markdown,
            converter: ConverterKind::Marker,
            elapsed: start.elapsed(),
        })
    }
}
