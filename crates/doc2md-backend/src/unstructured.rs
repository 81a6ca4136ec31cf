//! Unstructured converter backend.
//!
//! Talks to the hosted Unstructured partition API instead of a local tool:
//! the file is uploaded as multipart form data and the returned element list
//! is flattened to markdown. Availability is keyed on an API key being
//! configured: without one the backend is reported unavailable, the same
//! way a missing binary is for the CLI-based backends.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{ConvertError, Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

const DEFAULT_BASE_URL: &str = "https://api.unstructured.io/general/v0/general";
const API_KEY_ENV: &str = "UNSTRUCTURED_API_KEY";

/// Extensions the partition API accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "html", "htm", "xml", "csv", "rst", "epub",
    "md", "txt", "eml", "msg", "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "heic",
];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Unstructured,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(()),
        _ => Err(ConvertError::ToolError(format!(
            "{API_KEY_ENV} is not set; the hosted API needs a key"
        ))),
    }
}

fn build(credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(UnstructuredBackend::new(credentials)?))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "unstructured",
        name: "Unstructured",
        description: "Hosted partition API for broad-format text extraction",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// One element of the partition API response. Fields we don't use are
/// ignored on deserialization.
#[derive(Debug, Deserialize)]
struct Element {
    #[serde(default)]
    text: String,
    #[serde(default, rename = "type")]
    element_type: String,
}

/// Hosted Unstructured API backend.
#[derive(Debug, Clone)]
pub struct UnstructuredBackend {
    api_key: String,
    base_url: String,
}

impl UnstructuredBackend {
    /// Create a backend from explicit credentials, falling back to the
    /// `UNSTRUCTURED_API_KEY` environment variable for the key.
    ///
    /// # Errors
    /// Returns an error when no API key is configured anywhere.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let api_key = credentials
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConvertError::ToolError(format!(
                    "no API key for the unstructured backend (set {API_KEY_ENV} or pass one)"
                ))
            })?;
        let base_url = credentials
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    fn render(elements: &[Element]) -> String {
        let mut markdown = String::new();
        for element in elements {
            if element.text.is_empty() {
                continue;
            }
            if element.element_type == "Title" {
                let _ = writeln!(markdown, "# {}", element.text);
            } else {
                markdown.push_str(&element.text);
                markdown.push('\n');
            }
            markdown.push('\n');
        }
        markdown
    }
}

impl Converter for UnstructuredBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Unstructured
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();

        let form = reqwest::blocking::multipart::Form::new().file("files", path)?;
        let response = reqwest::blocking::Client::new()
            .post(&self.base_url)
            .header("unstructured-api-key", &self.api_key)
            .multipart(form)
            .send()
            .map_err(|e| ConvertError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::HttpError(format!(
                "partition API returned {status} for {}",
                path.display()
            )));
        }

        let elements: Vec<Element> = response
            .json()
            .map_err(|e| ConvertError::HttpError(e.to_string()))?;

        Ok(Conversion {
            markdown: Self::render(&elements),
            converter: ConverterKind::Unstructured,
            elapsed: start.elapsed(),
        })
    }
}
