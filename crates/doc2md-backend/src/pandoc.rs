//! Pandoc converter backend.
//!
//! Wraps the `pandoc` binary, converting to GitHub-flavored markdown on
//! stdout. Pandoc reads many markup formats but not PDF (it only writes
//! PDF), so the extension list deliberately excludes it.

use crate::traits::{Converter, Registration};
use crate::utils;
use doc2md_core::{Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BINARY: &str = "pandoc";
const INSTALL_HINT: &str = "Install from https://pandoc.org/installing.html";

/// Input formats pandoc can read.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "docx", "epub", "html", "htm", "ipynb", "json", "latex", "md", "odt", "org", "rst", "rtf",
    "tex", "csv",
];

pub const REGISTRATION: Registration = Registration {
    kind: ConverterKind::Pandoc,
    probe,
    build,
    info,
};

fn probe() -> Result<()> {
    utils::probe_binary(BINARY, INSTALL_HINT)
}

fn build(_credentials: &Credentials) -> Result<Box<dyn Converter>> {
    Ok(Box::new(PandocBackend::new()))
}

fn info() -> ConverterInfo {
    ConverterInfo {
        id: "pandoc",
        name: "Pandoc",
        description: "Universal markup converter",
        extensions: SUPPORTED_EXTENSIONS,
    }
}

/// pandoc CLI backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PandocBackend;

impl PandocBackend {
    /// Create a new pandoc backend. Takes no credentials.
    #[inline]
    #[must_use = "creating a backend that is not used is a waste of resources"]
    pub const fn new() -> Self {
        Self
    }
}

impl Converter for PandocBackend {
    fn kind(&self) -> ConverterKind {
        ConverterKind::Pandoc
    }

    fn supports_file(&self, path: &Path) -> Result<bool> {
        Ok(utils::supports_extension(path, SUPPORTED_EXTENSIONS))
    }

    fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let start = Instant::now();

        let mut command = Command::new(BINARY);
        command.arg("-t").arg("gfm").arg(path);

        let markdown = utils::run_capture(&mut command, BINARY)?;
        Ok(Conversion {
            markdown,
            converter: ConverterKind::Pandoc,
            elapsed: start.elapsed(),
        })
    }
}
