//! Converter backends and the converter directory for doc2md.
//!
//! # Overview
//!
//! This crate owns the selection side of document-to-markdown conversion.
//! Seven converter backends implement the [`Converter`] trait; the
//! [`ConverterDirectory`] probes each one once at startup, remembers which
//! are usable, and picks the best candidate for a given file from a static
//! extension-priority table with linear fallback.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    ConverterDirectory                    │
//! │   (probes backends once, dispatches by file extension)   │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Converter trait                      │
//! │   supports_file(&self, &Path) -> Result<bool>            │
//! │   convert_file(&self, &Path) -> Result<Conversion>       │
//! └──────────────────────────────────────────────────────────┘
//!          │                  │                  │
//!          ▼                  ▼                  ▼
//!   ┌────────────┐     ┌────────────┐     ┌────────────┐
//!   │ marker     │     │ pandoc     │ ... │ html2text  │
//!   │ (CLI tool) │     │ (CLI tool) │     │ (built-in) │
//!   └────────────┘     └────────────┘     └────────────┘
//! ```
//!
//! Conversion itself is delegated: most backends drive an external tool
//! (`markitdown`, `docling`, `marker_single`, `pandoc`, `mammoth`), one
//! talks to the hosted Unstructured API, and one renders HTML natively.
//! A backend whose tool is not installed is simply recorded as
//! unavailable with the reason; nothing here is fatal at load time.
//!
//! # Example
//!
//! ```no_run
//! use doc2md_backend::directory;
//! use doc2md_core::Credentials;
//!
//! let converter = directory().best_for_file("report.pdf".as_ref(), &Credentials::new())?;
//! let conversion = converter.convert_file("report.pdf".as_ref())?;
//! println!("{}", conversion.markdown);
//! # Ok::<(), doc2md_core::ConvertError>(())
//! ```

pub mod directory;
pub mod docling;
pub mod html;
pub mod mammoth;
pub mod marker;
pub mod markitdown;
pub mod pandoc;
pub mod priority;
pub mod traits;
pub mod unstructured;
mod utils;

pub use directory::{directory, ConverterDirectory, DECLARED};
pub use traits::{Converter, Registration};
