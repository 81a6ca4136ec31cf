//! Core trait and registration record for converter backends.

use doc2md_core::{Conversion, ConverterInfo, ConverterKind, Credentials, Result};
use std::path::Path;

/// Capability contract every converter backend satisfies.
///
/// Instances are constructed fresh per call through a [`Registration`];
/// nothing is cached or pooled.
pub trait Converter: Send + Sync {
    /// Which converter this is.
    fn kind(&self) -> ConverterKind;

    /// Whether this converter claims support for the given file.
    ///
    /// This is a capability check separate from mere availability: a backend
    /// may inspect the file's contents or size, not just the extension.
    /// Callers treat an `Err` defensively, as "not supported".
    ///
    /// # Errors
    /// Returns an error if the check itself fails (e.g. the file cannot be
    /// stat'ed).
    fn supports_file(&self, path: &Path) -> Result<bool>;

    /// Convert the file to markdown.
    ///
    /// # Errors
    /// Returns an error if the underlying tool or service fails.
    fn convert_file(&self, path: &Path) -> Result<Conversion>;
}

/// Uniform registration record for one backend.
///
/// Replaces optional-dependency import probing with an explicit startup
/// step: the directory calls `probe` once per declared entry and records
/// success or the failure reason. `info` is retrievable without ever
/// constructing an instance.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    /// Identifier of the registered backend.
    pub kind: ConverterKind,
    /// Availability probe; runs once at directory load, never fatal.
    pub probe: fn() -> Result<()>,
    /// Construct a converter instance from the given credentials.
    pub build: fn(&Credentials) -> Result<Box<dyn Converter>>,
    /// Static descriptive metadata.
    pub info: fn() -> ConverterInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct MockConverter;

    impl Converter for MockConverter {
        fn kind(&self) -> ConverterKind {
            ConverterKind::Pandoc
        }

        fn supports_file(&self, path: &Path) -> Result<bool> {
            Ok(path.extension().is_some())
        }

        fn convert_file(&self, _path: &Path) -> Result<Conversion> {
            Ok(Conversion {
                markdown: "mock".to_string(),
                converter: ConverterKind::Pandoc,
                elapsed: Duration::ZERO,
            })
        }
    }

    #[test]
    fn test_trait_object() {
        let converter: Box<dyn Converter> = Box::new(MockConverter);
        assert_eq!(converter.kind(), ConverterKind::Pandoc);
        assert!(converter.supports_file(Path::new("a.docx")).unwrap());
        assert!(!converter.supports_file(Path::new("Makefile")).unwrap());
    }

    #[test]
    fn test_converter_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockConverter>();
        assert_send_sync::<Box<dyn Converter>>();
    }
}
