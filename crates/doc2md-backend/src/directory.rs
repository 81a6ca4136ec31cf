//! Converter directory: registration, availability, and selection.
//!
//! The directory probes every declared backend once, keeps the survivors in
//! registration order, and maps the casualties to their failure reasons.
//! After that it only serves read-only lookups, so the process-wide instance
//! behind [`directory()`] needs no locking.

use crate::traits::{Converter, Registration};
use crate::{docling, html, mammoth, marker, markitdown, pandoc, priority, unstructured, utils};
use doc2md_core::{ConvertError, ConverterInfo, ConverterKind, Credentials, Result};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Declared converters, in registration order.
///
/// Order matters: it is the fallback priority for files whose extension has
/// no priority-table entry, and the first entry is the last-resort converter
/// for a file nothing claims to support.
pub const DECLARED: &[Registration] = &[
    markitdown::REGISTRATION,
    docling::REGISTRATION,
    marker::REGISTRATION,
    pandoc::REGISTRATION,
    unstructured::REGISTRATION,
    mammoth::REGISTRATION,
    html::REGISTRATION,
];

/// Registry of converter backends with availability tracking.
pub struct ConverterDirectory {
    /// Backends whose probe succeeded, in registration order.
    available: Vec<Registration>,
    /// Probe failures, kind to human-readable reason.
    unavailable: BTreeMap<ConverterKind, String>,
}

impl ConverterDirectory {
    /// Run the load phase over a registration table.
    ///
    /// Each probe failure is recorded and logged, never fatal; entries are
    /// independent. The global [`directory()`] uses [`DECLARED`]; tests pass
    /// their own tables.
    #[must_use = "constructing a directory runs every availability probe"]
    pub fn from_registrations(declared: &[Registration]) -> Self {
        let mut available = Vec::new();
        let mut unavailable = BTreeMap::new();

        for registration in declared {
            match (registration.probe)() {
                Ok(()) => {
                    info!("Loaded converter: {}", registration.kind);
                    available.push(*registration);
                }
                Err(e) => {
                    warn!("Converter {} not available: {e}", registration.kind);
                    unavailable.insert(registration.kind, e.to_string());
                }
            }
        }

        Self {
            available,
            unavailable,
        }
    }

    fn lookup(&self, kind: ConverterKind) -> Option<&Registration> {
        self.available.iter().find(|r| r.kind == kind)
    }

    /// Identifiers that loaded successfully, in registration order.
    #[must_use = "returns the available converter identifiers"]
    pub fn available_kinds(&self) -> Vec<ConverterKind> {
        self.available.iter().map(|r| r.kind).collect()
    }

    /// Whether the given converter loaded successfully.
    #[must_use = "returns whether the converter is available"]
    pub fn is_available(&self, kind: ConverterKind) -> bool {
        self.lookup(kind).is_some()
    }

    fn available_list(&self) -> String {
        self.available
            .iter()
            .map(|r| r.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Construct the named converter.
    ///
    /// # Errors
    /// Returns [`ConvertError::UnknownConverter`] (message enumerating the
    /// available identifiers) when the converter did not load, regardless of
    /// the credentials supplied. Construction failures of an available
    /// converter propagate.
    pub fn get(
        &self,
        kind: ConverterKind,
        credentials: &Credentials,
    ) -> Result<Box<dyn Converter>> {
        let Some(registration) = self.lookup(kind) else {
            return Err(ConvertError::UnknownConverter {
                requested: kind.to_string(),
                available: self.available_list(),
            });
        };
        (registration.build)(credentials)
    }

    /// Pick the best converter for a file.
    ///
    /// Candidates come from the extension's priority-table entry, or from
    /// the available list in load order when the extension has no entry.
    /// The walk skips a candidate on any failure (not loaded, construction
    /// error, support check returned false or errored) and the first
    /// candidate that confirms support wins. When nothing claims the file,
    /// the first available converter is returned unconditionally.
    ///
    /// # Errors
    /// Returns [`ConvertError::NoConvertersAvailable`] only when nothing
    /// loaded at all.
    pub fn best_for_file(
        &self,
        path: &Path,
        credentials: &Credentials,
    ) -> Result<Box<dyn Converter>> {
        let ext = utils::extension_of(path);

        let order: Vec<ConverterKind> = match priority::priority_for(&ext) {
            Some(kinds) => kinds.to_vec(),
            None => self.available_kinds(),
        };

        for kind in order {
            let Some(registration) = self.lookup(kind) else {
                continue;
            };
            let converter = match (registration.build)(credentials) {
                Ok(converter) => converter,
                Err(e) => {
                    debug!("Skipping {kind}: construction failed: {e}");
                    continue;
                }
            };
            match converter.supports_file(path) {
                Ok(true) => return Ok(converter),
                Ok(false) => {}
                Err(e) => debug!("Skipping {kind}: support check failed: {e}"),
            }
        }

        if let Some(registration) = self.available.first() {
            return (registration.build)(credentials);
        }

        Err(ConvertError::NoConvertersAvailable)
    }

    /// Static metadata for every available converter, in load order.
    #[must_use = "returns metadata for the available converters"]
    pub fn all_converter_info(&self) -> Vec<ConverterInfo> {
        self.available.iter().map(|r| (r.info)()).collect()
    }

    /// Probe failures, kind to reason. Returns a copy; mutating it does not
    /// touch directory state.
    #[must_use = "returns a copy of the unavailable-converter map"]
    pub fn unavailable(&self) -> BTreeMap<ConverterKind, String> {
        self.unavailable.clone()
    }
}

static DIRECTORY: LazyLock<ConverterDirectory> =
    LazyLock::new(|| ConverterDirectory::from_registrations(DECLARED));

/// Process-wide directory, probed once on first use and read-only after.
#[must_use = "returns the process-wide converter directory"]
pub fn directory() -> &'static ConverterDirectory {
    &DIRECTORY
}
