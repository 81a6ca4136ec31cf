//! Core types for the doc2md converter directory.
//!
//! This crate defines the vocabulary shared by the backend and CLI crates:
//! converter identifiers ([`ConverterKind`]), construction credentials
//! ([`Credentials`]), static converter metadata ([`ConverterInfo`]), the
//! conversion result ([`Conversion`]), and the error type
//! ([`ConvertError`]).
//!
//! The actual backends and the selection logic live in `doc2md-backend`.

pub mod credentials;
pub mod error;
pub mod kind;
pub mod metadata;

pub use credentials::Credentials;
pub use error::{ConvertError, Result};
pub use kind::ConverterKind;
pub use metadata::{Conversion, ConverterInfo};
