//! DANE TLSA record generation (RFC 6698)
//!
//! Turns an X.509 certificate into certificate association data:
//! certificate → selected binary form → optional digest → hex.
//!
//! # Module Organization
//!
//! - `certificate` - PEM/DER loading into a plain `Certificate`
//! - `params` - usage, selector and matching type fields
//! - `record` - record generation and human readable report
//! - `error` - error type shared by the pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tlsagen::tlsa::{CertUsage, Certificate, MatchingType, Selector, TlsaRecord};
//!
//! let cert = Certificate::load(Path::new("cert.pem"))?;
//! let record = TlsaRecord::generate(
//!     &cert,
//!     CertUsage::DaneEe,
//!     Selector::SubjectPublicKeyInfo,
//!     MatchingType::Sha256,
//! );
//! println!("{record}");
//! # Ok::<(), tlsagen::tlsa::TlsaError>(())
//! ```

pub mod certificate;
pub mod error;
pub mod params;
pub mod record;

pub use certificate::Certificate;
pub use error::TlsaError;
pub use params::{CertUsage, MatchingType, Selector};
pub use record::{Protocol, Report, TlsaRecord, ZoneOwner};
