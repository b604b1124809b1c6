use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while turning a certificate into a TLSA record
#[derive(Debug, Error)]
pub enum TlsaError {
    /// Wrong argument count or a non-integer field; carries the rendered usage message
    #[error("{0}")]
    Argument(String),

    #[error("failed to read certificate {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse certificate: {0}")]
    CertificateParse(String),

    #[error("invalid selector: {0} (expected 0 or 1)")]
    InvalidSelector(i64),

    #[error("invalid matching type: {0} (expected 0, 1 or 2)")]
    InvalidMatchingType(i64),
}
