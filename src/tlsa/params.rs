use super::{Certificate, TlsaError};
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

/// Certificate usage field of a TLSA record (RFC 6698 §2.1.1)
///
/// No range check is applied: values outside the assigned range, including
/// ones that do not fit the 8-bit wire field, are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertUsage {
    /// CA constraint
    PkixTa,
    /// Service certificate constraint
    PkixEe,
    /// Trust anchor assertion
    DaneTa,
    /// Domain-issued certificate
    DaneEe,
    /// Reserved for private use
    Private,
    Unassigned(i64),
}

impl From<i64> for CertUsage {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::PkixTa,
            1 => Self::PkixEe,
            2 => Self::DaneTa,
            3 => Self::DaneEe,
            255 => Self::Private,
            other => Self::Unassigned(other),
        }
    }
}

impl From<CertUsage> for i64 {
    fn from(usage: CertUsage) -> Self {
        match usage {
            CertUsage::PkixTa => 0,
            CertUsage::PkixEe => 1,
            CertUsage::DaneTa => 2,
            CertUsage::DaneEe => 3,
            CertUsage::Private => 255,
            CertUsage::Unassigned(value) => value,
        }
    }
}

impl CertUsage {
    /// RFC 7218 acronym, `None` for unassigned values
    #[must_use]
    pub const fn mnemonic(self) -> Option<&'static str> {
        match self {
            Self::PkixTa => Some("PKIX-TA"),
            Self::PkixEe => Some("PKIX-EE"),
            Self::DaneTa => Some("DANE-TA"),
            Self::DaneEe => Some("DANE-EE"),
            Self::Private => Some("PrivCert"),
            Self::Unassigned(_) => None,
        }
    }
}

impl fmt::Display for CertUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// Which part of the certificate is matched (RFC 6698 §2.1.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Full DER-encoded certificate
    FullCertificate,
    /// DER-encoded `SubjectPublicKeyInfo`
    SubjectPublicKeyInfo,
}

impl TryFrom<i64> for Selector {
    type Error = TlsaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::FullCertificate),
            1 => Ok(Self::SubjectPublicKeyInfo),
            other => Err(TlsaError::InvalidSelector(other)),
        }
    }
}

impl From<Selector> for u8 {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::FullCertificate => 0,
            Selector::SubjectPublicKeyInfo => 1,
        }
    }
}

impl Selector {
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::FullCertificate => "Cert",
            Self::SubjectPublicKeyInfo => "SPKI",
        }
    }

    /// Binary data this selector picks out of the certificate
    #[must_use]
    pub fn select(self, cert: &Certificate) -> &[u8] {
        match self {
            Self::FullCertificate => &cert.der,
            Self::SubjectPublicKeyInfo => &cert.spki_der,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// How the selected data is presented (RFC 6698 §2.1.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingType {
    /// Exact match on the selected content
    Full,
    /// SHA-256 of the selected content
    Sha256,
    /// SHA-512 of the selected content
    Sha512,
}

impl TryFrom<i64> for MatchingType {
    type Error = TlsaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Full),
            1 => Ok(Self::Sha256),
            2 => Ok(Self::Sha512),
            other => Err(TlsaError::InvalidMatchingType(other)),
        }
    }
}

impl From<MatchingType> for u8 {
    fn from(matching: MatchingType) -> Self {
        match matching {
            MatchingType::Full => 0,
            MatchingType::Sha256 => 1,
            MatchingType::Sha512 => 2,
        }
    }
}

impl MatchingType {
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Sha256 => "SHA2-256",
            Self::Sha512 => "SHA2-512",
        }
    }

    /// Produce the certificate association data for `data`
    #[must_use]
    pub fn apply(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Full => data.to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for MatchingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
