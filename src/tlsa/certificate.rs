use super::TlsaError;
use chrono::{DateTime, Utc};
use rustls_pemfile::certs;
use std::{
    fs,
    io::Cursor,
    net::{Ipv4Addr, Ipv6Addr},
    path::Path,
};
use tracing::debug;
use x509_parser::{
    prelude::{FromDer, GeneralName, X509Certificate},
    time::ASN1Time,
};

// ASN.1 SEQUENCE tag, first byte of every DER certificate
const DER_SEQUENCE_TAG: u8 = 0x30;

/// The certificate fields needed to build a TLSA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    /// DER encoding of the whole certificate
    pub der: Vec<u8>,
    /// DER encoding of the `SubjectPublicKeyInfo`
    pub spki_der: Vec<u8>,
    /// Serial number as uppercase hex
    pub serial: String,
    pub issuer: String,
    pub subject: String,
    /// Subject Alternative Name entries, `None` when the extension is absent
    pub subject_alt_name: Option<String>,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

impl Certificate {
    /// Read and parse a PEM (or DER) certificate file
    ///
    /// # Errors
    ///
    /// Returns `TlsaError::FileRead` if the file cannot be read and
    /// `TlsaError::CertificateParse` if it holds no valid certificate
    pub fn load(path: &Path) -> Result<Self, TlsaError> {
        let data = fs::read(path).map_err(|source| TlsaError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("read {} bytes from {}", data.len(), path.display());

        Self::parse(&data)
    }

    /// Parse a certificate from PEM, falling back to raw DER
    ///
    /// Only the first `CERTIFICATE` block of a PEM bundle is used.
    ///
    /// # Errors
    ///
    /// Returns `TlsaError::CertificateParse` if the input holds no valid certificate
    pub fn parse(data: &[u8]) -> Result<Self, TlsaError> {
        let mut reader = Cursor::new(data);
        let parsed = certs(&mut reader)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TlsaError::CertificateParse(format!("invalid certificate PEM: {e}")))?;

        if let Some(first) = parsed.first() {
            if parsed.len() > 1 {
                debug!(
                    "found {} certificates in PEM input, using the first one",
                    parsed.len()
                );
            }
            return Self::from_der(first.as_ref());
        }

        if data.first() == Some(&DER_SEQUENCE_TAG) {
            debug!("no PEM certificate block found, parsing input as DER");
            return Self::from_der(data);
        }

        Err(TlsaError::CertificateParse(
            "no certificate found (expected PEM or DER)".to_string(),
        ))
    }

    /// Parse a single DER-encoded certificate
    ///
    /// # Errors
    ///
    /// Returns `TlsaError::CertificateParse` on malformed DER, trailing data,
    /// an unreadable Subject Alternative Name extension or invalid timestamps
    pub fn from_der(der: &[u8]) -> Result<Self, TlsaError> {
        let (rest, cert) = X509Certificate::from_der(der)
            .map_err(|e| TlsaError::CertificateParse(e.to_string()))?;

        if !rest.is_empty() {
            return Err(TlsaError::CertificateParse(format!(
                "{} trailing bytes after certificate",
                rest.len()
            )));
        }

        let subject_alt_name = cert
            .subject_alternative_name()
            .map_err(|e| {
                TlsaError::CertificateParse(format!("invalid subject alternative name: {e}"))
            })?
            .map(|ext| {
                ext.value
                    .general_names
                    .iter()
                    .map(format_general_name)
                    .collect::<Vec<_>>()
                    .join(", ")
            });

        let validity = cert.validity();

        Ok(Self {
            der: der.to_vec(),
            spki_der: cert.public_key().raw.to_vec(),
            serial: format!("{:X}", cert.tbs_certificate.serial),
            issuer: cert.issuer().to_string(),
            subject: cert.subject().to_string(),
            subject_alt_name,
            not_before: to_utc(&validity.not_before)?,
            not_after: to_utc(&validity.not_after)?,
        })
    }
}

fn to_utc(time: &ASN1Time) -> Result<DateTime<Utc>, TlsaError> {
    let raw = time.to_datetime();
    DateTime::<Utc>::from_timestamp(raw.unix_timestamp(), raw.nanosecond()).ok_or_else(|| {
        TlsaError::CertificateParse("invalid certificate validity timestamp".to_string())
    })
}

// OpenSSL-style labels, e.g. "DNS:example.com" or "IP Address:127.0.0.1"
fn format_general_name(name: &GeneralName<'_>) -> String {
    match name {
        GeneralName::DNSName(dns) => format!("DNS:{dns}"),
        GeneralName::RFC822Name(email) => format!("email:{email}"),
        GeneralName::URI(uri) => format!("URI:{uri}"),
        GeneralName::IPAddress(bytes) => format!("IP Address:{}", format_ip(bytes)),
        GeneralName::DirectoryName(dn) => format!("DirName:{dn}"),
        GeneralName::RegisteredID(oid) => format!("Registered ID:{oid}"),
        GeneralName::OtherName(..) => "othername:<unsupported>".to_string(),
        GeneralName::X400Address(_) => "X400Name:<unsupported>".to_string(),
        GeneralName::EDIPartyName(_) => "EdiPartyName:<unsupported>".to_string(),
        GeneralName::Invalid(..) => "<invalid>".to_string(),
    }
}

fn format_ip(bytes: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        Ipv4Addr::from(octets).to_string()
    } else if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        Ipv6Addr::from(octets).to_string()
    } else {
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    const EXAMPLE_PEM: &[u8] = include_bytes!("../../tests/fixtures/example.pem");
    const EXAMPLE_DER: &[u8] = include_bytes!("../../tests/fixtures/example.der");
    const NOSAN_PEM: &[u8] = include_bytes!("../../tests/fixtures/nosan.pem");

    #[test]
    fn test_parse_pem() {
        let cert = Certificate::parse(EXAMPLE_PEM).unwrap();
        assert_eq!(cert.der, EXAMPLE_DER);
        assert_eq!(cert.serial, "1A2B3C4D5E6F");
        assert!(cert.subject.contains("CN=example.com"));
        assert!(cert.subject.contains("O=Example Org"));
        assert!(cert.issuer.contains("CN=example.com"));
    }

    #[test]
    fn test_parse_der_matches_pem() {
        let from_pem = Certificate::parse(EXAMPLE_PEM).unwrap();
        let from_der = Certificate::parse(EXAMPLE_DER).unwrap();
        assert_eq!(from_pem, from_der);
    }

    #[test]
    fn test_spki_is_part_of_certificate() {
        let cert = Certificate::parse(EXAMPLE_PEM).unwrap();
        assert_eq!(cert.spki_der.len(), 294);
        assert_eq!(cert.spki_der.first(), Some(&DER_SEQUENCE_TAG));
        assert!(cert.spki_der.len() < cert.der.len());
        assert!(
            cert.der
                .windows(cert.spki_der.len())
                .any(|window| window == cert.spki_der.as_slice())
        );
    }

    #[test]
    fn test_subject_alt_name_present() {
        let cert = Certificate::parse(EXAMPLE_PEM).unwrap();
        assert_eq!(
            cert.subject_alt_name.as_deref(),
            Some("DNS:example.com, DNS:www.example.com, IP Address:127.0.0.1")
        );
    }

    #[test]
    fn test_subject_alt_name_absent() {
        let cert = Certificate::parse(NOSAN_PEM).unwrap();
        assert!(cert.subject_alt_name.is_none());
        assert_eq!(cert.serial, "1234");
        assert!(cert.subject.contains("CN=nosan.test"));
    }

    #[test]
    fn test_format_general_name_labels() {
        use x509_parser::asn1_rs::{Any, Oid, Tag};

        let oid = Oid::from(&[1, 3, 6, 1, 4, 1, 311, 20, 2, 3]).unwrap();
        let any = Any::from_tag_and_data(Tag::Sequence, &[]);

        assert_eq!(
            format_general_name(&GeneralName::DNSName("example.com")),
            "DNS:example.com"
        );
        assert_eq!(
            format_general_name(&GeneralName::IPAddress(&[192, 0, 2, 1])),
            "IP Address:192.0.2.1"
        );
        assert_eq!(
            format_general_name(&GeneralName::OtherName(oid, &[])),
            "othername:<unsupported>"
        );
        assert_eq!(
            format_general_name(&GeneralName::X400Address(any.clone())),
            "X400Name:<unsupported>"
        );
        assert_eq!(
            format_general_name(&GeneralName::EDIPartyName(any)),
            "EdiPartyName:<unsupported>"
        );
    }

    #[test]
    fn test_validity() {
        let cert = Certificate::parse(EXAMPLE_PEM).unwrap();
        assert_eq!(
            cert.not_before.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2026-10-16 08:50:59"
        );
        assert_eq!(
            cert.not_after.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2036-10-13 08:50:59"
        );
        assert!(cert.not_before < cert.not_after);
    }

    #[test]
    fn test_parse_bundle_uses_first_certificate() {
        let mut bundle = NOSAN_PEM.to_vec();
        bundle.extend_from_slice(EXAMPLE_PEM);
        let cert = Certificate::parse(&bundle).unwrap();
        assert_eq!(cert.serial, "1234");
    }

    #[test]
    fn test_parse_empty() {
        let result = Certificate::parse(&[]);
        assert!(matches!(result, Err(TlsaError::CertificateParse(_))));
    }

    #[test]
    fn test_parse_garbage() {
        let result = Certificate::parse(b"this is not a certificate");
        assert!(matches!(result, Err(TlsaError::CertificateParse(_))));
    }

    #[test]
    fn test_parse_bad_pem_body() {
        let pem = b"-----BEGIN CERTIFICATE-----\nTUlJQm9ndXM=\n-----END CERTIFICATE-----\n";
        let result = Certificate::parse(pem);
        assert!(matches!(result, Err(TlsaError::CertificateParse(_))));
    }

    #[test]
    fn test_parse_truncated_der() {
        let truncated = EXAMPLE_DER.get(..EXAMPLE_DER.len() / 2).unwrap();
        let result = Certificate::parse(truncated);
        assert!(matches!(result, Err(TlsaError::CertificateParse(_))));
    }

    #[test]
    fn test_parse_der_with_trailing_bytes() {
        let mut der = EXAMPLE_DER.to_vec();
        der.extend_from_slice(&[0, 0, 0]);
        match Certificate::from_der(&der) {
            Err(TlsaError::CertificateParse(msg)) => assert!(msg.contains("trailing")),
            other => panic!("expected CertificateParse, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = Certificate::load(Path::new("/nonexistent/tlsagen/cert.pem"));
        assert!(matches!(result, Err(TlsaError::FileRead { .. })));
    }

    #[test]
    fn test_format_ip() {
        assert_eq!(format_ip(&[192, 0, 2, 1]), "192.0.2.1");
        assert_eq!(format_ip(&Ipv6Addr::LOCALHOST.octets()), "::1");
        assert_eq!(format_ip(&[1, 2, 3]), "010203");
    }
}
