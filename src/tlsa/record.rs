use super::{CertUsage, Certificate, MatchingType, Selector};
use std::{fmt, str::FromStr};
use tracing::{debug, warn};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// A TLSA record ready for presentation (RFC 6698 §2.2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsaRecord {
    pub usage: CertUsage,
    pub selector: Selector,
    pub matching_type: MatchingType,
    /// Certificate association data
    pub data: Vec<u8>,
}

impl TlsaRecord {
    /// Select the certificate data and apply the matching type
    #[must_use]
    pub fn generate(
        cert: &Certificate,
        usage: CertUsage,
        selector: Selector,
        matching_type: MatchingType,
    ) -> Self {
        if usage.mnemonic().is_none() {
            warn!("certificate usage {usage} is not an assigned value, passing it through");
        }

        let selected = selector.select(cert);
        debug!(
            "selector {} ({}) picked {} bytes",
            selector,
            selector.mnemonic(),
            selected.len()
        );

        let data = matching_type.apply(selected);
        debug!(
            "matching type {} ({}) produced {} bytes",
            matching_type,
            matching_type.mnemonic(),
            data.len()
        );

        Self {
            usage,
            selector,
            matching_type,
            data,
        }
    }

    /// Lowercase hex of the association data
    #[must_use]
    pub fn association_hex(&self) -> String {
        hex::encode(&self.data)
    }
}

impl fmt::Display for TlsaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.usage,
            self.selector,
            self.matching_type,
            self.association_hex()
        )
    }
}

/// Transport protocol label of a TLSA owner name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "sctp" => Ok(Self::Sctp),
            _ => Err(format!("Invalid protocol: {s}")),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Sctp => "sctp",
        })
    }
}

/// Owner name of a TLSA record, `_<port>._<proto>.<host>.` (RFC 6698 §3)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOwner {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
}

impl fmt::Display for ZoneOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "_{}._{}.{}.",
            self.port,
            self.protocol,
            self.host.trim_end_matches('.')
        )
    }
}

/// Human readable output: certificate metadata followed by the record
#[derive(Debug)]
pub struct Report<'a> {
    pub certificate: &'a Certificate,
    pub record: &'a TlsaRecord,
    pub owner: Option<&'a ZoneOwner>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cert = self.certificate;

        writeln!(f, "Serial Number: {}", cert.serial)?;
        writeln!(f, "Issuer: {}", cert.issuer)?;
        writeln!(f, "Subject: {}", cert.subject)?;
        if let Some(san) = &cert.subject_alt_name {
            writeln!(f, "Subject Alternative Name: {san}")?;
        }
        writeln!(f, "Not Before: {}", cert.not_before.format(TIME_FORMAT))?;
        writeln!(f, "Not After: {}", cert.not_after.format(TIME_FORMAT))?;
        writeln!(f)?;
        writeln!(f, "Generated TLSA Record:")?;
        writeln!(f, "{}", self.record)?;

        if let Some(owner) = self.owner {
            writeln!(f)?;
            writeln!(f, "Zone File Entry:")?;
            writeln!(f, "{owner} IN TLSA {}", self.record)?;
        }

        Ok(())
    }
}
