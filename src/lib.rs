//! Generate DANE TLSA records (RFC 6698) from X.509 certificates.

pub mod cli;
pub mod tlsa;
