#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

/// SHA-256 of the `SubjectPublicKeyInfo` of `example.pem`
pub const EXAMPLE_SPKI_SHA256: &str =
    "c7bc53211205547e6c7e5435dbde3250707c16d6d34f1b731ddf117a9653b2bf";

/// SHA-256 of the DER encoding of `example.pem`
pub const EXAMPLE_CERT_SHA256: &str =
    "246f1b5ec7e79f6d959e5361a4c18ac3ec62211e19cbcf1c2c70b789567094ea";

/// SHA-256 of the `SubjectPublicKeyInfo` of `nosan.pem`
pub const NOSAN_SPKI_SHA256: &str =
    "00dccaca20725f54ca0ae4fa7f23b92497ae95975b09b019e8e8a4f76d971a97";

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the tlsagen binary with the given arguments
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tlsagen"))
        .args(args)
        .output()
        .expect("failed to run tlsagen")
}

/// Run the tlsagen binary with `cert` as the first argument
pub fn run_with_cert(cert: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tlsagen"))
        .arg(cert)
        .args(args)
        .output()
        .expect("failed to run tlsagen")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

pub fn last_line(output: &Output) -> String {
    stdout(output).lines().next_back().unwrap_or_default().to_string()
}
