use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("certfile")
                .help("Path to the certificate (PEM, or DER)")
                .required(true)
                .value_name("CERTFILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("usage")
                .help("Certificate usage: 0 PKIX-TA, 1 PKIX-EE, 2 DANE-TA, 3 DANE-EE")
                .long_help(
                    "Certificate usage field (RFC 6698 section 2.1.1):\n\n\
                    - 0: PKIX-TA, CA constraint\n\
                    - 1: PKIX-EE, service certificate constraint\n\
                    - 2: DANE-TA, trust anchor assertion\n\
                    - 3: DANE-EE, domain-issued certificate\n\n\
                    Other values are written to the record unchanged."
                )
                .required(true)
                .value_name("USAGE")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("selector")
                .help("Selector: 0 full certificate, 1 SubjectPublicKeyInfo")
                .required(true)
                .value_name("SELECTOR")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("matchingtype")
                .help("Matching type: 0 exact, 1 SHA-256, 2 SHA-512")
                .required(true)
                .value_name("MATCHINGTYPE")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("host")
                .help("Also print a zone file entry for this host name")
                .long("host")
                .short('H')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("port")
                .help("Service port of the zone file entry [default: 443]")
                .long("port")
                .short('p')
                .requires("host")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("proto")
                .help("Transport protocol of the zone file entry [default: tcp]")
                .long("proto")
                .requires("host")
                .value_name("PROTO")
                .value_parser(["tcp", "udp", "sctp"]),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity on stderr (-v, -vv, -vvv)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
