use crate::{
    cli::actions::Action,
    tlsa::{CertUsage, MatchingType, Protocol, Selector, ZoneOwner},
};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 443;

/// Build the zone owner name from `--host`, `--port` and `--proto`
fn extract_zone_owner(matches: &ArgMatches) -> Result<Option<ZoneOwner>> {
    let Some(host) = matches.get_one::<String>("host") else {
        return Ok(None);
    };

    if host.trim_end_matches('.').is_empty() {
        bail!("invalid --host {host:?}: host name is empty");
    }

    let port = matches
        .get_one::<u16>("port")
        .copied()
        .unwrap_or(DEFAULT_PORT);

    let protocol = matches
        .get_one::<String>("proto")
        .map(|p| p.parse::<Protocol>().map_err(anyhow::Error::msg))
        .transpose()?
        .unwrap_or_default();

    Ok(Some(ZoneOwner {
        host: host.clone(),
        port,
        protocol,
    }))
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if a required argument is missing or the selector or
/// matching type is not supported
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let certfile = matches
        .get_one::<PathBuf>("certfile")
        .cloned()
        .context("certificate file is required")?;

    // usage is written to the record as given
    let usage = matches
        .get_one::<i64>("usage")
        .copied()
        .map(CertUsage::from)
        .context("usage is required")?;

    let selector = matches
        .get_one::<i64>("selector")
        .copied()
        .context("selector is required")?;
    let selector = Selector::try_from(selector)?;

    let matching_type = matches
        .get_one::<i64>("matchingtype")
        .copied()
        .context("matching type is required")?;
    let matching_type = MatchingType::try_from(matching_type)?;

    let owner = extract_zone_owner(matches)?;

    Ok(Action::Generate {
        certfile,
        usage,
        selector,
        matching_type,
        owner,
    })
}
