use super::{commands, dispatch, telemetry};
use crate::tlsa::TlsaError;
use anyhow::Result;
use clap::error::ErrorKind;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Extract Verbosity: Convert flag count to logging level
/// 3. Initialize Telemetry: Set up structured logging on stderr
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the action's business logic
///
/// `--help` and `--version` are printed here and return `Ok`.
///
/// # Errors
///
/// Returns `TlsaError::Argument` carrying the usage message when the
/// arguments are missing or malformed, or any error from the later steps
pub fn start() -> Result<()> {
    // 1. Parse: Extract CLI arguments
    let matches = match commands::new().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            _ => return Err(TlsaError::Argument(usage_message(&err)).into()),
        },
    };

    // 2. Extract Verbosity
    let verbosity = matches.get_count("verbose");

    // 3. Initialize Telemetry
    telemetry::init(verbosity)?;

    // 4. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches)?;

    // 5. Execute: Run the action's business logic
    action.execute()?;

    Ok(())
}

/// clap's rendered error, followed by the usage line when clap left it out
/// (value validation errors only point at `--help`)
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    if rendered.contains("Usage:") {
        return rendered;
    }

    let usage = commands::new().render_usage();
    format!("{}\n\n{usage}", rendered.trim_end())
}
