use super::Action;
use crate::tlsa::{Certificate, Report, TlsaRecord};
use tracing::info;

/// Execute the action's business logic by delegating to the tlsa module
pub fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Generate {
            certfile,
            usage,
            selector,
            matching_type,
            owner,
        } => {
            let certificate = Certificate::load(&certfile)?;
            info!("loaded certificate {}", certfile.display());

            let record = TlsaRecord::generate(&certificate, usage, selector, matching_type);

            // render fully before writing so a failure never leaves partial output
            let report = Report {
                certificate: &certificate,
                record: &record,
                owner: owner.as_ref(),
            }
            .to_string();

            print!("{report}");

            Ok(())
        }
    }
}
