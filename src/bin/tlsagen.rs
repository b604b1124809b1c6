use std::process::ExitCode;
use tlsagen::{cli, tlsa::TlsaError};

fn main() -> ExitCode {
    match cli::start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // argument errors carry the usage message, which goes to stdout
            if let Some(TlsaError::Argument(usage)) = err.downcast_ref::<TlsaError>() {
                println!("{}", usage.trim_end());
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
