//! pii-redactor: client-side PII redaction sidecar for LLM pipelines.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cloak_core::CloakError;
use cloak_sidecar::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let args = Cli::parse();
    match args.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code(&err)
        }
    }
}

/// 2 invalid arguments, 3 vault unavailable, 1 anything else. Usage
/// errors exit 2 inside clap before we get here.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CloakError>() {
        Some(CloakError::InvalidInput { .. }) => ExitCode::from(2),
        Some(CloakError::VaultUnavailable { .. }) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}
