mod cli;

use clap::Parser;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;
use vsan_capacity::{ReportOutcome, VsanClient, VsanResult, logging, run_report};

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;
/// Status for the two guard failures (old vCenter, unknown cluster).
const GUARD_FAILURE: u8 = 255;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let password = match args.password.clone() {
        Some(password) => password,
        None => match rpassword::prompt_password(args.password_prompt()) {
            Ok(password) => password,
            Err(e) => {
                eprintln!("Error: failed to read password: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let result = run(&args, password).await;
    ExitCode::from(emit(result, &mut io::stdout(), &mut io::stderr()))
}

/// Writes the outcome of a run and returns the process exit status.
///
/// The report and the guard failures go to `out`, other errors to `err`.
fn emit(result: VsanResult<ReportOutcome>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match result {
        Ok(ReportOutcome::Reported(report)) => match write!(out, "{}", report) {
            Ok(()) => SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "Error: failed to write report: {}", e);
                FAILURE
            }
        },
        Ok(ReportOutcome::Skipped { api_type }) => {
            debug!(?api_type, "nothing to report");
            SUCCESS
        }
        Err(e) if e.is_guard_failure() => {
            let _ = writeln!(out, "{}", e);
            GUARD_FAILURE
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            FAILURE
        }
    }
}

async fn run(args: &cli::Args, password: String) -> VsanResult<ReportOutcome> {
    let client = VsanClient::builder()
        .host(args.host.as_str())
        .port(args.port)
        .credentials(args.user.as_str(), password)
        .accept_invalid_certs(!args.strict_tls)
        .build()?;

    let cluster_name = args.cluster_name.clone();
    let host = args.host.clone();
    client
        .with_session(move |session| async move {
            run_report(&session, &cluster_name, &host).await
        })
        .await
}
