use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use vahan_lookup::domain::{RegistrationNumber, VehicleRecord};
use vahan_lookup::lookup::lookup;
use vahan_lookup::parivahan::{ParivahanClient, ParivahanConfig};
use vahan_lookup::report::{self, BANNER, DISCLAIMER};

/// Printed on stdout for any argument error.
const USAGE: &str = "Usage: vahan-lookup [--json] [--timeout <SECS>] <REG_NUMBER>
Example: vahan-lookup KL07CN3645";

/// Exit code for a registration number with the wrong shape.
const EXIT_INVALID_FORMAT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "vahan-lookup",
    about = "Look up non-sensitive vehicle details for an Indian registration number",
    version
)]
struct Cli {
    /// Registration number without spaces, e.g. KL07CN3645.
    registration: String,

    /// Print the record as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds (no timeout by default).
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let registration = match RegistrationNumber::parse(&cli.registration) {
        Ok(registration) => registration,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_INVALID_FORMAT);
        }
    };

    if !cli.json {
        println!("\n{BANNER}\n");
    }

    let mut config = ParivahanConfig::new();
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }

    let record = match ParivahanClient::new(config) {
        Ok(client) => lookup(&client, &registration).await,
        Err(e) => VehicleRecord::from_error(e.to_string()),
    };

    if cli.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize record: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match report::render(&record) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to render report: {e}");
                return ExitCode::FAILURE;
            }
        }
        println!("\n{DISCLAIMER}\n");
    }

    ExitCode::SUCCESS
}
