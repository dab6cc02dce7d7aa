//! `sf-schema`: list an SObject's fields or show one field's full descriptor.
//!
//! ```sh
//! sf-schema fields -n Account
//! sf-schema fields -n Account -s label
//! sf-schema fields -n Account -f industry
//! sf-schema fields -n Account --target-org dev --json
//! ```

use std::process::ExitCode;

use busbar_sf_schema::cli::{self, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "busbar_sf_schema=debug,busbar_sf_rest=debug,busbar_sf_client=debug,busbar_sf_auth=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { VERBOSE_FILTER } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.run(&mut out).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            if cli.json {
                if cli::write_json_error(&err, &mut out).is_err() {
                    eprintln!("Error: {err}");
                }
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
