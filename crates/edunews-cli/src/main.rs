mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "edunews")]
#[command(about = "Education coverage monitoring for national TV news")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the current clip window and print the aggregated dataset
    Fetch {
        /// Emit the dataset as JSON on stdout instead of the text report
        #[arg(long)]
        json: bool,

        /// Concurrent keyword fetches (defaults to EDUNEWS_FETCH_MAX_CONCURRENT)
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Print the keyword catalog and exit
    Keywords,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = edunews_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Fetch { json, concurrency } => {
            report::run_fetch(&config, json, concurrency).await
        }
        Commands::Keywords => {
            report::print_keywords();
            Ok(())
        }
    }
}

/// Resolves on ctrl-c or SIGTERM. Handed to the pipeline so a landed batch
/// set still gets merged and reported on interrupt.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, finishing with completed keywords");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_fetch_defaults() {
        let cli = Cli::try_parse_from(["edunews", "fetch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Fetch {
                json: false,
                concurrency: None,
            }
        ));
    }

    #[test]
    fn parses_fetch_json_flag() {
        let cli = Cli::try_parse_from(["edunews", "fetch", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Fetch { json: true, .. }));
    }

    #[test]
    fn parses_fetch_concurrency() {
        let cli = Cli::try_parse_from(["edunews", "fetch", "--concurrency", "8"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Fetch {
                concurrency: Some(8),
                ..
            }
        ));
    }

    #[test]
    fn parses_keywords() {
        let cli = Cli::try_parse_from(["edunews", "keywords"]).unwrap();
        assert!(matches!(cli.command, Commands::Keywords));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["edunews"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_concurrency() {
        assert!(Cli::try_parse_from(["edunews", "fetch", "--concurrency", "lots"]).is_err());
    }
}
