use clap::{CommandFactory, Parser};
use tracing::{debug, info, Level};

use videolectures_dl::cli::Cli;
use videolectures_dl::core::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    if !cli.url_is_plausible() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    info!("Starting videolectures-dl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.run().await {
        // Extraction and download errors were already reported on stderr
        if e.downcast_ref::<Error>().is_none() {
            eprintln!("ERROR: {:#}", e);
        }
        debug!("Run failed: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
