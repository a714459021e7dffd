//! Marquee CLI binary.
//!
//! - Serve the HTTP API with research gathered on a schedule
//! - Gather research once and print it
//! - Regenerate a single movie from the command line

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Commands, gather_research, load_config, parse_with_env, regenerate_movie, serve_api};

    let cli = parse_with_env(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    if cli.telemetry {
        marquee::init_telemetry()?;
    } else {
        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .init();
    }

    let config = load_config(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Serve { bind } => serve_api(&config, bind).await,
        Commands::Gather => gather_research(&config).await,
        Commands::Regenerate { slug, title } => regenerate_movie(&config, &slug, &title).await,
    };

    if cli.telemetry {
        marquee::shutdown_telemetry();
    }

    result?;
    Ok(())
}
