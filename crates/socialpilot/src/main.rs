//! SocialPilot: headless social-media cross-posting automation.
//!
//! Subcommands:
//! - `daemon`: recurring reconcile passes plus the liveness web server
//! - `run-once`: a single reconcile pass, then exit (manual trigger)

use clap::{Args, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod daemon;

/// Connection settings shared by every subcommand.
#[derive(Args, Clone)]
struct ConnectionArgs {
    /// Spreadsheet holding the posting schedule
    #[arg(long, env = "GOOGLE_SHEET_ID")]
    spreadsheet_id: String,

    /// Tab name within the spreadsheet
    #[arg(long, default_value = "Sheet1")]
    sheet_tab: String,

    /// Bearer token for the Sheets and Drive APIs
    #[arg(long, env = "GOOGLE_API_TOKEN")]
    google_token: String,

    /// Distribution API key
    #[arg(long, env = "UPLOAD_POST_API_KEY")]
    upload_api_key: String,

    /// Distribution API account identifier
    #[arg(long, env = "UPLOAD_POST_USER_ID")]
    upload_user: String,
}

#[derive(Parser)]
#[command(name = "socialpilot")]
#[command(about = "Headless social-media cross-posting automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the automation daemon (recurring passes + web server)
    Daemon {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Seconds between reconcile passes
        #[arg(long, default_value = "3600")]
        poll_interval: u64,

        /// Web server port
        #[arg(long, env = "PORT", default_value = "5000")]
        port: u16,
    },

    /// Run a single reconcile pass and exit
    RunOnce {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Generate a title and description for a topic (operator helper)
    Enrich {
        /// Gemini API key
        #[arg(long, env = "GEMINI_API_KEY")]
        gemini_api_key: String,

        /// What the video is about
        #[arg(long)]
        topic: String,

        /// Target platforms, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "tiktok,instagram,youtube")]
        platforms: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "socialpilot=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Daemon {
            connection,
            poll_interval,
            port,
        } => daemon::run(config(connection, poll_interval, port)).await,

        Commands::RunOnce { connection } => daemon::run_once(config(connection, 0, 0)).await,

        Commands::Enrich {
            gemini_api_key,
            topic,
            platforms,
        } => enrich(gemini_api_key, topic, platforms).await,
    }
}

async fn enrich(api_key: String, topic: String, platforms: Vec<String>) -> Result<()> {
    let client = socialpilot_enrich::EnrichClient::new(api_key);
    let metadata = client
        .generate(&topic, &platforms)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    println!("Title: {}\n\n{}", metadata.title, metadata.description);
    Ok(())
}

fn config(connection: ConnectionArgs, poll_interval: u64, port: u16) -> daemon::Config {
    daemon::Config {
        spreadsheet_id: connection.spreadsheet_id,
        sheet_tab: connection.sheet_tab,
        google_token: connection.google_token,
        upload_api_key: connection.upload_api_key,
        upload_user: connection.upload_user,
        poll_interval,
        port,
    }
}
