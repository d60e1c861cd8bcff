use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use issue_tracker::{api, config::ServerConfig, IssueStore};

#[derive(Parser)]
#[command(name = "issue-tracker")]
#[command(about = "In-memory issue tracking REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Address to bind [env: ISSUE_TRACKER_HOST, default: 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API [env: ISSUE_TRACKER_PORT, default: 3000]
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "issue_tracker=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = IssueStore::new();
    let app = api::create_router_with_config(store, &config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(address.as_str()).await?;
    tracing::info!("Issue tracker listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.command {
        Some(Commands::Serve { host, port }) => ServerConfig::from_env().with_overrides(host, port),
        None => ServerConfig::from_env(),
    };

    serve(config).await
}
