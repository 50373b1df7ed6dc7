use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autoassist::{agents::Agents, api, config::Config, risk};

const DEFAULT_PORT: u16 = 7860;

#[derive(Parser)]
#[command(name = "autoassist")]
#[command(about = "Multi-agent DIY auto repair planner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web UI and stage API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port for the web UI and HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Run the safety keyword screen on a question without calling any provider
    Risk {
        /// Question text to screen
        text: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "autoassist=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: IpAddr, port: u16) -> anyhow::Result<()> {
    // Both provider keys must be present before anything is served.
    let config = Config::from_env()?;
    let agents = Agents::from_config(&config);
    let security = api::SecurityConfig::from_env();

    tracing::info!(
        openai_model = %config.openai.model,
        groq_model = %config.groq.model,
        auth = security.api_key.is_some(),
        "Starting AutoAssist"
    );

    let app = api::create_router_with_config(agents, security);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("AutoAssist listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await?,
        Some(Commands::Risk { text }) => {
            let report = risk::assess(&text);
            if report.note.is_empty() {
                println!("No high-risk keywords found.");
            } else {
                print!("{}", report.note);
            }
        }
        None => serve(IpAddr::from([127, 0, 0, 1]), DEFAULT_PORT).await?,
    }

    Ok(())
}
