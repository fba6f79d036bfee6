use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slate::api::client::create_http_client;
use slate::api::position::PositionLoader;
use slate::api::stage_update::HttpStageUpdate;
use slate::commands::show;
use slate::config;
use slate::tui;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Recruiting pipeline kanban board for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (falls back to SLATE_API_URL, then
    /// http://localhost:3010)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board for a position
    Board {
        /// Position identifier
        position_id: i64,
    },

    /// Print the board for a position and exit
    Show {
        /// Position identifier
        position_id: i64,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let base_url = config::resolve_api_url(cli.api_url);
    let client = create_http_client().context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Board { position_id } => {
            let data = PositionLoader::new(&client, &base_url)
                .load(position_id)
                .context("Failed to load position")?;

            let service = HttpStageUpdate::new(client.clone(), base_url.clone());
            let reload = move || PositionLoader::new(&client, &base_url).load(position_id);

            tui::run_board(data, service, reload)
        }
        Commands::Show { position_id } => {
            let data = PositionLoader::new(&client, &base_url)
                .load(position_id)
                .context("Failed to load position")?;

            show::execute(data)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
