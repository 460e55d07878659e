use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use risk_catalog::config::Config;
use risk_catalog::{logging, server, Catalogue};

#[derive(Parser)]
#[command(name = "risk-catalog")]
#[command(about = "Generative AI security scoping matrix: API server and lookup tool")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CatalogueArgs {
    /// Serve a dataset from a .toml or .json file instead of the built-in matrix
    #[arg(long)]
    catalogue: Option<PathBuf>,
}

impl CatalogueArgs {
    /// The flag wins over the config file and environment
    fn or_configured(self, config: &Config) -> Option<PathBuf> {
        self.catalogue.or_else(|| config.catalogue.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to run the server on
        #[arg(short, long)]
        port: Option<u16>,
        #[command(flatten)]
        source: CatalogueArgs,
    },
    /// Print every scope as JSON
    Scopes {
        #[command(flatten)]
        source: CatalogueArgs,
    },
    /// Print every discipline as JSON
    Disciplines {
        #[command(flatten)]
        source: CatalogueArgs,
    },
    /// Print the recommendation for one scope and discipline
    Recommend {
        #[arg(allow_negative_numbers = true)]
        scope_id: i64,
        discipline_id: String,
        #[command(flatten)]
        source: CatalogueArgs,
    },
    /// Check that a catalogue file loads and passes validation
    Validate { path: PathBuf },
}

fn load_catalogue(path: Option<&Path>) -> Result<Catalogue> {
    match path {
        Some(path) => Catalogue::from_path(path)
            .with_context(|| format!("loading catalogue from {}", path.display())),
        None => Ok(Catalogue::builtin()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?.apply_env()?;

    match cli.command {
        Commands::Serve { host, port, source } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.catalogue = source.or_configured(&config);

            let _guard = logging::init_logging(&config.logging);

            let catalogue = load_catalogue(config.catalogue.as_deref())?;
            info!(
                scopes = catalogue.list_scopes().len(),
                disciplines = catalogue.list_disciplines().len(),
                "Catalogue ready"
            );

            let addr = config.socket_addr()?;
            if let Err(e) = server::start_server(catalogue, addr).await {
                error!("Server failed: {e}");
                eprintln!("❌ Server failed: {e}");
                return Err(e);
            }
        }
        Commands::Scopes { source } => {
            let catalogue = load_catalogue(source.or_configured(&config).as_deref())?;
            print_json(catalogue.list_scopes())?;
        }
        Commands::Disciplines { source } => {
            let catalogue = load_catalogue(source.or_configured(&config).as_deref())?;
            print_json(catalogue.list_disciplines())?;
        }
        Commands::Recommend {
            scope_id,
            discipline_id,
            source,
        } => {
            let catalogue = load_catalogue(source.or_configured(&config).as_deref())?;
            let recommendation = catalogue.get_recommendation(scope_id, &discipline_id)?;
            print_json(&recommendation)?;
        }
        Commands::Validate { path } => {
            let catalogue = load_catalogue(Some(path.as_path()))?;
            println!(
                "✅ {}: {} scopes, {} disciplines",
                path.display(),
                catalogue.list_scopes().len(),
                catalogue.list_disciplines().len()
            );
        }
    }

    Ok(())
}
