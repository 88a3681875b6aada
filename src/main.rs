use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use country_search::config::Config;
use country_search::{headless, logging, ui, HttpCatalog, Normalizer, SearchSession};

#[derive(Debug, Parser)]
#[command(name = "country-search", version, about = "Search a remote country catalog")]
struct Cli {
    /// Catalog endpoint, overrides the config file.
    #[arg(long)]
    url: Option<String>,

    /// Config file path (default: platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print matching country names and exit instead of opening the UI.
    #[arg(long)]
    list: bool,

    /// Search term applied before listing.
    #[arg(short, long, requires = "list")]
    query: Option<String>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(url) = &cli.url {
        config.catalog.url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    let config = load_config(&cli)?;
    let source = HttpCatalog::new(&config.catalog).context("Failed to build HTTP client")?;
    let mut session = SearchSession::new(Arc::new(source), Normalizer::new(config.fields));

    if cli.list {
        let mut stdout = io::stdout().lock();
        headless::run_list(&mut session, cli.query.as_deref(), &mut stdout).await?;
        return Ok(());
    }

    tokio::task::block_in_place(|| ui::run(ui::App::new(session)))
}
