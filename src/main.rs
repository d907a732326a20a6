mod cli;

use nasaview::{
    api::{MediaSource, NasaClient},
    config::{self, Config},
    fetch::{AssetFetcher, SearchFetcher},
    shell::{session, Route, Shell},
};
use nasaview_core::{MediaType, MediaTypeSet};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "nasaview=trace,nasaview_core=trace,reqwest=debug".to_string()
        } else {
            "nasaview=warn,nasaview_core=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(cli))
}

fn load_config(path: Option<&Path>, api_base: Option<&str>) -> Result<Config> {
    let mut config = config::load_config_or_default(path)?;
    if let Some(base) = api_base {
        config.api.base_url = base.to_string();
        config::validate_config(&config)?;
    }
    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let load = || load_config(cli.config.as_deref(), cli.api_base.as_deref());

    match cli.command {
        Commands::Search {
            query,
            media_types,
            json,
        } => {
            let config = load()?;
            let source = client(&config);
            let media_types: MediaTypeSet = media_types.into_iter().map(MediaType::from).collect();
            if json {
                let items = SearchFetcher::new(source)
                    .search(&query, &media_types)
                    .await
                    .with_context(|| format!("Search for {query:?} failed"))?;
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }

            let mut shell = Shell::new(source, &config);
            for media_type in media_types.iter() {
                shell.toggle_media_type(media_type);
            }
            shell.search(&query).await;
            print!("{}", shell.render());
        }
        Commands::Asset { id, metadata, json } => {
            let config = load()?;
            let source = client(&config);
            if json {
                let detail = AssetFetcher::new(source, config.api.lookup)
                    .fetch_asset(&id)
                    .await
                    .with_context(|| format!("Fetching asset {id} failed"))?;
                println!("{}", serde_json::to_string_pretty(&detail)?);
                return Ok(());
            }

            let mut shell = Shell::new(source, &config);
            shell.navigate(Route::Asset(id)).await;
            if metadata {
                shell.toggle_metadata();
            }
            print!("{}", shell.render());
        }
        Commands::Open { path } => {
            let config = load()?;
            let mut shell = Shell::new(client(&config), &config);
            let route = Route::parse(&path);
            if route != Route::List {
                shell.navigate(route).await;
            }
            print!("{}", shell.render());
        }
        Commands::Browse => {
            let config = load()?;
            let mut shell = Shell::new(client(&config), &config);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run(&mut shell, stdin, tokio::io::stdout()).await?;
        }
        Commands::Validate { file } => {
            let path = file.as_deref().or(cli.config.as_deref());
            validate_config(path, cli.api_base.as_deref())?;
        }
    }

    Ok(())
}

fn client(config: &Config) -> Arc<dyn MediaSource> {
    Arc::new(NasaClient::new(&config.api))
}

fn validate_config(path: Option<&Path>, api_base: Option<&str>) -> Result<()> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, using defaults"),
    }

    let config = load_config(path, api_base)?;
    println!("✓ Configuration is valid");
    print_config(&config);

    Ok(())
}

fn print_config(config: &Config) {
    println!("  API base: {}", config.api.base_url);
    match config.api.timeout() {
        Some(timeout) => println!("  Timeout: {}s", timeout.as_secs()),
        None => println!("  Timeout: none"),
    }
    println!("  Lookup: {:?}", config.api.lookup);
    println!("  Settle delay: {}ms", config.view.settle_delay_ms);
}
