//! CLI entrypoint for misscan-concierge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use concierge_application::{ConversationLogger, CulinaryAdvisor, Storefront};
use concierge_domain::{Catalog, Model};
use concierge_infrastructure::{
    ConfigLoader, FileConfig, GeminiAdviceGateway, JsonlConversationLogger,
};
use concierge_presentation::storefront::card::render_catalog;
use concierge_presentation::{Cli, ConsoleFormatter, ReplConfig, StorefrontRepl, ask_once};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", ConfigLoader::render(&config));
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    if !config.repl.color {
        colored::control::set_override(false);
    }

    info!("Starting misscan-concierge");

    let catalog = Catalog::miss_can();

    if cli.catalog {
        println!("{}", render_catalog(&catalog));
        return Ok(());
    }

    // === Dependency Injection ===
    let storefront = build_storefront(&cli, &config, catalog)?;
    let show_progress = !cli.quiet && config.repl.show_progress;

    // Single question mode
    if let Some(question) = cli.ask.as_deref() {
        let mut storefront = storefront;
        match ask_once(&mut storefront, question, cli.product.as_deref(), show_progress).await? {
            Some(reply) => println!("{}", reply),
            None => eprintln!("{}", ConsoleFormatter::error("The question is empty.")),
        }
        return Ok(());
    }

    let repl_config = ReplConfig {
        show_progress,
        history_file: config.repl.history_path(),
    };
    StorefrontRepl::new(storefront, repl_config).run().await?;

    Ok(())
}

fn build_storefront(cli: &Cli, config: &FileConfig, catalog: Catalog) -> Result<Storefront> {
    let gateway = GeminiAdviceGateway::new(
        config.advisor.base_url.clone(),
        config.advisor.api_key_source(),
        config.advisor.timeout(),
    )
    .context("Failed to create the Gemini client")?;

    let mut params = config.advisor_params();
    if let Some(model) = cli.model.as_deref().filter(|m| !m.trim().is_empty()) {
        let Ok(model) = model.parse::<Model>();
        params = params.with_model(model);
    }
    if params.model.is_known() {
        info!("Advisor model: {}", params.model);
    } else {
        warn!("Model {} is not a known Gemini model; sending it as-is", params.model);
    }

    let conversation_logger: Option<Arc<dyn ConversationLogger>> = config
        .logging
        .conversation_log
        .as_deref()
        .and_then(|path| match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Some(Arc::new(logger) as Arc<dyn ConversationLogger>)
            }
            None => {
                warn!("Conversation log disabled: cannot open {}", path);
                None
            }
        });

    let mut advisor = CulinaryAdvisor::new(Arc::new(gateway), params);
    if let Some(logger) = &conversation_logger {
        advisor = advisor.with_conversation_logger(Arc::clone(logger));
    }

    let mut storefront = Storefront::new(catalog, Arc::new(advisor));
    if let Some(logger) = conversation_logger {
        storefront = storefront.with_conversation_logger(logger);
    }

    Ok(storefront)
}
