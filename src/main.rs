// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_media_widget::{
    AppState, CommandLineInput, MediaFetcher, NotionHttpClient, NotionRepository, RunMode,
    ServerConfig,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion_media_widget.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "{d(%H:%M:%S)} [{l}] - {m}{n}"
    };

    // Logs go to stderr so `fetch` output on stdout stays pipeable
    let console_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Wires the HTTP client, classifier and defaults together.
fn build_fetcher(config: &ServerConfig) -> anyhow::Result<MediaFetcher> {
    let client = NotionHttpClient::new(&config.client).context("Failed to build Notion client")?;
    let repository: Arc<dyn NotionRepository> = Arc::new(client);

    log::info!(
        "Reading columns title='{}', date='{}', visuals='{}' from {}",
        config.properties.title,
        config.properties.publish_date,
        config.properties.visuals,
        config.client.base_url
    );
    if config.defaults.database.is_none() || config.defaults.credential.is_none() {
        log::info!("No complete default database/token configured; requests must supply both");
    }

    Ok(MediaFetcher::new(
        repository,
        config.defaults.clone(),
        config.properties.clone(),
    ))
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let fetcher = build_fetcher(&config)?;

    match config.mode {
        RunMode::Serve { addr } => {
            notion_media_widget::serve(addr, AppState::new(fetcher))
                .await
                .context("Media server failed")?;
        }
        RunMode::Fetch { database, pretty } => {
            let posts = fetcher
                .fetch_media_posts(database.as_deref(), None)
                .await
                .context("Failed to fetch media posts")?;

            let json = if pretty {
                serde_json::to_string_pretty(&posts)?
            } else {
                serde_json::to_string(&posts)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ServerConfig::resolve(cli)?;

    run(config).await
}
