use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;

use brief::config::Config;
use brief::feed::FeedRegistry;
use brief::pipeline::{self, Digest};
use brief::summarizer;

const USER_AGENT: &str = concat!("brief/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "brief", about = "Aggregate RSS/Atom feeds into a daily news digest")]
struct Args {
    /// Category slugs to aggregate (comma-separated; defaults to the
    /// configured list)
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,

    /// Maximum articles per category
    #[arg(long, value_name = "N")]
    per_category: Option<usize>,

    /// Config file path (default: ~/.config/brief/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the summarization pass even when a key is configured
    #[arg(long)]
    no_summarize: bool,

    /// Pretty-print the digest JSON
    #[arg(long)]
    pretty: bool,
}

/// Get the default config file path (~/.config/brief/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("brief")
        .join("config.toml"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so stdout stays a clean JSON stream for consumers
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    let categories = if args.categories.is_empty() {
        config.categories.clone()
    } else {
        args.categories.clone()
    };
    // Invalid configuration is the one thing that fails fast; everything
    // downstream degrades to an empty contribution instead.
    anyhow::ensure!(
        !categories.is_empty(),
        "no categories configured (pass --categories or set them in the config file)"
    );
    let per_category = args.per_category.unwrap_or(config.articles_per_category);
    anyhow::ensure!(per_category > 0, "per-category limit must be at least 1");

    // Env vars take precedence over config file values
    let news_api_key = std::env::var("NEWS_API_KEY")
        .ok()
        .or_else(|| config.news_api_key.clone())
        .filter(|key| !key.is_empty())
        .map(SecretString::from);
    let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY")
        .ok()
        .or_else(|| config.anthropic_api_key.clone())
        .filter(|key| !key.is_empty())
        .map(SecretString::from);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let registry = FeedRegistry::builtin();
    let mut articles = pipeline::collect_articles(
        &client,
        &registry,
        &categories,
        per_category,
        news_api_key.as_ref(),
        None,
    )
    .await;

    if articles.is_empty() {
        tracing::warn!("every source came back empty; emitting an empty digest");
    }

    if !args.no_summarize {
        summarizer::enrich_articles(
            &client,
            &mut articles,
            anthropic_api_key.as_ref(),
            None,
            config.max_top_stories,
        )
        .await;
    }

    let digest = Digest::assemble(articles, config.max_top_stories, config.max_quick_hits);
    let json = if args.pretty {
        serde_json::to_string_pretty(&digest)
    } else {
        serde_json::to_string(&digest)
    }
    .context("Failed to serialize digest")?;
    println!("{json}");

    Ok(())
}
