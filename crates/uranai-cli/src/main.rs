//! Uranai CLI - Daily zodiac video prompts
//!
//! Generates prompt files for a video-generation site and prints the manual
//! runbook for turning them into videos.

mod api;
mod config;
mod report;
mod store;
mod workflow;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use uranai::{today_jst, VideoLink, ZodiacSign};

use api::RankingClient;
use config::Config;
use report::format_runbook;
use store::{PromptStore, ResultStore};
use workflow::Workflow;

#[derive(Parser)]
#[command(name = "uranai")]
#[command(about = "Uranai CLI - Daily zodiac video prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate today's prompt file
    ///
    /// Without a language every sign gets an unranked prompt; with one, the
    /// top three of today's ranking are used.
    Generate {
        /// Ranking language (e.g. "ja", "en")
        lang: Option<String>,
    },

    /// Load (or generate) today's prompts and print the runbook
    Daily {
        /// Ranking language used if prompts must be generated
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Record a finished video link for today
    Record {
        /// Sign the video belongs to
        sign: String,
        /// Video URL (will prompt if not provided)
        url: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { lang } => cmd_generate(lang).await,
        Commands::Daily { lang } => cmd_daily(lang).await,
        Commands::Record { sign, url } => cmd_record(sign, url),
        Commands::Config => cmd_config(),
    }
}

fn workflow(config: &Config) -> Result<Workflow<RankingClient>> {
    let client = RankingClient::new(&config.base_url, config.timeout())?;
    Ok(Workflow::new(client, PromptStore::new(config.prompts_dir())))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_generate(lang: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let workflow = workflow(&config)?;
    let today = today_jst();

    match lang {
        Some(lang) => workflow.run_ranking(&lang, today).await?,
        None => workflow.run_all_signs(today)?,
    };

    Ok(())
}

async fn cmd_daily(lang: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let workflow = workflow(&config)?;
    let today = today_jst();
    let lang = lang.unwrap_or_else(|| config.lang.clone());

    let prompts = workflow.load_today(&lang, today).await;
    if prompts.is_empty() {
        eprintln!("{} No prompts available", "ERROR:".red().bold());
        std::process::exit(1);
    }

    println!("{}", format_runbook(today, &prompts));
    Ok(())
}

fn cmd_record(sign: String, url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let today = today_jst();

    let sign: ZodiacSign = sign.parse().map_err(anyhow::Error::msg)?;

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt(format!("Video link for {}", sign))
            .interact_text()
            .context("Failed to read input")?,
    };
    let url = url.trim().to_string();
    if url.is_empty() {
        bail!("Video link cannot be empty");
    }

    // Carry the rank over from today's prompts when they exist
    let prompts = PromptStore::new(config.prompts_dir());
    let rank = if prompts.exists(today) {
        prompts
            .load(today)?
            .into_iter()
            .find(|p| p.sign == sign.as_str())
            .and_then(|p| p.rank)
    } else {
        None
    };

    let results = ResultStore::new(config.results_dir());
    let (path, links) = results.record(VideoLink {
        rank,
        sign: sign.to_string(),
        url,
        date: today,
    })?;

    println!(
        "{} Link for {} saved to {:?} ({} recorded today)",
        "✓".green(),
        sign.as_str().cyan(),
        path,
        links.len()
    );

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Language: {}", config.lang.cyan());
    println!("  Timeout: {}s", config.timeout_secs);
    println!("  Prompts: {:?}", config.prompts_dir());
    println!("  Results: {:?}", config.results_dir());

    Ok(())
}
