//! CLI administration tool for the link registry.
//!
//! Inspects and maintains the PostgreSQL link store without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- list
//!
//! # Show one link without counting a click
//! cargo run --bin admin -- show aB3dE9
//!
//! # Delete a link
//! cargo run --bin admin -- delete 42
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL`, or `DB_HOST`,
//! `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`.

use link_registry::application::services::LinkService;
use link_registry::config::Config;
use link_registry::domain::entities::Link;
use link_registry::infrastructure::persistence::PgLinkRepository;
use link_registry::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type PgLinkService = LinkService<PgLinkRepository>;

/// CLI tool for managing the link registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links, newest first
    List,

    /// Show a single link by short code
    Show {
        /// Short code to look up
        code: String,
    },

    /// Delete a link by id
    Delete {
        /// Link id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_database(&config).await?;

    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool))));

    match cli.command {
        Commands::List => list_links(&service).await?,
        Commands::Show { code } => show_link(&service, &code).await?,
        Commands::Delete { id, yes } => delete_link(&service, id, yes).await?,
        Commands::Stats => show_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Lists every link as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID    Code    Clicks   Created            URL
///   ───────────────────────────────────────────────────────────────────────────
///   2     aB3dE9  12       2025-01-16 14:20   https://example.com/page
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<7} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        print_row(link);
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_row(link: &Link) {
    println!(
        "  {:<5} {:<7} {:<8} {:<18} {}",
        link.id.to_string().bright_black(),
        link.short_code.cyan(),
        link.clicks.to_string().bright_green(),
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black(),
        link.original_url
    );
}

/// Shows one link. Does not count as a click.
async fn show_link(service: &PgLinkService, code: &str) -> Result<()> {
    let link = service
        .get_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  Code:     {}", link.short_code.cyan());
    println!("  URL:      {}", link.original_url);
    println!("  Clicks:   {}", link.clicks.to_string().bright_green());
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
async fn delete_link(service: &PgLinkService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Done".green().bold());
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn show_stats(service: &PgLinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (links, clicks) = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Links:  {}", links.to_string().bright_green().bold());
    println!("  Clicks: {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &PgLinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !service.health().await {
                anyhow::bail!("Database connection failed");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
