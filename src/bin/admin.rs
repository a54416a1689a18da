//! CLI administration tool for tutorials-api.
//!
//! Inspects and maintains the tutorial table without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all tutorials
//! cargo run --bin admin -- tutorials list
//!
//! # Delete every tutorial (asks for confirmation unless -y)
//! cargo run --bin admin -- tutorials purge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: PostgreSQL connection (required here)

use tutorials_api::config;
use tutorials_api::domain::repositories::TutorialRepository;
use tutorials_api::infrastructure::persistence::PgTutorialRepository;
use tutorials_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tutorials-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage tutorials
    Tutorials {
        #[command(subcommand)]
        action: TutorialAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Tutorial subcommands.
#[derive(Subcommand)]
enum TutorialAction {
    /// List all tutorials
    List,

    /// Delete all tutorials
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_* variables) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Tutorials { action } => handle_tutorial_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches tutorial commands.
async fn handle_tutorial_action(action: TutorialAction, pool: &PgPool) -> Result<()> {
    let repo = PgTutorialRepository::new(Arc::new(pool.clone()));

    match action {
        TutorialAction::List => list_tutorials(&repo).await,
        TutorialAction::Purge { yes } => purge_tutorials(&repo, yes).await,
    }
}

/// Prints every tutorial in store order.
///
/// ```text
/// Tutorials
///
///   ID                        Title                          Published  Created
///   ───────────────────────────────────────────────────────────────────────────────
///   665f1c2a9b3e4d5f6a7b8c9d  react native                   yes        2024-06-04 10:30
/// ```
async fn list_tutorials(repo: &PgTutorialRepository) -> Result<()> {
    println!("{}", "Tutorials".bright_blue().bold());
    println!();

    let tutorials = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tutorials: {}", e))?;

    if tutorials.is_empty() {
        println!("{}", "  No tutorials found".yellow());
        return Ok(());
    }

    println!(
        "  {:<25} {:<30} {:<10} {:<16}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Published".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(83).bright_black());

    for tutorial in &tutorials {
        let published = if tutorial.published {
            "yes".green()
        } else {
            "no".yellow()
        };

        println!(
            "  {:<25} {:<30} {:<10} {}",
            tutorial.id.bright_black(),
            truncate(&tutorial.title, 30).cyan(),
            published,
            tutorial
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        tutorials.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes every tutorial after confirmation.
async fn purge_tutorials(repo: &PgTutorialRepository, skip_confirm: bool) -> Result<()> {
    println!("{}", "Purge tutorials".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL tutorials? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = repo
        .delete_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete tutorials: {}", e))?;

    println!(
        "{} {}",
        "Deleted tutorials:".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let tutorials_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tutorials")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Tutorials:  {}",
                tutorials_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
