//! CLI administration tool for link-shortener.
//!
//! Seeds and inspects links directly through [`LinkService`], without going
//! through the HTTP surface.
//!
//! # Usage
//!
//! ```bash
//! # Shorten the built-in seed URLs (skipped if links already exist)
//! cargo run --bin admin -- seed
//!
//! # Shorten specific URLs (always runs)
//! cargo run --bin admin -- seed https://example.org https://rust-lang.org
//!
//! # Look up a short code
//! cargo run --bin admin -- show 1
//!
//! # Count stored links
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (see `link_shortener::config`).

use link_shortener::application::services::LinkService;
use link_shortener::config;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// URLs shortened by `seed` when none are given.
const SEED_URLS: &[&str] = &[
    "https://www.basecampcodingacademy.org",
    "https://docs.djangoproject.com/en/2.0/",
    "https://github.com/BaseCampCoding/django-views",
];

/// CLI tool for managing link-shortener.
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
    /// Shorten a list of URLs and print their codes
    Seed {
        /// URLs to shorten (defaults to the built-in seed list)
        urls: Vec<String>,

        /// Seed even if links already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Show the link behind a short code
    Show {
        /// Short code to resolve
        code: String,
    },

    /// Show statistics
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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Seed { urls, force } => seed(&service, urls, force).await?,
        Commands::Show { code } => show(&service, &code).await?,
        Commands::Stats => stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Whether the built-in seed should be skipped. URLs given explicitly are
/// always shortened.
fn should_skip_seed(explicit_urls: bool, existing: i64, force: bool) -> bool {
    !explicit_urls && existing > 0 && !force
}

/// Shortens each URL and prints `Shortened: <url> => <code>`.
///
/// With no URLs given, the built-in list is used, and skipped when links
/// already exist unless `force` is set. Invalid URLs are reported and
/// skipped; the run only fails on database errors.
async fn seed(
    service: &LinkService<PgLinkRepository>,
    urls: Vec<String>,
    force: bool,
) -> Result<()> {
    let explicit_urls = !urls.is_empty();

    if !explicit_urls {
        let existing = service
            .count()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to count links: {e}"))?;

        if should_skip_seed(explicit_urls, existing, force) {
            println!(
                "{}",
                format!("⚠️  {existing} links already stored, skipping seed (use --force)")
                    .yellow()
            );
            return Ok(());
        }
    }

    let urls = if explicit_urls {
        urls
    } else {
        SEED_URLS.iter().map(|u| u.to_string()).collect()
    };

    println!("{}", "🌱 Seeding links".bright_blue().bold());
    println!();

    let mut created = 0;
    for url in &urls {
        match service.shorten(url).await {
            Ok(link) => {
                created += 1;
                println!(
                    "Shortened: {} => {}",
                    url.cyan(),
                    link.short_code().bright_yellow().bold()
                );
            }
            Err(e) if e.is_validation() => {
                println!("{} {} ({})", "Skipped:".yellow(), url, e);
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to shorten {url}: {e}")),
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ {created} of {} links created", urls.len())
            .green()
            .bold()
    );

    Ok(())
}

/// Prints the link behind `code`, or a not-found notice.
async fn show(service: &LinkService<PgLinkRepository>, code: &str) -> Result<()> {
    match service.find_by_code(code).await {
        Ok(link) => {
            println!("{}", "Link details:".bright_white().bold());
            println!("  Code:     {}", link.short_code().bright_yellow());
            println!("  Original: {}", link.original.cyan());
            println!("  Show:     {}", link.show_path());
            println!("  Goto:     {}", link.goto_path());
        }
        Err(e) if e.is_not_found() => {
            println!("{}", format!("❌ No link with code '{code}'").red());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {e}")),
    }

    Ok(())
}

/// Prints the number of stored links.
async fn stats(service: &LinkService<PgLinkRepository>) -> Result<()> {
    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {e}"))?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!("  Links: {}", total.to_string().bright_white().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_skipped_when_links_exist() {
        assert!(should_skip_seed(false, 3, false));
        assert!(!should_skip_seed(false, 3, true));
        assert!(!should_skip_seed(false, 0, false));
    }

    #[test]
    fn test_explicit_urls_never_skipped() {
        assert!(!should_skip_seed(true, 3, false));
        assert!(!should_skip_seed(true, 0, false));
    }

    #[test]
    fn test_cli_parses_seed_urls() {
        let cli = Cli::try_parse_from(["admin", "seed", "https://example.org"]).unwrap();
        match cli.command {
            Commands::Seed { urls, force } => {
                assert_eq!(urls, vec!["https://example.org".to_string()]);
                assert!(!force);
            }
            _ => panic!("expected seed command"),
        }
    }
}
