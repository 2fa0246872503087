//! Sumi-Sitemap main entry point
//!
//! This is the command-line interface for the Sumi-Sitemap generator.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_sitemap::config::{load_config_with_hash, load_url_list, Config, SitemapSettings};
use sumi_sitemap::output::print_statistics;
use sumi_sitemap::Sitemap;
use tracing_subscriber::EnvFilter;

/// Sumi-Sitemap: a sitemap and robots.txt generator
///
/// Sumi-Sitemap reads a list of page URLs, writes sitemaps.org-compliant
/// sitemap files (with a sitemap index for large sites) and points
/// robots.txt at them.
#[derive(Parser, Debug)]
#[command(name = "sumi-sitemap")]
#[command(version = "1.0.0")]
#[command(about = "A sitemap and robots.txt generator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Additional plain-text URL list (one path per line, tab-separated fields)
    #[arg(long = "urls", value_name = "FILE")]
    url_lists: Vec<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Build the sitemaps in memory and report what would be written
    #[arg(long)]
    dry_run: bool,

    /// Leave robots.txt untouched
    #[arg(long)]
    no_robots: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    let result = if cli.dry_run {
        handle_dry_run(&config, &cli)
    } else {
        handle_generate(&config, &cli)
    };

    if let Err(e) = &result {
        tracing::error!("Sitemap generation failed: {:#}", e);
    }
    result
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_sitemap=info,warn"),
            1 => EnvFilter::new("sumi_sitemap=debug,info"),
            2 => EnvFilter::new("sumi_sitemap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Creates a generator and feeds it the configured and listed URLs
fn prepare(config: &Config, cli: &Cli) -> anyhow::Result<Sitemap> {
    let settings = SitemapSettings::from_config(config)?;
    let mut sitemap = Sitemap::new(settings)?;

    sitemap.add_urls(config.urls.iter().cloned())?;

    for path in &cli.url_lists {
        let urls = load_url_list(path)
            .with_context(|| format!("Failed to read URL list {}", path.display()))?;
        tracing::info!("Read {} URLs from {}", urls.len(), path.display());
        sitemap.add_urls(urls)?;
    }

    tracing::info!("Total URLs: {}", sitemap.urls().len());
    Ok(sitemap)
}

/// Handles the --dry-run mode: builds everything in memory and prints a plan
fn handle_dry_run(config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let sitemap = prepare(config, cli)?;
    let set = sitemap.build()?;
    let dir = sitemap.settings().output_dir();

    println!("=== Sumi-Sitemap Dry Run ===\n");
    println!("Output directory: {}", dir.display());
    println!("URLs: {}", set.url_count());
    println!();

    if set.has_index() {
        println!("Layout: sitemap index over {} files", set.documents.len());
    } else {
        println!("Layout: single sitemap");
    }
    if let Some(index) = &set.index {
        println!(
            "  {} ({} sitemaps, {} bytes)",
            index.file_name,
            index.references.len(),
            index.xml_body.len()
        );
    }
    for document in &set.documents {
        println!(
            "  {} ({} URLs, {} bytes uncompressed)",
            document.file_name,
            document.len(),
            document.size()
        );
    }
    if set.gzip_copy {
        println!("  {}.gz (gzip copy)", set.documents[0].file_name);
    }

    println!("\nSitemap URL: {}", set.sitemap_url);
    if config.sitemap.update_robots && !cli.no_robots {
        println!("robots.txt would advertise:");
        for url in &set.robots_urls {
            println!("  Sitemap: {}", url);
        }
    }

    println!();
    print_statistics(sitemap.statistics());
    Ok(())
}

/// Handles the main generation run
fn handle_generate(config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let mut sitemap = prepare(config, cli)?;

    sitemap.create_sitemap()?;

    if config.sitemap.update_robots && !cli.no_robots {
        sitemap.update_robots()?;
    } else {
        tracing::info!("Skipping robots.txt update");
    }

    if let Some(set) = sitemap.generated() {
        println!("✓ Sitemap written: {}", set.sitemap_url);
    }
    print_statistics(sitemap.statistics());

    Ok(())
}
