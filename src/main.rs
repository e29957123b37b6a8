//! Confbundle - configuration tree bundler
//!
//! A CLI tool that walks a directory tree and concatenates every
//! readable text file into one output file, each block prefixed with
//! a `--- <path> ---` header line.
//!
//! Exit codes:
//!   0 - Success (skipped files do not affect the exit code)
//!   1 - Setup error (invalid arguments, cannot create the output file)

mod bundle;
mod cli;
mod config;
mod models;
mod scanner;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Confbundle v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the bundler
    match run_bundle(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Bundling failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .confbundle.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".confbundle.toml");

    if path.exists() {
        eprintln!("⚠️  .confbundle.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .confbundle.toml")?;

    println!("✅ Created .confbundle.toml with default settings.");
    println!("   Edit it to customize the root directory, output path, and ordering.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete bundling workflow. Always returns exit code 0;
/// skipped files are reported but never fail the run.
fn run_bundle(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let config = load_config(&args)?;

    let root = PathBuf::from(&config.general.root);
    let output = PathBuf::from(&config.general.output);
    let sorted = config.general.sorted;

    // Handle --dry-run: walk the tree and exit
    if args.dry_run {
        return handle_dry_run(&root, sorted);
    }

    println!("📦 Bundling configuration tree: {}", root.display());
    println!("   Output: {}", output.display());
    if sorted {
        println!("   Order: lexicographic (reproducible)");
    }

    let bundler = bundle::Bundler::new(root, output.clone(), sorted);
    let summary = bundler.run()?;

    let duration = start_time.elapsed().as_secs_f64();

    // Print summary
    println!("\n📊 Bundle Summary:");
    println!("   Files bundled: {}", summary.files_written);
    println!("   Files skipped: {}", summary.skipped.len());
    println!("   Content bytes: {}", summary.bytes_written);
    println!("   Duration: {:.2}s", duration);
    println!(
        "\n✅ Bundle complete! Output saved to: {}",
        output.display()
    );

    if !summary.skipped.is_empty() {
        info!(
            "{} of {} files were skipped; see the Skipped: lines above",
            summary.skipped.len(),
            summary.files_attempted()
        );
    }

    Ok(0)
}

/// Handle --dry-run: walk the tree, print what would be bundled, exit.
fn handle_dry_run(root: &PathBuf, sorted: bool) -> Result<i32> {
    println!("\n🔍 Dry run: walking the tree (nothing will be written)...\n");

    let files = scanner::scan(root, sorted);

    if files.is_empty() {
        println!("   No files found under {}", root.display());
    } else {
        println!("   Found {} files that would be bundled:\n", files.len());
        for file in &files {
            println!("     📄 {}", file.display());
        }
        println!("\n   Total: {} files", files.len());
    }

    println!("\n✅ Dry run complete. Nothing was written.");
    Ok(0)
}

/// Load configuration from file or use defaults, then fold in CLI args.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        let mut config = Config::load(config_path)?;
        config.merge_with_args(args);
        return Ok(config);
    }

    // Try default location
    let mut config = match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .confbundle.toml");
            config
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Config::default()
        }
    };

    config.merge_with_args(args);
    Ok(config)
}
