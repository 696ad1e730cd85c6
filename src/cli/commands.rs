use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_POSTS_DIR, RegistryConfig};
use crate::history::{GitHistory, HistoryLookup, NoHistory};
use crate::indexer::{build_registry, generate_registry};
use crate::registry_storage::render_registry;

#[derive(Parser)]
#[command(name = "blog-registry")]
#[command(version = "0.1.0")]
#[command(about = "Generate a JSON registry of markdown blog posts", long_about = None)]
pub struct Cli {
    /// Directory containing the markdown posts
    #[arg(long, env = "BLOG_REGISTRY_POSTS_DIR", default_value = DEFAULT_POSTS_DIR)]
    pub posts_dir: PathBuf,

    /// Registry file to write
    #[arg(short, long, env = "BLOG_REGISTRY_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Directory to run git in (defaults to the current directory)
    #[arg(long, env = "BLOG_REGISTRY_REPO", conflicts_with = "no_history")]
    pub repo: Option<PathBuf>,

    /// Skip git and date every post with the current month
    #[arg(long)]
    pub no_history: bool,

    /// Print the registry to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn config(&self) -> RegistryConfig {
        RegistryConfig::new(&self.posts_dir, &self.output)
    }

    fn history(&self) -> Box<dyn HistoryLookup> {
        match (&self.repo, self.no_history) {
            (_, true) => Box::new(NoHistory),
            (Some(repo), false) => Box::new(GitHistory::in_dir(repo)),
            (None, false) => Box::new(GitHistory::new()),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let history = cli.history();

    if cli.dry_run {
        print_registry(&config, history.as_ref())
    } else {
        write_registry_file(&config, history.as_ref())
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "blog_registry=warn",
        1 => "blog_registry=info",
        2 => "blog_registry=debug",
        _ => "blog_registry=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt().with_env_filter(env_filter).with_target(false).with_writer(io::stderr).init();
}

fn write_registry_file(config: &RegistryConfig, history: &dyn HistoryLookup) -> Result<()> {
    let count = generate_registry(config, history).with_context(|| {
        format!("Failed to generate registry from {}", config.posts_dir.display())
    })?;

    println!("Successfully generated {} with {} posts.", config.output.display(), count);

    Ok(())
}

fn print_registry(config: &RegistryConfig, history: &dyn HistoryLookup) -> Result<()> {
    let registry = build_registry(&config.posts_dir, history).with_context(|| {
        format!("Failed to build registry from {}", config.posts_dir.display())
    })?;
    let json = render_registry(&registry)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&json).context("Failed to write registry to stdout")?;
    writeln!(stdout).context("Failed to write registry to stdout")?;

    Ok(())
}
