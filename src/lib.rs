pub mod config;
pub mod dispatch;
pub mod generator;
pub mod model;
pub mod registry;
pub mod templates;
pub mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::generator::{Deck, JobClient, load_deck, sample_deck};
use crate::registry::ResolveError;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "blockdeck",
    version,
    about = "Render generative content-block decks in the terminal"
)]
pub struct Cli {
    /// Override data dir (settings + logs). Defaults to platform data dir.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a deck interactively (default command)
    Preview {
        /// Deck JSON file; omit to browse the built-in sample deck
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Render once and exit (headless-friendly)
        #[arg(long, default_value_t = false)]
        once: bool,
    },
    /// Render one block as plain text to stdout
    Render {
        /// Deck JSON file; omit to render from the built-in sample deck
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Block index within the deck
        #[arg(long, default_value_t = 0)]
        index: usize,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,
    },
    /// List registered template names
    Templates,
    /// Print the built-in sample deck as JSON
    Sample,
    /// Poll a generation job endpoint and print the finished deck
    Fetch {
        /// Job status URL
        url: String,

        /// Poll cadence in milliseconds (overrides settings)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Overall deadline in seconds (overrides settings)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

/// Terminal failure surfaced by `main` as a JSON envelope on stderr.
#[derive(Debug)]
pub struct FatalError {
    pub code: i32,
    pub kind: &'static str,
    pub message: String,
    pub hint: Option<String>,
    pub retryable: bool,
}

impl From<anyhow::Error> for FatalError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(resolve) = err.downcast_ref::<ResolveError>() {
            return FatalError {
                code: 2,
                kind: "template",
                message: resolve.to_string(),
                hint: resolve.suggestion().map(|s| format!("did you mean {s:?}?")),
                retryable: false,
            };
        }
        if err.downcast_ref::<reqwest::Error>().is_some() {
            return FatalError {
                code: 3,
                kind: "network",
                message: format!("{err:#}"),
                hint: None,
                retryable: true,
            };
        }
        if err.downcast_ref::<std::io::Error>().is_some() {
            return FatalError {
                code: 1,
                kind: "io",
                message: format!("{err:#}"),
                hint: None,
                retryable: false,
            };
        }
        FatalError {
            code: 1,
            kind: "runtime",
            message: format!("{err:#}"),
            hint: None,
            retryable: false,
        }
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir).ok();

    // Log to a daily file in the data dir; stdout stays clean for the TUI
    // and the plain-text subcommands.
    let file_appender = tracing_appender::rolling::daily(&data_dir, "blockdeck.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .compact()
                .with_target(false)
                .with_ansi(false),
        )
        .init();

    let settings = Settings::load_or_default(&data_dir);

    let command = cli.command.unwrap_or(Commands::Preview {
        deck: None,
        once: false,
    });

    match command {
        Commands::Preview { deck, once } => {
            let deck = load_or_sample(deck.as_deref())?;
            ui::preview::run_preview(deck, &settings.palette(), settings.muted, once)
        }
        Commands::Render {
            deck,
            index,
            width,
            height,
        } => {
            let deck = load_or_sample(deck.as_deref())?;
            let block = deck
                .blocks
                .get(index)
                .ok_or_else(|| anyhow!("deck has {} blocks, no index {index}", deck.blocks.len()))?;
            let text = ui::render_block_text(block, &settings.palette(), width, height)?;
            println!("{text}");
            Ok(())
        }
        Commands::Templates => {
            println!("{}", registry::template_names().join("\n"));
            Ok(())
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample_deck())?);
            Ok(())
        }
        Commands::Fetch {
            url,
            interval_ms,
            timeout_secs,
        } => {
            let interval = Duration::from_millis(interval_ms.unwrap_or(settings.poll_interval_ms));
            let timeout = Duration::from_secs(timeout_secs.unwrap_or(settings.poll_timeout_secs));
            let client = JobClient::new(interval, timeout)?;
            let deck = client.fetch_deck(&url).await?;
            println!("{}", serde_json::to_string_pretty(&deck)?);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "blockdeck", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut out = std::io::stdout();
            man.render(&mut out)?;
            Ok(())
        }
    }
}

fn load_or_sample(path: Option<&std::path::Path>) -> Result<Deck> {
    match path {
        Some(path) => load_deck(path),
        None => Ok(sample_deck()),
    }
}

pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "blockdeck", "blockdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".blockdeck"))
}
