use anyhow::Context;
use async_snippets_rs::logging::init_logging;
use async_snippets_rs::output::StdoutSink;
use async_snippets_rs::{Snippet, SnippetConfig, SnippetRunner};
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate, geocode and predict the next ISS sighting
    Iss,
    /// Ask for ice cream; only granted once the homework is done
    IceCream {
        /// Force the homework flag instead of drawing it at random
        #[arg(long)]
        homework_done: Option<bool>,
    },
    /// Print a random quote
    Quote,
    /// Run every snippet in turn
    All,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Small async teaching snippets", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, help = "Seed for reproducible randomness")]
    seed: Option<u64>,

    #[arg(
        long,
        global = true,
        default_value_t = 2000,
        help = "Artificial delay of each ISS pipeline stage in milliseconds"
    )]
    stage_delay_ms: u64,

    #[arg(
        long,
        global = true,
        default_value_t = 1000,
        help = "Delay before the ice-cream reward settles in milliseconds"
    )]
    reward_delay_ms: u64,

    #[arg(
        long,
        global = true,
        default_value_t = 0.5,
        help = "Chance (0.0-1.0) that the homework counts as done"
    )]
    homework_probability: f64,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

impl Args {
    fn to_config(&self) -> SnippetConfig {
        let homework_override = match self.command {
            Command::IceCream { homework_done } => homework_done,
            _ => None,
        };
        SnippetConfig {
            stage_delay: Duration::from_millis(self.stage_delay_ms),
            reward_delay: Duration::from_millis(self.reward_delay_ms),
            homework_probability: self.homework_probability,
            homework_override,
            seed: self.seed,
        }
    }

    fn snippets(&self) -> Vec<Snippet> {
        match self.command {
            Command::Iss => vec![Snippet::IssSighting],
            Command::IceCream { .. } => vec![Snippet::IceCream],
            Command::Quote => vec![Snippet::Quote],
            Command::All => Snippet::ALL.to_vec(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.into());

    let config = args.to_config();
    config.validate().context("Invalid configuration")?;
    log::debug!("Running with {:?}", config);

    let mut runner = SnippetRunner::new(config, Arc::new(StdoutSink));
    for snippet in args.snippets() {
        runner
            .run(snippet)
            .await
            .with_context(|| format!("Snippet {:?} failed", snippet))?;
    }
    Ok(())
}
