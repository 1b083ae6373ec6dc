pub mod config;
pub mod deferred;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod quotes;
pub mod random;
pub mod reward;
pub mod runner;

pub use config::{ConfigError, ConfigResult, SnippetConfig};
pub use runner::{Snippet, SnippetOutcome, SnippetRunner};
