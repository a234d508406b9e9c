//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for sorting-quiz
#[derive(Parser, Debug)]
#[command(name = "sorting-quiz")]
#[command(author, version, about = "Adaptive quiz server that sorts you into a category")]
#[command(long_about = r#"
Sorting Quiz serves an HTTP API that asks one adaptive question per request.
The client sends its quiz state (categories with probabilities) and the
user's answer; the server asks a language model to update the probabilities
and pick the next question, and names a winner once one category is likely
enough.

Configuration files are loaded from (in priority order):
1. QUIZ_<SECTION>__<KEY>  Environment overrides
2. --config <path>        Explicit config file
3. ./quiz.toml            Project-level config
4. ~/.config/sorting-quiz/config.toml   Global config

The API key is read from GPT4_API_KEY unless model.api_key_env says otherwise.

Example:
  sorting-quiz --bind 0.0.0.0:8080
  sorting-quiz --config ./staging.toml -vv
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive chosen by `-v`, if any was given.
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
