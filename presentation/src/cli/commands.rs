//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for misscan-concierge
#[derive(Parser, Debug)]
#[command(name = "misscan-concierge")]
#[command(author, version, about = "Miss Can storefront with a culinary concierge chat")]
#[command(long_about = r#"
Browse Miss Can's Portuguese tinned fish and ask the chef for recipes and
wine pairings.

Without --ask or --catalog an interactive storefront starts.

Configuration files are loaded from (in priority order):
1. MISSCAN_* environment variables (e.g. MISSCAN_ADVISOR__MODEL)
2. --config <path>     Explicit config file
3. ./misscan.toml      Project-level config
4. ~/.config/misscan-concierge/config.toml   Global config

The Gemini API key is read from $API_KEY (or $GEMINI_API_KEY) at request time.

Example:
  misscan-concierge
  misscan-concierge --catalog
  misscan-concierge --ask "What wine goes with sardines?"
  misscan-concierge --product 2 --ask "A modern twist, please"
"#)]
pub struct Cli {
    /// Ask the chef one question and exit
    #[arg(short, long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Product the question is about (catalog number or id)
    #[arg(short, long, value_name = "PRODUCT", requires = "ask")]
    pub product: Option<String>,

    /// Print the product catalog and exit
    #[arg(long, conflicts_with = "ask")]
    pub catalog: bool,

    /// Model to consult (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
