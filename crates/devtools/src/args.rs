//! Command line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use line_diff::DiffAlgorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devtools")]
#[command(about = "Developer tools: Base64, JSON, diff, UTM campaign URLs and wisdom")]
#[command(version)]
pub struct Cli {
    /// Directory holding the persisted tool states
    #[arg(long, env = "DEVTOOLS_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Keep tool states in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available tools
    List,

    /// Encode or decode Base64
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },

    /// Pretty-print JSON
    Json(JsonArgs),

    /// Compare two texts line by line
    Diff(DiffArgs),

    /// Build a UTM campaign URL
    Utm(UtmArgs),

    /// Ask for a piece of wisdom
    Wisdom {
        /// Question or topic
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Inspect or clear the persisted tool states
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
pub enum Base64Action {
    /// Encode text (read from stdin when INPUT is omitted)
    Encode { input: Option<String> },

    /// Decode Base64 (read from stdin when INPUT is omitted)
    Decode { input: Option<String> },

    /// Move the last output to the input and flip the direction
    Swap,
}

#[derive(Args)]
pub struct JsonArgs {
    /// File to format; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Print without whitespace
    #[arg(long, conflicts_with = "sort_keys")]
    pub minify: bool,

    /// Sort object keys
    #[arg(long)]
    pub sort_keys: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Original file; reuses the last compared texts when omitted
    #[arg(requires = "modified")]
    pub original: Option<PathBuf>,

    /// Modified file
    pub modified: Option<PathBuf>,

    /// How lines are matched up
    #[arg(long, short, value_enum, default_value_t = AlgorithmArg::Positional)]
    pub algorithm: AlgorithmArg,

    /// How the result is shown
    #[arg(long, value_enum, default_value_t = ViewArg::Inline)]
    pub view: ViewArg,

    /// Unchanged lines around each change in the unified view
    #[arg(long, short = 'U', default_value_t = 3)]
    pub context: usize,
}

#[derive(Args)]
pub struct UtmArgs {
    /// Website URL, e.g. https://example.com
    pub url: String,

    /// Campaign source (google, facebook, twitter, linkedin, email, other)
    #[arg(long)]
    pub source: Option<String>,

    /// Campaign medium (cpc, social, email, banner, referral, other)
    #[arg(long)]
    pub medium: Option<String>,

    /// Campaign name
    #[arg(long)]
    pub campaign: Option<String>,

    /// Campaign term
    #[arg(long)]
    pub term: Option<String>,

    /// Campaign content
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Subcommand)]
pub enum StateAction {
    /// Print the stored state, of one tool or of all of them
    Show {
        /// base64, json, diff, utm or wisdom
        tool: Option<String>,
    },

    /// Forget every tool's state
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Compare lines at the same offset
    Positional,
    Myers,
    Patience,
    Lcs,
}

impl From<AlgorithmArg> for DiffAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Positional => DiffAlgorithm::Positional,
            AlgorithmArg::Myers => DiffAlgorithm::Myers,
            AlgorithmArg::Patience => DiffAlgorithm::Patience,
            AlgorithmArg::Lcs => DiffAlgorithm::Lcs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Every line, prefixed with -, + or a space
    Inline,
    /// Original and modified side by side
    Split,
    /// Hunks with context, like `diff -u`
    Unified,
    /// Ops and both projections as JSON
    Json,
}
