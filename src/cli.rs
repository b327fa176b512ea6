// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// ---

/// Matches strings against a path wildcard pattern and prints the captures.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be given several times to layer files.
    #[arg(short, long, value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Output template, `{0}` is the whole string and `{1}`, `{2}`, ... are the captures.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Separator between printed captures when no template is given.
    #[arg(short, long, default_value = "\t")]
    pub separator: String,

    /// Wildcard pattern.
    pub pattern: String,

    /// Strings to match.
    #[arg(required = true)]
    pub candidates: Vec<String>,
}
