//! Command-line surface and configuration.
//!
//! Every global option can also be set through the environment, so a shell
//! can pin a variant once (`PATHVIEW_VARIANT=hash`) and then issue bare
//! `resolve`/`render` commands.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use clap::{Parser, Subcommand, ValueEnum};
use client::Variant;

#[derive(Parser, Debug)]
#[command(name = "pathview", about = "Inspect the client router's route tables and matches")]
pub struct Cli {
    /// Which demo's route table and navigation strategy to use.
    #[arg(long, env = "PATHVIEW_VARIANT", value_enum, default_value_t = VariantArg::Shell, global = true)]
    pub variant: VariantArg,

    #[arg(long, env = "PATHVIEW_FORMAT", value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the route table in declaration order.
    Routes,
    /// Print the views matched at a path.
    Resolve { path: String },
    /// Navigate through paths in order; `back` and `forward` move through
    /// the history instead. Those two words are always history moves, so a
    /// route literally named `back` or `forward` must be written with its
    /// leading slash (`/back`).
    Walk {
        #[arg(required = true)]
        steps: Vec<String>,
    },
    /// Print the static HTML mounted at a path.
    Render { path: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    Hash,
    Browser,
    Shell,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Hash => Self::Hash,
            VariantArg::Browser => Self::Browser,
            VariantArg::Shell => Self::Shell,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
