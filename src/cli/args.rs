//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Builds suppression-reconciled NAICS hierarchies from Census QWI data for sunburst charts
#[derive(Parser, Debug)]
#[command(name = "qwi-sunburst")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch QWI data and write the reconciled hierarchy as JSON
    Build {
        /// NAICS label CSV (rows of code,label)
        csv: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indicator to chart (Emp, EarnS, FrmJbGn, FrmJbLs)
        #[arg(short, long)]
        indicator: Option<String>,

        /// FIPS state code
        #[arg(short, long)]
        state: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        #[arg(short, long)]
        quarter: Option<String>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// Show the top-level code groups parsed from a label CSV
    Groups {
        /// NAICS label CSV (rows of code,label)
        csv: PathBuf,
    },

    /// Pretty-print a built hierarchy document as an ASCII tree
    Tree {
        /// JSON document produced by `build`
        input: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings (defaults, file, environment merged)
    Show,

    /// Write a default config file to the global location
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
