//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "disc-compare")]
#[command(about = "Compare flying-disc flights under shared launch conditions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Throw every disc under the same launch and plot the flights
    Compare {
        /// Disc names (1 to 6), resolved to `<disc-dir>/<name>.yaml`
        #[arg(required = true)]
        discs: Vec<String>,

        /// Display units: metric or imperial
        #[arg(short, long)]
        units: Option<String>,

        /// Directory holding disc coefficient tables
        #[arg(short, long)]
        disc_dir: Option<PathBuf>,

        /// Session configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Constants preset: standard, summer or high-altitude
        #[arg(short, long)]
        environment: Option<String>,

        /// Set a control before plotting, e.g. `--set roll=-20`
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,

        /// Directory for the PNG figures
        #[arg(short, long, default_value = "output")]
        out: PathBuf,

        /// Also write one CSV per disc into this directory
        #[arg(long)]
        export: Option<PathBuf>,

        /// Read `NAME VALUE` control changes from stdin after the first plot
        #[arg(short, long)]
        interactive: bool,
    },

    /// Plot lift, drag and moment coefficients against angle of attack
    Coeffs {
        #[arg(required = true)]
        discs: Vec<String>,

        #[arg(short, long, default_value = "discs")]
        disc_dir: PathBuf,

        #[arg(short, long, default_value = "output")]
        out: PathBuf,
    },

    /// List the discs available in a directory
    List {
        #[arg(short, long, default_value = "discs")]
        disc_dir: PathBuf,
    },
}
