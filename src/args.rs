use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[clap(infer_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Checks the site configuration for shape violations
    Check(SiteArgs),

    /// Prints the navigation and sidebar structure the configuration declares
    Outline(SiteArgs),
}

#[derive(Clone, Debug, Parser)]
pub struct SiteArgs {
    #[clap(default_value = ".")]
    pub directory: PathBuf,
}
