use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cli.tests.rs"]
mod cli_tests;

/// Prints Kubernetes manifests as dashboard components.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(long, env = "KDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, overrides RUST_LOG.
    #[arg(long, env = "KDASH_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an object or a list of objects from the manifest files.
    Print(PrintArgs),

    /// Print plugins declared in the configuration.
    Plugins {
        /// Output indented JSON.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct PrintArgs {
    /// Manifest files to load.
    #[arg(long = "file", short = 'f', required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Kind of the object to print, optionally prefixed with the api version, e.g. `apps/v1/Deployment`.
    #[arg(long)]
    pub kind: Option<String>,

    /// Name of the object to print.
    #[arg(long)]
    pub name: Option<String>,

    /// Namespace of the objects to print.
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Print the objects list instead of a single object summary.
    #[arg(long)]
    pub list: bool,

    /// Output indented JSON.
    #[arg(long)]
    pub pretty: bool,
}

impl PrintArgs {
    /// Returns the api version and kind from the `--kind` argument.
    pub fn kind(&self) -> (Option<&str>, Option<&str>) {
        match self.kind.as_deref() {
            Some(kind) => match kind.rsplit_once('/') {
                Some((api_version, kind)) => (Some(api_version), Some(kind)),
                None => (None, Some(kind)),
            },
            None => (None, None),
        }
    }
}
