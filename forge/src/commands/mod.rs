mod completions;
mod init;
mod model;
mod test_suite;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use model::ModelCommand;
use test_suite::TestsCommand;

use crate::ops::Project;

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modelforge_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(about = "Scaffold Vapor models and their tests from field declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Model(cmd) => cmd.run(),
            Commands::Tests(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model and its tests
    Model(ModelCommand),

    /// Generate the tests for a model
    Tests(TestsCommand),

    /// Write forge.toml and eject the built-in templates
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Project location flags shared by the generating commands.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project root the layout directories are relative to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to forge.toml (defaults to <output>/forge.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory searched for templates before the built-in ones, relative to the project root
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn open(&self) -> Project {
        Project::open(&self.output, self.config.as_deref(), self.templates.as_deref())
            .unwrap_or_exit()
    }
}
