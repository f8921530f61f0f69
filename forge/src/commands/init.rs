use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project root (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Templates directory, relative to the project root
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.output, self.dir.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
