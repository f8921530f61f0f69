use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelforge_codegen::field::EntityName;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TestsCommand {
    /// Entity name (e.g., "post")
    pub name: String,

    /// Write into this directory instead of the configured tests directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the file that would be written without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl TestsCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.open();
        let entity = EntityName::new(&self.name);

        let report = ops::test_suite(&project, &entity, self.dir.as_deref(), self.dry_run)
            .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
