use clap::Args;
use eyre::Result;
use modelforge_codegen::scaffold::ModelRequest;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ModelCommand {
    /// Entity name followed by `name:type` field declarations
    #[arg(value_name = "NAME [FIELD:TYPE]...")]
    pub args: Vec<String>,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl ModelCommand {
    pub fn run(&self) -> Result<()> {
        let request = ModelRequest::from_args(&self.args).unwrap_or_exit();
        let project = self.project.open();

        let report = ops::model(&project, &request, self.dry_run).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
