//! Resolve command implementation.
//!
//! The `buildenv resolve` command looks an environment up by cloud project
//! identifier.

use crate::cli::args::ResolveArgs;
use crate::env::by_project_id;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};
use super::display::{render_environment, Format};

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(args: ResolveArgs) -> Self {
        Self { args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self) -> Result<CommandResult> {
        let env = by_project_id(&self.args.project_id)?;

        let format = Format::from_flags(self.args.json, self.args.yaml);
        print!("{}", render_environment(env, format)?);

        Ok(CommandResult::success())
    }
}
