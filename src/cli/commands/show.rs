//! Show command implementation.
//!
//! The `buildenv show` command resolves the environment through the flag
//! path and prints it.

use crate::cli::args::ShowArgs;
use crate::env::EnvFlags;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};
use super::display::{render_environment, Format};

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }
}

impl Command for ShowCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut flags = EnvFlags::new();
        flags.register();
        flags.set_staging(self.args.staging);
        let env = flags.environment()?;

        tracing::debug!(project = %env.project_name, "selected environment");

        let format = Format::from_flags(self.args.json, self.args.yaml);
        print!("{}", render_environment(env, format)?);

        Ok(CommandResult::success())
    }
}
