//! Urls command implementation.
//!
//! The `buildenv urls` command prints the URLs derived from an environment:
//! compute resource prefix, machine type URI, region, dashboard base, and
//! (given a builder type and revision) the build snapshot URL.

use crate::cli::args::UrlsArgs;
use crate::env::EnvFlags;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The urls command implementation.
pub struct UrlsCommand {
    args: UrlsArgs,
}

impl UrlsCommand {
    /// Create a new urls command.
    pub fn new(args: UrlsArgs) -> Self {
        Self { args }
    }
}

impl Command for UrlsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut flags = EnvFlags::new();
        flags.register();
        flags.set_staging(self.args.staging);
        let env = flags.environment()?;

        println!("compute prefix:   {}", env.compute_prefix());
        println!("machine type uri: {}", env.machine_type_uri());
        println!("region:           {}", env.region());
        println!("dashboard:        {}", env.dash_base());
        if let (Some(builder_type), Some(rev)) = (&self.args.builder_type, &self.args.rev) {
            println!("snapshot:         {}", env.snapshot_url(builder_type, rev));
        }

        Ok(CommandResult::success())
    }
}
