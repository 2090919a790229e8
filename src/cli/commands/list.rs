//! List command implementation.
//!
//! The `buildenv list` command enumerates the known project identifiers and
//! a one-line summary of each environment.

use std::collections::BTreeMap;

use crate::cli::args::ListArgs;
use crate::env::{by_project_id, project_ids, Environment};
use crate::error::{BuildEnvError, Result};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

fn summary(env: &Environment) -> String {
    if env.project_name.is_empty() {
        "local development".to_string()
    } else {
        format!("zone {}, coordinator {}", env.zone, env.coordinator_name)
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        if self.args.json {
            let mut envs: BTreeMap<&str, &Environment> = BTreeMap::new();
            for id in project_ids() {
                envs.insert(id, by_project_id(id)?);
            }
            let json =
                serde_json::to_string_pretty(&envs).map_err(|e| BuildEnvError::Other(e.into()))?;
            println!("{json}");
        } else {
            for id in project_ids() {
                let env = by_project_id(id)?;
                println!("{id:<20} {}", summary(env));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{DEVELOPMENT, PRODUCTION};

    #[test]
    fn list_succeeds() {
        let result = ListCommand::new(ListArgs::default()).execute().unwrap();
        assert!(result.success);
    }

    #[test]
    fn list_json_succeeds() {
        let result = ListCommand::new(ListArgs { json: true }).execute().unwrap();
        assert!(result.success);
    }

    #[test]
    fn summary_distinguishes_development() {
        assert_eq!(summary(&DEVELOPMENT), "local development");
        assert!(summary(&PRODUCTION).contains("us-central1-f"));
        assert!(summary(&PRODUCTION).contains("farmer"));
    }
}
