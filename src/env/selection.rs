//! Flag-driven environment selection.
//!
//! The selection state is an explicit value object rather than hidden
//! process-wide flags: whoever parses the command line constructs an
//! [`EnvFlags`], registers the staging switch, records its parsed value,
//! and asks for the environment. This makes the required ordering
//! (register, then select) a visible contract.

use crate::env::environment::Environment;
use crate::env::registry::{PRODUCTION, STAGING};
use crate::error::{BuildEnvError, Result};

/// Registration state of the staging switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FlagState {
    #[default]
    Unregistered,
    Registered,
}

/// Selection state for the `--staging` switch.
///
/// Selection only ever yields production or staging; development is reached
/// through [`crate::env::registry::by_project_id`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvFlags {
    state: FlagState,
    staging: bool,
}

impl EnvFlags {
    /// New, unregistered selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the staging switch. Required before [`EnvFlags::environment`].
    /// Calls beyond the first are no-ops.
    pub fn register(&mut self) {
        self.state = FlagState::Registered;
    }

    /// Whether the staging switch has been registered.
    pub fn is_registered(&self) -> bool {
        self.state == FlagState::Registered
    }

    /// Record the parsed value of the staging switch.
    pub fn set_staging(&mut self, staging: bool) {
        self.staging = staging;
    }

    /// Environment selected by the flags: staging when the switch is set,
    /// production otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`BuildEnvError::FlagsNotRegistered`] if [`EnvFlags::register`]
    /// has not been called.
    pub fn environment(&self) -> Result<&'static Environment> {
        if self.state != FlagState::Registered {
            return Err(BuildEnvError::FlagsNotRegistered);
        }
        if self.staging {
            Ok(&STAGING)
        } else {
            Ok(&PRODUCTION)
        }
    }
}
