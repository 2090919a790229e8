//! Buildenv - deployment environment registry for the build coordinator.
//!
//! Buildenv holds the static deployment configuration of the build
//! infrastructure: the production, staging, and development environments
//! with their cloud project identifiers, networking parameters, storage
//! buckets, and cluster sizing, plus the small derived accessors (resource
//! URIs, region derivation, snapshot URLs) other systems consume.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`env`] - Environment model, registry, and selection
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use buildenv::env::{by_project_id, EnvFlags, PRODUCTION};
//!
//! // Lookup by project identifier
//! let env = by_project_id("symbolic-datum-552").unwrap();
//! assert_eq!(env.region(), "us-central1");
//!
//! // Flag-driven selection: register, record the parsed switch, select
//! let mut flags = EnvFlags::new();
//! flags.register();
//! flags.set_staging(false);
//! assert_eq!(flags.environment().unwrap(), &*PRODUCTION);
//! ```

pub mod cli;
pub mod env;
pub mod error;

pub use error::{BuildEnvError, Result};
