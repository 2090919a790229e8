//! Deployment environment registry.
//!
//! This module owns the environment model and the two ways of picking one:
//! - Record and derived accessors in [`environment`]
//! - Canonical environments and project-id lookup in [`registry`]
//! - Flag-driven selection in [`selection`]

pub mod environment;
pub mod registry;
pub mod selection;

pub use environment::Environment;
pub use registry::{by_project_id, project_ids, DEVELOPMENT, PRODUCTION, STAGING};
pub use selection::EnvFlags;
