//! The canonical deployment environments and lookup by project identifier.
//!
//! Three environments exist: [`PRODUCTION`], [`STAGING`], and
//! [`DEVELOPMENT`]. They are process-wide statics, built once and never
//! mutated. Consumers pick one either directly, through
//! [`by_project_id`], or through the flag path in
//! [`crate::env::selection`].

use std::sync::LazyLock;

use crate::env::environment::Environment;
use crate::error::{BuildEnvError, Result};

/// Environment the coordinator and build infrastructure are deployed to for
/// production usage.
pub static PRODUCTION: LazyLock<Environment> = LazyLock::new(|| Environment {
    project_name: "symbolic-datum-552".into(),
    is_prod: true,
    zone: "us-central1-f".into(),
    zones_to_clean: vec!["us-central1-f".into()],
    static_ip: "107.178.219.46".into(),
    machine_type: "n1-standard-4".into(),
    kube_min_nodes: 5,
    kube_max_nodes: 5, // auto-scaling disabled
    kube_name: "buildlets".into(),
    kube_machine_type: "n1-standard-32".into(),
    dash_url: "https://build.golang.org/".into(),
    perf_data_url: "https://perfdata.golang.org".into(),
    coordinator_url: "https://storage.googleapis.com/go-builder-data/coordinator".into(),
    coordinator_name: "farmer".into(),
    buildlet_bucket: "go-builder-data".into(),
    log_bucket: "go-build-log".into(),
    snap_bucket: "go-build-snap".into(),
    auto_cert_cache_bucket: "farmer-golang-org-autocert-cache".into(),
    ..Default::default()
});

/// Environment the coordinator and build infrastructure are deployed to
/// before release to production.
pub static STAGING: LazyLock<Environment> = LazyLock::new(|| Environment {
    project_name: "go-dashboard-dev".into(),
    is_prod: true,
    zone: "us-central1-f".into(),
    zones_to_clean: vec![
        "us-central1-a".into(),
        "us-central1-b".into(),
        "us-central1-f".into(),
    ],
    static_ip: "104.154.113.235".into(),
    machine_type: "n1-standard-1".into(),
    kube_min_nodes: 1,
    kube_max_nodes: 2,
    kube_name: "buildlets".into(),
    kube_machine_type: "n1-standard-8".into(),
    dash_url: "https://go-dashboard-dev.appspot.com/".into(),
    perf_data_url: "https://perfdata.golang.org".into(),
    coordinator_url: "https://storage.googleapis.com/dev-go-builder-data/coordinator".into(),
    coordinator_name: "farmer".into(),
    buildlet_bucket: "dev-go-builder-data".into(),
    log_bucket: "dev-go-build-log".into(),
    snap_bucket: "dev-go-build-snap".into(),
    ..Default::default()
});

/// Local development environment. Production functionality is disabled and
/// the coordinator is addressed on the loopback interface.
pub static DEVELOPMENT: LazyLock<Environment> = LazyLock::new(|| Environment {
    is_prod: false,
    static_ip: "127.0.0.1".into(),
    ..Default::default()
});

/// The known project identifiers and the environment each maps to.
fn known_environments() -> [(&'static str, &'static Environment); 3] {
    [
        ("dev", &*DEVELOPMENT),
        ("go-dashboard-dev", &*STAGING),
        ("symbolic-datum-552", &*PRODUCTION),
    ]
}

/// Project identifiers accepted by [`by_project_id`], sorted.
pub fn project_ids() -> Vec<&'static str> {
    known_environments().iter().map(|(id, _)| *id).collect()
}

/// Environment for the given project identifier.
///
/// # Errors
///
/// Returns [`BuildEnvError::UnknownProject`] when the identifier does not
/// name one of the canonical environments; the message enumerates the known
/// identifiers.
pub fn by_project_id(project_id: &str) -> Result<&'static Environment> {
    known_environments()
        .iter()
        .find(|(id, _)| *id == project_id)
        .map(|(_, env)| *env)
        .ok_or_else(|| BuildEnvError::UnknownProject {
            project: project_id.to_string(),
            known: project_ids(),
        })
}
