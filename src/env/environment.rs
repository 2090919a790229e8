//! The `Environment` record and its derived accessors.
//!
//! An [`Environment`] describes the deployment of the build coordinator and
//! its buildlet resources on one cloud project: project identifier,
//! networking, storage buckets, and cluster sizing. The accessors here are
//! pure string formatting over those fields; nothing is validated against
//! the cloud provider.

use serde::Serialize;

use crate::env::registry::PRODUCTION;

/// URI prefix for Compute Engine resources, completed by a project name.
const COMPUTE_PREFIX: &str = "https://www.googleapis.com/compute/v1/projects/";

/// Configuration of the infrastructure for one deployment target.
///
/// The three canonical values live in [`crate::env::registry`]. Every field
/// except `kube_password` is fixed at declaration; the password is populated
/// once at process start via [`Environment::with_kube_password`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Cloud project the infrastructure is provisioned in.
    pub project_name: String,

    /// Whether production functionality is enabled. When true, cloud and
    /// cluster builders are enabled and the coordinator serves on 443;
    /// otherwise builders are disabled and it serves on 8119.
    pub is_prod: bool,

    /// Compute zone the coordinator instance and cluster run in, in
    /// `<region>-<suffix>` form.
    pub zone: String,

    /// Zones periodically cleaned by deleting stale VMs. Empty means no
    /// cleaning occurs.
    pub zones_to_clean: Vec<String>,

    /// Fixed public address attached to the coordinator instance. Empty
    /// means the address is looked up by name.
    pub static_ip: String,

    /// Instance type for the coordinator.
    pub machine_type: String,

    /// Minimum node count the cluster autoscaler keeps running.
    pub kube_min_nodes: i64,

    /// Maximum node count the autoscaler may provision. Zero means the
    /// cluster is unused.
    pub kube_max_nodes: i64,

    /// Instance type for cluster nodes.
    pub kube_machine_type: String,

    /// Cluster name.
    pub kube_name: String,

    /// Cluster admin credential, set to a random value at process start.
    /// Never serialized.
    #[serde(skip_serializing)]
    pub kube_password: String,

    /// Dashboard base URL, ending in a slash.
    pub dash_url: String,

    /// Benchmark-storage base URL.
    pub perf_data_url: String,

    /// Download location of the coordinator binary, used only when creating
    /// the coordinator VM from scratch.
    pub coordinator_url: String,

    /// Hostname of the coordinator instance.
    pub coordinator_name: String,

    /// Bucket holding buildlet and bootstrap binaries.
    pub buildlet_bucket: String,

    /// Bucket logs are written to.
    pub log_bucket: String,

    /// Bucket holding snapshots of completed builds.
    pub snap_bucket: String,

    /// Maximum number of concurrent builds. Zero means unlimited.
    pub max_builds: usize,

    /// Bucket for the TLS certificate cache. Empty disables automatic
    /// certificate issuance.
    pub auto_cert_cache_bucket: String,
}

impl Environment {
    /// URI prefix for Compute Engine resources in this project.
    pub fn compute_prefix(&self) -> String {
        format!("{}{}", COMPUTE_PREFIX, self.project_name)
    }

    /// URI of the coordinator's machine type.
    pub fn machine_type_uri(&self) -> String {
        format!(
            "{}/zones/{}/machineTypes/{}",
            self.compute_prefix(),
            self.zone,
            self.machine_type
        )
    }

    /// Compute region, derived from the zone.
    ///
    /// # Panics
    ///
    /// Panics if the zone does not contain a `-` separating region and
    /// suffix. Callers must guarantee well-formed zones.
    pub fn region(&self) -> &str {
        match self.zone.rsplit_once('-') {
            Some((region, _)) => region,
            None => panic!("zone {:?} has no region/suffix separator", self.zone),
        }
    }

    /// Absolute URL of the `.tar.gz` snapshot of a built tree for the given
    /// builder type and revision (a 40-character commit hash, interpolated
    /// verbatim).
    pub fn snapshot_url(&self, builder_type: &str, rev: &str) -> String {
        format!(
            "https://storage.googleapis.com/{}/go/{}/{}.tar.gz",
            self.snap_bucket, builder_type, rev
        )
    }

    /// Dashboard base URL, ending in a slash. Environments without their
    /// own dashboard fall back to production's.
    pub fn dash_base(&self) -> &str {
        if !self.dash_url.is_empty() {
            &self.dash_url
        } else {
            &PRODUCTION.dash_url
        }
    }

    /// Copy of this environment with the cluster admin credential set.
    ///
    /// The canonical environments are immutable statics; the owning process
    /// takes a copy at startup and populates the credential exactly once.
    pub fn with_kube_password(mut self, password: impl Into<String>) -> Self {
        self.kube_password = password.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_in_zone(zone: &str) -> Environment {
        Environment {
            project_name: "scratch-project".into(),
            zone: zone.into(),
            machine_type: "n1-standard-2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn compute_prefix_appends_project() {
        let env = env_in_zone("us-central1-f");
        assert_eq!(
            env.compute_prefix(),
            "https://www.googleapis.com/compute/v1/projects/scratch-project"
        );
    }

    #[test]
    fn machine_type_uri_includes_zone_and_type() {
        let env = env_in_zone("europe-west1-b");
        assert_eq!(
            env.machine_type_uri(),
            "https://www.googleapis.com/compute/v1/projects/scratch-project/zones/europe-west1-b/machineTypes/n1-standard-2"
        );
    }

    #[test]
    fn region_strips_zone_suffix() {
        assert_eq!(env_in_zone("us-central1-f").region(), "us-central1");
        assert_eq!(env_in_zone("europe-west1-b").region(), "europe-west1");
    }

    #[test]
    fn region_keeps_multi_dash_prefix() {
        assert_eq!(env_in_zone("asia-northeast1-a").region(), "asia-northeast1");
    }

    #[test]
    #[should_panic(expected = "no region/suffix separator")]
    fn region_panics_on_malformed_zone() {
        let _ = env_in_zone("uscentral1f").region();
    }

    #[test]
    fn snapshot_url_interpolates_verbatim() {
        let env = Environment {
            snap_bucket: "scratch-build-snap".into(),
            ..Default::default()
        };
        assert_eq!(
            env.snapshot_url("linux-amd64", "deadbeef"),
            "https://storage.googleapis.com/scratch-build-snap/go/linux-amd64/deadbeef.tar.gz"
        );
    }

    #[test]
    fn dash_base_prefers_own_url() {
        let env = Environment {
            dash_url: "https://dash.example.test/".into(),
            ..Default::default()
        };
        assert_eq!(env.dash_base(), "https://dash.example.test/");
    }

    #[test]
    fn dash_base_falls_back_to_production() {
        let env = Environment::default();
        assert_eq!(env.dash_base(), PRODUCTION.dash_url);
    }

    #[test]
    fn with_kube_password_sets_credential_on_copy() {
        let env = env_in_zone("us-central1-f");
        let with_password = env.clone().with_kube_password("hunter2");
        assert_eq!(with_password.kube_password, "hunter2");
        assert_eq!(env.kube_password, "");
    }

    #[test]
    fn serialization_omits_credential() {
        let env = env_in_zone("us-central1-f").with_kube_password("hunter2");
        let json = serde_json::to_string(&env).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("kube_password"));
        assert!(json.contains("scratch-project"));
    }
}
