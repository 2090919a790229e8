//! Integration tests for the environment registry public API.

use buildenv::env::{by_project_id, project_ids, EnvFlags, DEVELOPMENT, PRODUCTION, STAGING};
use buildenv::BuildEnvError;

#[test]
fn public_api_is_accessible() {
    let _env = PRODUCTION.clone();
    let _flags = EnvFlags::new();
    let _ids = project_ids();
}

#[test]
fn production_machine_type_uri_is_stable() {
    assert_eq!(
        PRODUCTION.machine_type_uri(),
        "https://www.googleapis.com/compute/v1/projects/symbolic-datum-552/zones/us-central1-f/machineTypes/n1-standard-4"
    );
}

#[test]
fn region_drops_final_zone_segment() {
    assert_eq!(PRODUCTION.region(), "us-central1");
    assert_eq!(STAGING.region(), "us-central1");
}

#[test]
fn production_snapshot_url_is_stable() {
    assert_eq!(
        PRODUCTION.snapshot_url("linux-amd64", "abcdef0123456789abcdef0123456789abcdef01"),
        "https://storage.googleapis.com/go-build-snap/go/linux-amd64/abcdef0123456789abcdef0123456789abcdef01.tar.gz"
    );
}

#[test]
fn development_dashboard_defaults_to_production() {
    assert_eq!(DEVELOPMENT.dash_base(), PRODUCTION.dash_url);
    assert_eq!(DEVELOPMENT.dash_base(), "https://build.golang.org/");
}

#[test]
fn lookup_returns_production_by_equality() {
    let env = by_project_id("symbolic-datum-552").unwrap();
    assert_eq!(env, &*PRODUCTION);
}

#[test]
fn lookup_rejects_unknown_project_with_diagnostic() {
    let err = by_project_id("nonexistent").unwrap_err();
    assert!(matches!(err, BuildEnvError::UnknownProject { .. }));
    let msg = err.to_string();
    assert!(msg.contains("nonexistent"));
    assert!(msg.contains("dev"));
    assert!(msg.contains("go-dashboard-dev"));
    assert!(msg.contains("symbolic-datum-552"));
}

#[test]
fn selection_requires_registration() {
    let flags = EnvFlags::new();
    assert!(matches!(
        flags.environment(),
        Err(BuildEnvError::FlagsNotRegistered)
    ));
}

#[test]
fn selection_defaults_to_production() {
    let mut flags = EnvFlags::new();
    flags.register();
    assert_eq!(flags.environment().unwrap(), &*PRODUCTION);
}

#[test]
fn selection_staging_switch_selects_staging() {
    let mut flags = EnvFlags::new();
    flags.register();
    flags.set_staging(true);
    assert_eq!(flags.environment().unwrap(), &*STAGING);
}

#[test]
fn registration_twice_equals_once() {
    let mut once = EnvFlags::new();
    once.register();

    let mut twice = EnvFlags::new();
    twice.register();
    twice.register();

    assert_eq!(once, twice);
    assert_eq!(twice.environment().unwrap(), &*PRODUCTION);
}

#[test]
fn password_copy_leaves_static_untouched() {
    let env = PRODUCTION.clone().with_kube_password("generated-at-startup");
    assert_eq!(env.kube_password, "generated-at-startup");
    assert_eq!(PRODUCTION.kube_password, "");
}

#[test]
fn serialized_environment_never_contains_credential() {
    let env = STAGING.clone().with_kube_password("generated-at-startup");
    let json = serde_json::to_string(&env).unwrap();
    assert!(!json.contains("generated-at-startup"));
    let yaml = serde_yaml::to_string(&env).unwrap();
    assert!(!yaml.contains("generated-at-startup"));
}

#[test]
fn known_ids_cover_all_three_environments() {
    assert_eq!(project_ids(), vec!["dev", "go-dashboard-dev", "symbolic-datum-552"]);
    for id in project_ids() {
        assert!(by_project_id(id).is_ok());
    }
}
