//! Environment rendering shared by the output commands.

use std::fmt::Write as _;

use crate::env::Environment;
use crate::error::{BuildEnvError, Result};

/// Output format for a rendered environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Key/value listing for terminals.
    #[default]
    Human,
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from the `--json` / `--yaml` flags. The flags are
    /// mutually exclusive at the clap level.
    pub fn from_flags(json: bool, yaml: bool) -> Self {
        if json {
            Self::Json
        } else if yaml {
            Self::Yaml
        } else {
            Self::Human
        }
    }
}

/// Render an environment in the requested format. The result always ends
/// with a newline.
pub fn render_environment(env: &Environment, format: Format) -> Result<String> {
    let mut rendered = match format {
        Format::Json => {
            serde_json::to_string_pretty(env).map_err(|e| BuildEnvError::Other(e.into()))?
        }
        Format::Yaml => serde_yaml::to_string(env).map_err(|e| BuildEnvError::Other(e.into()))?,
        Format::Human => human(env),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

fn human(env: &Environment) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "project:        {}", or_none(&env.project_name));
    let _ = writeln!(out, "production:     {}", env.is_prod);
    if env.zone.is_empty() {
        let _ = writeln!(out, "zone:           (none)");
    } else {
        let _ = writeln!(out, "zone:           {} (region {})", env.zone, env.region());
    }
    if !env.zones_to_clean.is_empty() {
        let _ = writeln!(out, "zones to clean: {}", env.zones_to_clean.join(", "));
    }
    let _ = writeln!(out, "static ip:      {}", or_none(&env.static_ip));
    let _ = writeln!(out, "machine type:   {}", or_none(&env.machine_type));
    if env.kube_max_nodes == 0 {
        let _ = writeln!(out, "cluster:        (unused)");
    } else {
        let _ = writeln!(
            out,
            "cluster:        {} ({}..{} x {})",
            env.kube_name, env.kube_min_nodes, env.kube_max_nodes, env.kube_machine_type
        );
    }
    let _ = writeln!(out, "dashboard:      {}", env.dash_base());
    let _ = writeln!(out, "perf data:      {}", or_none(&env.perf_data_url));
    let _ = writeln!(
        out,
        "coordinator:    {} <{}>",
        or_none(&env.coordinator_name),
        or_none(&env.coordinator_url)
    );
    let _ = writeln!(
        out,
        "buckets:        buildlet={} log={} snap={}",
        or_none(&env.buildlet_bucket),
        or_none(&env.log_bucket),
        or_none(&env.snap_bucket)
    );
    if env.max_builds == 0 {
        let _ = writeln!(out, "max builds:     unlimited");
    } else {
        let _ = writeln!(out, "max builds:     {}", env.max_builds);
    }
    if env.auto_cert_cache_bucket.is_empty() {
        let _ = writeln!(out, "autocert cache: (disabled)");
    } else {
        let _ = writeln!(out, "autocert cache: {}", env.auto_cert_cache_bucket);
    }

    out
}
