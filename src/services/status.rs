/*
 * Responsibility
 * - Assemble the health report (uptime, clock, build + deployment info)
 * - Render it to JSON once, plus the values the handler mirrors into headers
 */
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::services::build_info::BuildInfo;
use crate::services::deployment::DeploymentInfo;

// Returned instead of a 5xx if the report ever fails to encode; the HTTP
// layer must always get returnable text.
pub const ENCODING_ERROR_BODY: &str = r#"{"error":"Error al codificar JSON"}"#;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub estado: &'static str,
    pub fecha_hora: String,
    pub tiempo_activo: String,
    // External monitors key on this wire name.
    #[serde(rename = "version_php")]
    pub runtime_version: &'static str,
    pub build: BuildInfo,
    pub deployment: DeploymentInfo,
}

/// Serialized report plus the build fields mirrored into response headers.
pub struct RenderedStatus {
    pub body: String,
    pub commit: String,
    pub build_date: String,
}

/// Builds a fresh report. Each loader runs exactly once; `started_at` is the
/// process start timestamp recorded in shared state.
pub fn assemble(config: &Config, started_at: DateTime<Utc>) -> StatusReport {
    let uptime = (Utc::now() - started_at).num_seconds().max(0);

    StatusReport {
        estado: "saludable",
        fecha_hora: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        tiempo_activo: format!("{uptime} segundos"),
        runtime_version: env!("RUSTC_VERSION"),
        build: BuildInfo::load(config),
        deployment: DeploymentInfo::load(config),
    }
}

pub fn render(config: &Config, started_at: DateTime<Utc>) -> RenderedStatus {
    let report = assemble(config, started_at);

    let commit = report
        .build
        .commit
        .clone()
        .unwrap_or_else(|| "unknown".to_string());
    let build_date = report
        .build
        .build_date
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let body = serde_json::to_string_pretty(&report)
        .unwrap_or_else(|_| ENCODING_ERROR_BODY.to_string());

    RenderedStatus {
        body,
        commit,
        build_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::Value;

    fn config_without_file() -> Config {
        // Point at a path that cannot exist so tests never pick up a real
        // build-info.json from the working directory.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build-info.json");
        Config {
            build_info_path: path,
            ..Config::default()
        }
    }

    #[test]
    fn report_is_healthy_and_timestamped() {
        let report = assemble(&config_without_file(), Utc::now());

        assert_eq!(report.estado, "saludable");
        assert!(chrono::DateTime::parse_from_rfc3339(&report.fecha_hora).is_ok());
        assert!(!report.runtime_version.is_empty());
    }

    #[test]
    fn uptime_counts_whole_seconds_since_start() {
        let started_at = Utc::now() - chrono::Duration::seconds(42);

        let report = assemble(&config_without_file(), started_at);

        let n: i64 = report
            .tiempo_activo
            .strip_suffix(" segundos")
            .expect("uptime should end in ' segundos'")
            .parse()
            .expect("uptime should start with an integer");
        assert!((42..=43).contains(&n));
    }

    #[test]
    fn uptime_never_goes_negative() {
        let started_at = Utc::now() + chrono::Duration::seconds(30);

        let report = assemble(&config_without_file(), started_at);

        assert_eq!(report.tiempo_activo, "0 segundos");
    }

    #[test]
    fn rendered_body_is_json_with_all_fields() {
        let config = Config {
            git_commit: Some("abc1234".to_string()),
            deploy_env: Some("staging".to_string()),
            ..config_without_file()
        };

        let rendered = render(&config, Utc::now());
        let value: Value = serde_json::from_str(&rendered.body).unwrap();

        assert_eq!(value["estado"], "saludable");
        assert_eq!(value["build"]["commit"], "abc1234");
        assert_eq!(value["deployment"]["environment"], "staging");
        assert!(value["version_php"].is_string());
        assert!(value["fecha_hora"].is_string());
        assert!(value["tiempo_activo"].is_string());
    }

    #[test]
    fn header_fields_come_from_the_loaded_build_info() {
        let config = Config {
            git_commit: Some("abc1234".to_string()),
            build_date: Some("2025-11-02T10:00:00+00:00".to_string()),
            ..config_without_file()
        };

        let rendered = render(&config, Utc::now());

        assert_eq!(rendered.commit, "abc1234");
        assert_eq!(rendered.build_date, "2025-11-02T10:00:00+00:00");
    }

    #[test]
    fn header_fields_default_to_unknown_when_file_omits_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build-info.json");
        std::fs::write(&path, r#"{"branch":"release"}"#).unwrap();
        let config = Config {
            build_info_path: path,
            ..Config::default()
        };

        let rendered = render(&config, Utc::now());

        assert_eq!(rendered.commit, "unknown");
        assert_eq!(rendered.build_date, "unknown");
    }

    #[test]
    fn repeated_renders_differ_only_in_clock_fields() {
        let config = Config {
            git_commit: Some("abc1234".to_string()),
            build_date: Some("2025-11-02T10:00:00+00:00".to_string()),
            ..config_without_file()
        };
        let started_at = Utc::now();

        let mut first: Value =
            serde_json::from_str(&render(&config, started_at).body).unwrap();
        let mut second: Value =
            serde_json::from_str(&render(&config, started_at).body).unwrap();

        for value in [&mut first, &mut second] {
            let obj = value.as_object_mut().unwrap();
            obj.remove("fecha_hora");
            obj.remove("tiempo_activo");
        }
        assert_eq!(first, second);
    }

    #[test]
    fn encoding_fallback_is_valid_json() {
        let value: Value = serde_json::from_str(ENCODING_ERROR_BODY).unwrap();

        assert_eq!(value["error"], "Error al codificar JSON");
    }
}
