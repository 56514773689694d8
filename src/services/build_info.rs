/*
 * Responsibility
 * - Build metadata for the health report
 * - File wins whole, defaults win whole; never a per-field mix of the two
 */
use std::fs;
use std::path::Path;

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Metadata describing the running build.
///
/// Wire keys match the `build-info.json` file the build pipeline writes:
/// `commit`, `branch`, `fecha`, `tag`. All fields are optional so that keys
/// absent from the file stay absent from the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl BuildInfo {
    /// Loads build metadata: the file at `config.build_info_path` verbatim if
    /// it parses into something non-empty, otherwise defaults assembled from
    /// the configured variables. Missing or malformed files are not errors.
    pub fn load(config: &Config) -> Self {
        read_file(&config.build_info_path).unwrap_or_else(|| Self::defaults(config))
    }

    fn defaults(config: &Config) -> Self {
        Self {
            commit: Some(config.git_commit.clone().unwrap_or_else(|| "dev".to_string())),
            branch: Some(
                config
                    .git_branch
                    .clone()
                    .unwrap_or_else(|| "local".to_string()),
            ),
            build_date: Some(config.build_date.clone().unwrap_or_else(now_rfc3339)),
            tag: Some(
                config
                    .image_tag
                    .clone()
                    .unwrap_or_else(|| "latest".to_string()),
            ),
        }
    }

    fn is_empty(&self) -> bool {
        self.commit.is_none()
            && self.branch.is_none()
            && self.build_date.is_none()
            && self.tag.is_none()
    }
}

// Folds every failure mode (missing, unreadable, malformed, empty) into None
// so the caller falls back in exactly one place.
fn read_file(path: &Path) -> Option<BuildInfo> {
    let raw = fs::read_to_string(path).ok()?;
    let info: BuildInfo = serde_json::from_str(&raw).ok()?;
    (!info.is_empty()).then_some(info)
}

fn now_rfc3339() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
