/*
 * Responsibility
 * - Deployment metadata for the health report
 * - Pure function of Config; no I/O, no failure path
 */
use serde::Serialize;

use crate::config::Config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentInfo {
    pub tag: String,
    pub environment: String,
}

impl DeploymentInfo {
    // Tag precedence: deploy tag, then image tag, then "latest".
    pub fn load(config: &Config) -> Self {
        Self {
            tag: config
                .deploy_tag
                .clone()
                .or_else(|| config.image_tag.clone())
                .unwrap_or_else(|| "latest".to_string()),
            environment: config
                .deploy_env
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
