/*
 * Responsibility
 * - Load settings from the environment (PORT, APP_ENV, CORS, build/deploy vars)
 * - Snapshot everything once at startup; the rest of the app never touches env
 */
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Where the build pipeline drops its metadata file.
    pub build_info_path: PathBuf,

    pub git_commit: Option<String>,
    pub git_branch: Option<String>,
    pub build_date: Option<String>,
    pub image_tag: Option<String>,
    pub deploy_tag: Option<String>,
    pub deploy_env: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let build_info_path = opt_var("BUILD_INFO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("build-info.json"));

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            build_info_path,
            git_commit: opt_var("GIT_COMMIT"),
            git_branch: opt_var("GIT_BRANCH"),
            build_date: opt_var("BUILD_DATE"),
            image_tag: opt_var("IMAGE_TAG"),
            deploy_tag: opt_var("DEPLOY_TAG"),
            deploy_env: opt_var("DEPLOY_ENV"),
        })
    }
}

// Empty values count as unset, so callers never see Some("").
fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            build_info_path: PathBuf::from("build-info.json"),
            git_commit: None,
            git_branch: None,
            build_date: None,
            image_tag: None,
            deploy_tag: None,
            deploy_env: None,
        }
    }
}
