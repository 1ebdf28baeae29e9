//! Runtime settings that are not part of the environment file.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::AppError;

pub const MINIKUBE_ENV: &str = "DRENV_MINIKUBE";
pub const DRIVER_ENV: &str = "DRENV_DRIVER";
pub const CONFIG_DIR_ENV: &str = "DRENV_CONFIG_DIR";
pub const STAGGER_MS_ENV: &str = "DRENV_STAGGER_MS";
pub const READY_INITIAL_WAIT_ENV: &str = "DRENV_READY_INITIAL_WAIT";
pub const READY_TIMEOUT_ENV: &str = "DRENV_READY_TIMEOUT";

const DEFAULT_MINIKUBE: &str = "minikube";
const DEFAULT_DRIVER: &str = "kvm2";
const DEFAULT_STAGGER_MS: u64 = 500;
const DEFAULT_READY_INITIAL_WAIT_SECS: u64 = 30;
const DEFAULT_READY_TIMEOUT_SECS: u64 = 300;

/// Tool locations and timing knobs for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Provisioning tool executable.
    pub minikube: String,
    /// VM driver passed to `minikube start`.
    pub driver: String,
    /// Directory holding per-profile configuration directories.
    pub config_root: PathBuf,
    /// Delay between consecutive launches in a fan-out.
    pub stagger: Duration,
    /// Grace period before querying deployments after a restart.
    pub ready_initial_wait: Duration,
    /// Budget handed to `kubectl wait`.
    pub ready_timeout: Duration,
}

impl Settings {
    /// Default knobs with per-profile configuration under `config_root`.
    pub fn with_config_root(config_root: impl Into<PathBuf>) -> Self {
        Self {
            minikube: DEFAULT_MINIKUBE.to_string(),
            driver: DEFAULT_DRIVER.to_string(),
            config_root: config_root.into(),
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
            ready_initial_wait: Duration::from_secs(DEFAULT_READY_INITIAL_WAIT_SECS),
            ready_timeout: Duration::from_secs(DEFAULT_READY_TIMEOUT_SECS),
        }
    }

    /// Build settings from `DRENV_*` process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup; unset or empty values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup, dirs::home_dir())
    }

    fn resolve<F>(lookup: F, home: Option<PathBuf>) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config_root = match get(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_config_root(home)?,
        };
        let mut settings = Self::with_config_root(config_root);

        if let Some(minikube) = get(MINIKUBE_ENV) {
            settings.minikube = minikube;
        }
        if let Some(driver) = get(DRIVER_ENV) {
            settings.driver = driver;
        }
        if let Some(value) = get(STAGGER_MS_ENV) {
            settings.stagger = Duration::from_millis(parse_number(STAGGER_MS_ENV, &value)?);
        }
        if let Some(value) = get(READY_INITIAL_WAIT_ENV) {
            settings.ready_initial_wait =
                Duration::from_secs(parse_number(READY_INITIAL_WAIT_ENV, &value)?);
        }
        if let Some(value) = get(READY_TIMEOUT_ENV) {
            settings.ready_timeout = Duration::from_secs(parse_number(READY_TIMEOUT_ENV, &value)?);
        }

        Ok(settings)
    }

    /// Configuration directory of a single profile.
    pub fn config_dir(&self, profile: &str) -> PathBuf {
        self.config_root.join(profile)
    }
}

fn default_config_root(home: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let home = home.ok_or_else(|| {
        AppError::validation(format!(
            "Cannot determine home directory; set {} to choose a config directory",
            CONFIG_DIR_ENV
        ))
    })?;
    Ok(home.join(".config").join("drenv"))
}

fn parse_number(key: &str, value: &str) -> Result<u64, AppError> {
    value.parse().map_err(|_| {
        AppError::validation(format!("{} must be a non-negative integer, got '{}'", key, value))
    })
}
