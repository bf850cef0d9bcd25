//! Layered configuration.
//!
//! Values are merged in order, later sources winning:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. A configuration file: the one passed explicitly, or else
//!    [`Config::default_path`] when it exists. TOML, YAML or JSON, chosen by
//!    extension (TOML when there is none).
//! 3. Environment variables prefixed with [`ENV_PREFIX`], e.g.
//!    `MANHWA_WORKERS=4`.
//!
//! Command-line flags are applied on top by the binary.

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};

/// Prefix of the environment variables that override file values.
pub const ENV_PREFIX: &str = "MANHWA_";

const DEFAULT_WORKERS: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ALLOWED_DOMAIN: &str = "manhwaclan.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of pages fetched at once.
    pub workers: usize,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Hosts that may be visited. Empty allows every host.
    pub allowed_domains: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("manhwa/", env!("CARGO_PKG_VERSION")).to_string(),
            allowed_domains: vec![DEFAULT_ALLOWED_DOMAIN.to_string()],
        }
    }
}

impl Config {
    /// Platform-specific location of the configuration file, such as
    /// `~/.config/manhwa/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "manhwa").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration from every source.
    ///
    /// An explicit `path` must exist; the default path is skipped when it
    /// doesn't. Values are not validated here, since command-line overrides
    /// still apply: call [`validate`](Self::validate) once they are in.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.is_file()),
        };
        let figment = Self::figment(file.as_deref()).merge(Env::prefixed(ENV_PREFIX));
        Self::extract(&figment)
    }

    /// Loads and validates the configuration from a single file on top of the
    /// defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let config = Self::extract(&Self::figment(Some(path)))?;
        config.validate()?;
        Ok(config)
    }

    fn figment(file: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let Some(file) = file else {
            return figment;
        };
        tracing::debug!(path = %file.display(), "Reading configuration file");
        match file.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
            Some("json") => figment.merge(Json::file(file)),
            _ => figment.merge(Toml::file(file)),
        }
    }

    fn extract(figment: &Figment) -> Result<Self> {
        match figment.extract() {
            Ok(config) => Ok(config),
            Err(err) => exn::bail!(ErrorKind::Load(err.to_string())),
        }
    }

    /// Checks that every field is within its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            exn::bail!(ErrorKind::Invalid("workers"));
        }
        if self.timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("timeout_secs"));
        }
        if self.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("user_agent"));
        }
        if self.allowed_domains.iter().any(|domain| domain.trim().is_empty()) {
            exn::bail!(ErrorKind::Invalid("allowed_domains"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.workers, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.allowed_domains, vec!["manhwaclan.com"]);
        assert!(config.user_agent.starts_with("manhwa/"));
    }

    #[rstest]
    #[case(".toml", "workers = 4\ntimeout_secs = 5\nallowed_domains = []\n")]
    #[case(".yaml", "workers: 4\ntimeout_secs: 5\nallowed_domains: []\n")]
    #[case(".json", r#"{"workers": 4, "timeout_secs": 5, "allowed_domains": []}"#)]
    fn test_from_file(#[case] suffix: &str, #[case] contents: &str) {
        let file = file(suffix, contents);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.timeout_secs, 5);
        assert!(config.allowed_domains.is_empty());
        // Unset fields keep their defaults.
        assert_eq!(config.user_agent, Config::default().user_agent);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(&*err, &ErrorKind::NotFound(path));
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let file = file(".toml", "workers = 0\ntimeout_secs = 7\n");
        let mut config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(&*config.validate().unwrap_err(), &ErrorKind::Invalid("workers"));
        config.workers = 4;
        config.validate().unwrap();
    }

    #[rstest]
    #[case("workers = 0", "workers")]
    #[case("timeout_secs = 0", "timeout_secs")]
    #[case("user_agent = \"  \"", "user_agent")]
    #[case("allowed_domains = [\"\"]", "allowed_domains")]
    fn test_invalid_values(#[case] contents: &str, #[case] field: &'static str) {
        let file = file(".toml", contents);
        let err = Config::from_file(file.path()).unwrap_err();
        assert_eq!(&*err, &ErrorKind::Invalid(field));
    }

    #[rstest]
    #[case(".toml", "workers = \"many\"")]
    #[case(".toml", "workers = ")]
    #[case(".json", "{")]
    fn test_unparsable(#[case] suffix: &str, #[case] contents: &str) {
        let file = file(suffix, contents);
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Load(_)));
    }
}
