use std::path::PathBuf;

use clap::Parser;
use exn::ResultExt;
use manhwa_config::Config;

use crate::error::{ErrorKind, Result};

/// Project pages visited when none are given on the command line.
pub const DEFAULT_URLS: [&str; 3] = [
    "https://manhwaclan.com/manga/one-punch-man",
    "https://manhwaclan.com/manga/one-step-forward-to-the-flower-path/",
    "https://manhwaclan.com/manga/the-lost-cinderella/",
];

/// Scrape project metadata and chapter lists from manhwaclan, printing one
/// JSON document per project.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Maximum number of pages fetched at once.
    #[arg(long, short)]
    pub workers: Option<usize>,

    /// Project page URLs to visit.
    pub urls: Vec<String>,
}

impl Cli {
    /// Loads the configuration and applies command-line overrides on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref()).or_raise(|| ErrorKind::Config)?;
        self.apply(&mut config);
        config.validate().or_raise(|| ErrorKind::Config)?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
    }

    /// URLs to visit, falling back to [`DEFAULT_URLS`].
    pub fn urls(&self) -> Vec<String> {
        if self.urls.is_empty() {
            DEFAULT_URLS.iter().map(ToString::to_string).collect()
        } else {
            self.urls.clone()
        }
    }
}
