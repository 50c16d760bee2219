use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use qbank_core::{FilterSet, Rating};
use services::DEFAULT_SLOT;
use storage::MEMORY_URL;

#[derive(Parser, Debug)]
#[command(name = "qbank", version, about = "Flashcard study with ratings that persist between sessions")]
pub struct Cli {
    /// Question file, one `question,answer` pair per line
    #[arg(long, env = "QBANK_DECK", default_value = "questions.csv")]
    pub deck: PathBuf,

    /// SQLite database holding saved progress
    #[arg(long = "db", env = "QBANK_DB_URL", default_value = "sqlite:qbank.sqlite3")]
    pub db_url: String,

    /// Name of the progress slot inside the database
    #[arg(long, env = "QBANK_SLOT", default_value = DEFAULT_SLOT)]
    pub slot: String,

    /// Ratings shown at start (comma-separated, default: all)
    #[arg(long, value_delimiter = ',')]
    pub filter: Vec<Rating>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDbUrl { raw: String },
    EmptySlot,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ConfigError::EmptySlot => write!(f, "--slot must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub deck: PathBuf,
    pub db_url: String,
    pub slot: String,
    pub filter: FilterSet,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` for a blank database URL or slot name.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.db_url.trim().is_empty() {
            return Err(ConfigError::InvalidDbUrl { raw: cli.db_url });
        }
        let slot = cli.slot.trim().to_string();
        if slot.is_empty() {
            return Err(ConfigError::EmptySlot);
        }

        let filter = if cli.filter.is_empty() {
            FilterSet::all()
        } else {
            cli.filter.into_iter().collect()
        };

        Ok(Self {
            deck: cli.deck,
            db_url: normalize_sqlite_url(&cli.db_url),
            slot,
            filter,
        })
    }
}

/// Turn `sqlite:relative.db` or a bare path into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_URL || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its directory exist before connecting.
///
/// # Errors
///
/// Returns an error if the URL has no path or the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == MEMORY_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["qbank"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn filter_defaults_to_every_rating() {
        let config = AppConfig::from_cli(cli(&["--db", "sqlite::memory:"])).unwrap();
        assert_eq!(config.filter, FilterSet::all());
        assert_eq!(config.slot, DEFAULT_SLOT);
        assert_eq!(config.db_url, "sqlite::memory:");
    }

    #[test]
    fn filter_accepts_a_comma_list() {
        let config = AppConfig::from_cli(cli(&["--filter", "poor,notyet"])).unwrap();
        let expected: FilterSet = [Rating::Poor, Rating::Unrated].into_iter().collect();
        assert_eq!(config.filter, expected);
    }

    #[test]
    fn unknown_filter_rating_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["qbank", "--filter", "great"]).is_err());
    }

    #[test]
    fn blank_slot_is_rejected() {
        let err = AppConfig::from_cli(cli(&["--slot", "  "])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySlot));
    }

    #[test]
    fn relative_urls_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/progress.db");
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/progress.db"));
        assert_eq!(normalize_sqlite_url("sqlite:///tmp/x.db"), "sqlite:///tmp/x.db");
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("qbank.sqlite3");
        let url = format!("sqlite://{}", path.display());

        prepare_sqlite_file(&url).unwrap();

        assert!(path.exists());
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
