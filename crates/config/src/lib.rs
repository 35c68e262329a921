//! Configuration for wiki song list reconciliation.
//!
//! Values are layered with [`figment`]: built-in defaults, then a
//! configuration file (TOML, YAML or JSON, chosen by extension), then
//! `WIKISYNC_`-prefixed environment variables.
//!
//! ```toml
//! concurrency = 8
//!
//! [ignored_titles]
//! new = ["Some Song (Long Version)"]
//! old_GD = ["Another Song"]
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::{OptionExt, ResultExt};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::instrument;
use wikisync_extract::models::Source;

/// Name of the configuration file inside the platform configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "WIKISYNC_";
/// Default bound on in-flight track lookups during reconciliation.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Titles to leave out of a reconciliation, per source page.
///
/// A title ignored for one page is still picked up from the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoredTitles(HashMap<Source, HashSet<String>>);
impl IgnoredTitles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: Source, title: impl Into<String>) -> bool {
        self.0.entry(source).or_default().insert(title.into())
    }

    pub fn contains(&self, source: Source, title: &str) -> bool {
        self.0.get(&source).is_some_and(|titles| titles.contains(title))
    }

    pub fn for_source(&self, source: Source) -> Option<&HashSet<String>> {
        self.0.get(&source)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashSet::is_empty)
    }
}
impl<T: Into<String>> FromIterator<(Source, T)> for IgnoredTitles {
    fn from_iter<I: IntoIterator<Item = (Source, T)>>(iter: I) -> Self {
        let mut ignored = Self::new();
        for (source, title) in iter {
            ignored.insert(source, title);
        }
        ignored
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Titles to skip, keyed by source identifier (`new`, `old_GFDM`, `old_GD`).
    pub ignored_titles: IgnoredTitles,
    /// Maximum number of stored tracks loaded at the same time.
    pub concurrency: usize,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            ignored_titles: IgnoredTitles::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
impl Config {
    /// Location of the configuration file in the platform configuration
    /// directory (e.g. `~/.config/wikisync/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "wikisync").ok_or_raise(|| ErrorKind::NoConfigDirectory)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Builds the layered [`Figment`] without extracting it, so callers can
    /// merge in providers of their own.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
            };
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Loads and validates the configuration. A missing file is not an
    /// error; defaults apply.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path)?.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        tracing::debug!(concurrency = config.concurrency, "configuration loaded");
        Ok(config)
    }

    /// Extracts and validates the configuration from a prepared [`Figment`].
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            exn::bail!(ErrorKind::Invalid {
                field: "concurrency",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_figment(&Figment::from(Serialized::defaults(Config::default()))).unwrap();
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert!(config.ignored_titles.is_empty());
    }

    #[rstest]
    #[case(".toml", "concurrency = 4\n[ignored_titles]\nnew = [\"Foo\"]\nold_GD = [\"Bar\", \"Baz\"]\n")]
    #[case(".yaml", "concurrency: 4\nignored_titles:\n  new: [Foo]\n  old_GD: [Bar, Baz]\n")]
    #[case(".json", r#"{"concurrency": 4, "ignored_titles": {"new": ["Foo"], "old_GD": ["Bar", "Baz"]}}"#)]
    fn test_load_file(#[case] suffix: &str, #[case] contents: &str) {
        let file = file_with(suffix, contents);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.concurrency, 4);
        assert!(config.ignored_titles.contains(Source::New, "Foo"));
        assert!(config.ignored_titles.contains(Source::OldGd, "Baz"));
        assert!(!config.ignored_titles.contains(Source::OldGfdm, "Foo"));
        assert!(!config.ignored_titles.contains(Source::OldGd, "Foo"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(dir.path().join("nope.toml")));
        assert_eq!(Config::from_figment(&figment).unwrap(), Config::default());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let file = file_with(".toml", "concurrency = 0\n");
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(file.path()));
        let err = Config::from_figment(&figment).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid { field: "concurrency", .. }));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let file = file_with(".toml", "[ignored_titles]\nold_gd = [\"Foo\"]\n");
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(file.path()));
        let err = Config::from_figment(&figment).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Load));
    }

    #[test]
    fn test_unsupported_format() {
        let err = Config::figment(Some(Path::new("config.ini"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn test_ignored_titles_from_iter() {
        let ignored: IgnoredTitles = [(Source::New, "Foo"), (Source::New, "Bar")].into_iter().collect();
        assert_eq!(ignored.for_source(Source::New).map(HashSet::len), Some(2));
        assert_eq!(ignored.for_source(Source::OldGfdm), None);
    }
}
