use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use zeroize::Zeroize;

pub const ENV_HOST: &str = "TXN_IMPORT_DB_HOST";
pub const ENV_DATABASE: &str = "TXN_IMPORT_DB_NAME";
pub const ENV_USER: &str = "TXN_IMPORT_DB_USER";
pub const ENV_PASSWORD: &str = "TXN_IMPORT_DB_PASSWORD";
pub const ENV_LOG: &str = "TXN_IMPORT_LOG";

/// Database and logging options. Read from `~/.config/txn-import/settings.json`,
/// then overridden by `TXN_IMPORT_*` environment variables.
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the database file.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    /// SQLCipher key. Empty opens the database unencrypted.
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("txn-import")
        .to_string_lossy()
        .to_string()
}

fn default_database() -> String {
    "transactions".to_string()
}

fn default_user() -> String {
    std::env::var("USER").unwrap_or_default()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            database: default_database(),
            user: default_user(),
            password: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Drop for Settings {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl Settings {
    /// Override fields from environment lookups. Unset or empty values leave
    /// the current field alone.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| var(key).filter(|v| !v.is_empty());
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password.zeroize();
            self.password = password;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level;
        }
    }

    /// `<host>/<database>.db`, unless `database` already carries an extension.
    pub fn db_path(&self) -> PathBuf {
        let dir = expand_home(&self.host);
        if Path::new(&self.database).extension().is_some() {
            dir.join(&self.database)
        } else {
            dir.join(format!("{}.db", self.database))
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("txn-import")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn read_settings_file(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn load_settings() -> Settings {
    let mut settings = read_settings_file(&settings_path());
    settings.apply_env(|key| std::env::var(key).ok());
    settings
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}
