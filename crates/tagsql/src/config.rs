//! Process configuration: SQL dialect and soft-delete flag.

use std::env;
use std::sync::OnceLock;

/// Environment variable selecting the SQL dialect.
pub const DRIVER_ENV: &str = "TAGSQL_SQL_DRIVER";

/// Driver variable read by earlier deployments; consulted when [`DRIVER_ENV`] is unset.
pub const FALLBACK_DRIVER_ENV: &str = "GRPC_SQL_DRIVER";

/// Environment variable overriding the soft-delete flag field name.
pub const ACTIVE_FIELD_ENV: &str = "TAGSQL_ACTIVE_FIELD";

/// Default record field that turns DELETE into a soft delete.
pub const DEFAULT_ACTIVE_FIELD: &str = "is_active";

/// Supported SQL dialects.
///
/// Only the null-coalescing function differs; placeholders are always `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// MySQL / SQLite style (`ifnull`). Used when nothing else is configured.
    #[default]
    MySql,
    /// PostgreSQL (`coalesce`).
    Postgres,
}

impl Dialect {
    /// Resolve a driver name. Unknown names fall back to [`Dialect::MySql`].
    pub fn from_driver(driver: &str) -> Self {
        match driver.trim().to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => Dialect::Postgres,
            _ => Dialect::MySql,
        }
    }

    /// Name of the null-coalescing function.
    pub fn null_fn(self) -> &'static str {
        match self {
            Dialect::MySql => "ifnull",
            Dialect::Postgres => "coalesce",
        }
    }
}

/// Configuration shared by all builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dialect used for null-coalescing projections.
    pub dialect: Dialect,
    /// Record field identifier that marks a soft-deletable record.
    pub active_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            active_field: DEFAULT_ACTIVE_FIELD.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the environment (and a `.env` file, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(driver) = lookup(DRIVER_ENV).or_else(|| lookup(FALLBACK_DRIVER_ENV)) {
            config.dialect = Dialect::from_driver(&driver);
        }
        if let Some(field) = lookup(ACTIVE_FIELD_ENV).filter(|f| !f.trim().is_empty()) {
            config.active_field = field.trim().to_string();
        }
        config
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static Config {
        static GLOBAL: OnceLock<Config> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let config = Config::from_env();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "tagsql.config",
                dialect = ?config.dialect,
                active_field = %config.active_field,
                "loaded configuration"
            );
            config
        })
    }

    /// Set the dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the soft-delete flag field name.
    pub fn active_field(mut self, name: impl Into<String>) -> Self {
        self.active_field = name.into();
        self
    }
}
