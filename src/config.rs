//! Connection settings and command-line arguments for the two binaries.
//!
//! Every value can be supplied as a flag or through the environment. The
//! connection variables reuse the standard libpq names (`PGHOST`, `PGPORT`,
//! `PGDATABASE`, `PGUSER`, `PGPASSWORD`) so existing shells and `.env` files
//! keep working.

use crate::catalog::domain::SchemaName;
use crate::task::domain::{TaskId, TaskStatus};
use crate::task::services::StatusUpdateRequest;
use clap::{Args, Parser};
use std::fmt;
use thiserror::Error;

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5433;

/// Default database name.
pub const DEFAULT_DATABASE: &str = "mcp_learning";

/// Default login role.
pub const DEFAULT_USER: &str = "app_user";

/// Errors raised while validating connection settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host is empty after trimming.
    #[error("database host must not be empty")]
    EmptyHost,

    /// Port zero cannot be connected to.
    #[error("invalid database port {0}, expected 1-65535")]
    InvalidPort(u16),

    /// The database name is empty after trimming.
    #[error("database name must not be empty")]
    EmptyDatabase,

    /// The login role is empty after trimming.
    #[error("database user must not be empty")]
    EmptyUser,
}

/// Parameters for opening a single `PostgreSQL` connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    host: String,
    port: u16,
    database: String,
    user: String,
    password: Option<String>,
}

impl ConnectionSettings {
    /// Creates validated connection settings without a password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the host, database or user is blank, or
    /// when the port is zero.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let host_value = host.into().trim().to_owned();
        let database_value = database.into().trim().to_owned();
        let user_value = user.into().trim().to_owned();

        if host_value.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if port == 0 {
            return Err(ConfigError::InvalidPort(port));
        }
        if database_value.is_empty() {
            return Err(ConfigError::EmptyDatabase);
        }
        if user_value.is_empty() {
            return Err(ConfigError::EmptyUser);
        }

        Ok(Self {
            host: host_value,
            port,
            database: database_value,
            user: user_value,
            password: None,
        })
    }

    /// Sets the login password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Returns the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the login role.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Renders the settings as a libpq key/value connection string.
    ///
    /// Values are single-quoted with embedded quotes and backslashes escaped,
    /// so passwords may contain spaces or quotes.
    #[must_use]
    pub fn conninfo(&self) -> String {
        let port = self.port.to_string();
        let mut pairs = vec![
            ("host", self.host.as_str()),
            ("port", port.as_str()),
            ("dbname", self.database.as_str()),
            ("user", self.user.as_str()),
        ];
        if let Some(password) = &self.password {
            pairs.push(("password", password.as_str()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", quote_conninfo_value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn quote_conninfo_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

/// Connection flags shared by both binaries.
#[derive(Clone, Args)]
pub struct ConnectionArgs {
    /// Database server host.
    #[arg(long, env = "PGHOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database server port.
    #[arg(long, env = "PGPORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database name.
    #[arg(long, env = "PGDATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Login role.
    #[arg(long, env = "PGUSER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Login password.
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl ConnectionArgs {
    /// Validates the flags into [`ConnectionSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is blank or the port is zero.
    pub fn settings(&self) -> Result<ConnectionSettings, ConfigError> {
        let settings =
            ConnectionSettings::new(&*self.host, self.port, &*self.database, &*self.user)?;
        Ok(match &self.password {
            Some(password) => settings.with_password(password.as_str()),
            None => settings,
        })
    }
}

/// Arguments for `check_tables`.
#[derive(Clone, Parser)]
#[command(
    name = "check_tables",
    about = "List the tables of a schema in the MCP learning database"
)]
pub struct CheckTablesArgs {
    /// Connection flags.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Schema whose tables are listed.
    #[arg(long, env = "MCPDB_SCHEMA", default_value = "public")]
    pub schema: String,
}

impl CheckTablesArgs {
    /// Returns the schema to list.
    #[must_use]
    pub fn schema(&self) -> SchemaName {
        SchemaName::new(&*self.schema)
    }
}

/// Arguments for `update_task_status`.
#[derive(Clone, Parser)]
#[command(
    name = "update_task_status",
    about = "Set the status of one task and stamp its start time"
)]
pub struct UpdateTaskStatusArgs {
    /// Connection flags.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Identifier of the task to update.
    #[arg(long, env = "MCPDB_TASK_ID")]
    pub task_id: String,

    /// Status value to write.
    #[arg(long, env = "MCPDB_TASK_STATUS", default_value = "in_progress")]
    pub status: String,
}

impl UpdateTaskStatusArgs {
    /// Builds the update request from the parsed flags.
    #[must_use]
    pub fn request(&self) -> StatusUpdateRequest {
        StatusUpdateRequest::new(TaskId::new(&*self.task_id), TaskStatus::new(&*self.status))
    }
}
