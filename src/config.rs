// src/config.rs
use crate::api::ClientOptions;
use crate::constants::{
    DEFAULT_PUBLISH_DATE_PROPERTY, DEFAULT_TITLE_PROPERTY, DEFAULT_VISUALS_PROPERTY,
    ENV_DATABASE_ID, ENV_INTEGRATION_TOKEN, ENV_INTEGRATION_TOKEN_LEGACY, NOTION_API_BASE_URL,
};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, ValidationError};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Title-typed property holding the post caption
    #[arg(long, global = true, default_value = DEFAULT_TITLE_PROPERTY)]
    pub title_property: String,

    /// Date-typed property used for sorting and the date badge
    #[arg(long, global = true, default_value = DEFAULT_PUBLISH_DATE_PROPERTY)]
    pub publish_date_property: String,

    /// Files-typed property holding the post media
    #[arg(long, global = true, default_value = DEFAULT_VISUALS_PROPERTY)]
    pub visuals_property: String,

    /// Notion API root URL
    #[arg(long, global = true, default_value = NOTION_API_BASE_URL)]
    pub notion_api_url: String,

    /// Abort Notion calls that take longer than this many seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub upstream_timeout_secs: Option<u64>,

    /// Maximum number of query round-trips per fetch (default: follow every cursor)
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve GET /api/media
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch and classify a database once, printing the posts as JSON
    Fetch {
        /// Database ID or URL (defaults to NOTION_DATABASE_ID)
        #[arg(long)]
        db: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    Serve { addr: SocketAddr },
    Fetch { database: Option<String>, pretty: bool },
}

/// Names of the database columns the classifier reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    pub title: String,
    pub publish_date: String,
    pub visuals: String,
}

impl PropertyNames {
    pub fn new(
        title: impl Into<String>,
        publish_date: impl Into<String>,
        visuals: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let names = Self {
            title: title.into(),
            publish_date: publish_date.into(),
            visuals: visuals.into(),
        };
        for name in [&names.title, &names.publish_date, &names.visuals] {
            if name.trim().is_empty() {
                return Err(ValidationError::InvalidPropertyName(name.clone()));
            }
        }
        Ok(names)
    }
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_PROPERTY.to_string(),
            publish_date: DEFAULT_PUBLISH_DATE_PROPERTY.to_string(),
            visuals: DEFAULT_VISUALS_PROPERTY.to_string(),
        }
    }
}

/// Fallback database and token used when a request does not carry its own.
///
/// A value supplied at the call site always wins over the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotionDefaults {
    pub database: Option<DatabaseId>,
    pub credential: Option<ApiKey>,
}

impl NotionDefaults {
    /// Reads `NOTION_DATABASE_ID` and `NOTION_INTEGRATION_TOKEN` from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads defaults through an arbitrary lookup, so tests need not touch the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = present(ENV_DATABASE_ID)
            .map(|raw| DatabaseId::parse(&raw))
            .transpose()?;

        let credential = present(ENV_INTEGRATION_TOKEN)
            .or_else(|| {
                let legacy = present(ENV_INTEGRATION_TOKEN_LEGACY);
                if legacy.is_some() {
                    log::warn!(
                        "{} is deprecated, set {} instead",
                        ENV_INTEGRATION_TOKEN_LEGACY,
                        ENV_INTEGRATION_TOKEN
                    );
                }
                legacy
            })
            .map(ApiKey::new)
            .transpose()?;

        Ok(Self {
            database,
            credential,
        })
    }

    /// Picks the database and token for one fetch.
    ///
    /// Blank call-site values count as absent. Both must be known, from
    /// either source, before anything is validated.
    pub fn resolve(
        &self,
        database: Option<&str>,
        token: Option<&str>,
    ) -> Result<(DatabaseId, ApiKey), AppError> {
        let database = database.map(str::trim).filter(|s| !s.is_empty());
        let token = token.map(str::trim).filter(|s| !s.is_empty());

        if (database.is_none() && self.database.is_none())
            || (token.is_none() && self.credential.is_none())
        {
            return Err(AppError::MissingCredentials);
        }

        let database = match database {
            Some(raw) => DatabaseId::parse(raw)?,
            None => self.database.clone().ok_or(AppError::MissingCredentials)?,
        };
        let credential = match token {
            Some(raw) => ApiKey::new(raw)?,
            None => self.credential.clone().ok_or(AppError::MissingCredentials)?,
        };

        Ok((database, credential))
    }
}

/// Resolved configuration, validated and ready to run.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub mode: RunMode,
    pub verbose: bool,
    pub properties: PropertyNames,
    pub defaults: NotionDefaults,
    pub client: ClientOptions,
}

impl ServerConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, NotionDefaults::from_env()?)
    }

    pub fn resolve_with(cli: CommandLineInput, defaults: NotionDefaults) -> Result<Self, AppError> {
        let mode = match cli.command {
            Command::Serve { host, port } => {
                let addr: SocketAddr = format!("{}:{}", host, port).parse().map_err(|e| {
                    AppError::MissingConfiguration(format!(
                        "Invalid bind address {}:{}: {}",
                        host, port, e
                    ))
                })?;
                RunMode::Serve { addr }
            }
            Command::Fetch { db, pretty } => RunMode::Fetch {
                database: db,
                pretty,
            },
        };

        let properties = PropertyNames::new(
            cli.title_property,
            cli.publish_date_property,
            cli.visuals_property,
        )?;

        let client = ClientOptions {
            base_url: cli.notion_api_url,
            timeout: cli.upstream_timeout_secs.map(Duration::from_secs),
            max_pages: cli.max_pages,
        };

        Ok(Self {
            mode,
            verbose: cli.verbose,
            properties,
            defaults,
            client,
        })
    }
}
