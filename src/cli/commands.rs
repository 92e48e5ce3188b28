//! CLI command implementations
//!
//! Both commands follow the same boot sequence:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Install the log subscriber
//! 3. Build the store gateway once
//! 4. Run the command on a tokio runtime

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LogConfig};
use crate::store::{self, StoreBackend, StoreConfig};

use super::args::{Command, CommonArgs};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Log output settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise, then apply the store address override
    pub fn resolve(common: &CommonArgs) -> CliResult<Self> {
        let mut config = match &common.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(uri) = &common.mongo_uri {
            config.store.uri = uri.clone();
        }

        Ok(config)
    }

    /// Validate the resolved configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.store.backend == StoreBackend::Mongo {
            if self.store.uri.trim().is_empty() {
                return Err(CliError::config_error("store.uri must not be empty"));
            }
            if self.store.database.is_empty() || self.store.collection.is_empty() {
                return Err(CliError::config_error(
                    "store.database and store.collection must not be empty",
                ));
            }
        }

        self.log.validate().map_err(CliError::config_error)?;

        Ok(())
    }
}

/// Flag overrides specific to `serve`
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub memory: bool,
}

impl ServeOverrides {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.memory {
            config.store.backend = StoreBackend::Memory;
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            common,
            host,
            port,
            memory,
        } => serve(&common, ServeOverrides { host, port, memory }),
        Command::Check { common } => check(&common),
    }
}

fn boot(config: &Config) -> CliResult<tokio::runtime::Runtime> {
    config.validate()?;

    init_logging(&config.log)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))?;

    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Start the HTTP server
///
/// An unreachable store at startup is logged, not fatal: the driver
/// connects lazily and requests fail with 500 until it comes back.
pub fn serve(common: &CommonArgs, overrides: ServeOverrides) -> CliResult<()> {
    let mut config = Config::resolve(common)?;
    overrides.apply(&mut config);

    let rt = boot(&config)?;

    rt.block_on(async {
        let gateway = store::connect(&config.store)
            .await
            .map_err(|e| CliError::boot_failed(format!("Failed to create store client: {}", e)))?;

        info!(store = %config.store.target(), "store client created");
        if let Err(e) = gateway.ping().await {
            warn!(error = %e, "store not reachable at startup");
        }

        let server = HttpServer::with_gateway(config.server.clone(), gateway);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Ping the configured store once
pub fn check(common: &CommonArgs) -> CliResult<()> {
    let config = Config::resolve(common)?;
    let rt = boot(&config)?;

    rt.block_on(async {
        let gateway = store::connect(&config.store)
            .await
            .map_err(|e| CliError::store_unavailable(e.to_string()))?;

        gateway
            .ping()
            .await
            .map_err(|e| CliError::store_unavailable(e.to_string()))?;

        println!("store reachable: {}", config.store.target());
        Ok::<(), CliError>(())
    })
}
