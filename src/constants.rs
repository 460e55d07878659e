/// Service-wide constants shared by the catalogue, the HTTP layer and the CLI

/// Returned when a discipline has no consideration for the requested scope
pub const FALLBACK_RECOMMENDATION: &str =
    "No specific recommendation available for this combination.";

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the AI Risk Assessment API";

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "risk-catalog";

// Environment overrides for the config file
pub const ENV_HOST: &str = "RISK_CATALOG_HOST";
pub const ENV_PORT: &str = "RISK_CATALOG_PORT";
pub const ENV_LOG_DIR: &str = "RISK_CATALOG_LOG_DIR";
pub const ENV_CATALOGUE: &str = "RISK_CATALOG_CATALOGUE";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "risk-catalog.log";
