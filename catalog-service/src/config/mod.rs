use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub common: core_config::Config,
    /// `None` when the store is not configured. The service still starts and
    /// answers catalog requests with an error.
    pub mongodb: Option<MongoConfig>,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl CatalogConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let mongodb = mongo_config_from(
            env::var(DATABASE_URL_VAR).ok(),
            env::var(DATABASE_NAME_VAR).ok(),
        );

        if mongodb.is_none() && core_config::is_production() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "{} and {} are required in production but not set",
                DATABASE_URL_VAR,
                DATABASE_NAME_VAR
            )));
        }

        Ok(CatalogConfig {
            common: common_config,
            mongodb,
        })
    }
}

fn mongo_config_from(uri: Option<String>, database: Option<String>) -> Option<MongoConfig> {
    match (uri, database) {
        (Some(uri), Some(database)) if !uri.is_empty() && !database.is_empty() => {
            Some(MongoConfig { uri, database })
        }
        _ => None,
    }
}
