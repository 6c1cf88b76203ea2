//! Status snapshot served by the `/test` endpoint.

use crate::config::{DATABASE_NAME_VAR, DATABASE_URL_VAR};
use crate::services::store::CatalogStore;
use serde::Serialize;
use service_core::error::AppError;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Whether the store settings are present. Only presence is ever recorded,
/// never the values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    pub fn from_env() -> Self {
        Self {
            database_url: is_set(DATABASE_URL_VAR),
            database_name: is_set(DATABASE_NAME_VAR),
        }
    }
}

fn is_set(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|v| !v.is_empty())
}

fn presence_label(present: bool) -> String {
    let label = if present { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn truncate_error(err: &AppError) -> String {
    let message = match err {
        AppError::DatabaseError(inner) => inner.to_string(),
        other => other.to_string(),
    };
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Builds the report. Store failures are described in the body, never
/// returned.
pub async fn diagnose(store: Option<&dyn CatalogStore>, env: EnvPresence) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence_label(env.database_url),
        database_name: presence_label(env.database_name),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        return report;
    };

    report.connection_status = "Connected".to_string();
    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(
                database = %store.database_name(),
                "Diagnostics could not list collections: {}",
                e
            );
            report.database = format!("⚠️  Connected but Error: {}", truncate_error(&e));
        }
    }

    report
}
