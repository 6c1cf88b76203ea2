use axum::{extract::State, Json};

use crate::services::{diagnose, DiagnosticsReport, EnvPresence};
use crate::startup::AppState;

/// Always 200; store problems are described in the body.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let store = state.catalog.store().map(|s| s.as_ref());
    Json(diagnose(store, EnvPresence::from_env()).await)
}
