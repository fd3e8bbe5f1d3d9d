use serde::Deserialize;

use crate::api::client::{ApiError, HttpClient};
use crate::models::AdminStats;

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: AdminStats,
}

/// Admin-only aggregate; the server enforces the ADMIN bit.
pub fn stats(client: &HttpClient) -> Result<AdminStats, ApiError> {
    let envelope: StatsEnvelope = client.get("/v1/admin/stats")?;
    Ok(envelope.stats)
}

/// Liveness probe; the server answers in plain text.
pub fn health(client: &HttpClient) -> Result<String, ApiError> {
    client.get_text("/v1/health")
}
