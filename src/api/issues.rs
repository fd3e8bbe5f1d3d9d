use serde::{Deserialize, Serialize};

use crate::api::client::{ApiError, HttpClient};
use crate::models::{Issue, Status};
use crate::validate::CreateIssueInput;

#[derive(Debug, Deserialize)]
struct IssuesEnvelope {
    issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct IssueEnvelope {
    issue: Issue,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: String,
}

#[derive(Debug, Serialize)]
struct UpdateStatusBody {
    status: Status,
}

pub fn list(client: &HttpClient) -> Result<Vec<Issue>, ApiError> {
    let envelope: IssuesEnvelope = client.get("/v1/issues")?;
    Ok(envelope.issues)
}

/// A missing id surfaces as the server's 404 error.
pub fn get(client: &HttpClient, id: i64) -> Result<Issue, ApiError> {
    let envelope: IssueEnvelope = client.get(&format!("/v1/issues/{}", id))?;
    Ok(envelope.issue)
}

/// Sends exactly `{title, description}`; the server assigns id, owner,
/// status, and timestamps.
pub fn create(client: &HttpClient, input: &CreateIssueInput) -> Result<Issue, ApiError> {
    let envelope: IssueEnvelope = client.post("/v1/issues", input)?;
    Ok(envelope.issue)
}

/// Full status replacement, the only mutation this surface offers.
pub fn update_status(client: &HttpClient, id: i64, status: Status) -> Result<Issue, ApiError> {
    let envelope: IssueEnvelope = client.patch(
        &format!("/v1/issues/{}/status", id),
        &UpdateStatusBody { status },
    )?;
    Ok(envelope.issue)
}

pub fn delete(client: &HttpClient, id: i64) -> Result<String, ApiError> {
    let envelope: MessageEnvelope = client.delete(&format!("/v1/issues/{}", id))?;
    Ok(envelope.message)
}
