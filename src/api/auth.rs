use serde::Deserialize;

use crate::api::client::{ApiError, HttpClient};
use crate::models::User;
use crate::validate::{LoginInput, RegisterInput};

/// `{user, token}` returned by both auth operations.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

pub fn login(client: &HttpClient, input: &LoginInput) -> Result<AuthResponse, ApiError> {
    client.post("/v1/users/login", input)
}

pub fn register(client: &HttpClient, input: &RegisterInput) -> Result<AuthResponse, ApiError> {
    client.post("/v1/users/register", input)
}
