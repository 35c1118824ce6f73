use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "Admin")]
    pub username: String,
    #[schema(example = "secret")]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Display name, mirrors the subject for the single admin account.
    pub name: String,
    pub role: Role,
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}
