use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, info, instrument};

use crate::{
    auth::jwt::generate_access_token,
    config::Config,
    error::ApiError,
    model::role::Role,
    models::{LoginRequest, LoginResponse},
};

/// Login with the configured admin credential pair
///
/// There is exactly one account; validation is a straight equality check
/// against externally injected configuration. No session state is recorded.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(config, credentials),
    fields(username = %credentials.username)
)]
pub async fn login(
    credentials: web::Json<LoginRequest>,
    config: web::Data<Config>,
) -> Result<impl Responder, ApiError> {
    info!("Login request received");

    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(ApiError::Validation("Username or password required".to_string()));
    }

    // Single fixed credential pair. The same failure is returned whether the
    // username or the password was wrong.
    if credentials.username != config.admin_username
        || credentials.password != config.admin_password
    {
        info!("Invalid credentials");
        return Err(ApiError::InvalidCredentials);
    }

    debug!("Generating access token");

    let token = generate_access_token(&credentials.username, Role::Admin, &config)?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
