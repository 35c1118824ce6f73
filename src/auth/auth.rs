use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::role::Role;

/// The authenticated caller, reconstructed from the bearer token.
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => {
                return ready(Err(ApiError::Unauthorized("Missing token".to_string()).into()));
            }
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(
                    actix_web::error::ErrorInternalServerError("Config missing"),
                ));
            }
        };

        let claims = match verify_token(token, config) {
            Ok(c) => c,
            Err(_) => {
                return ready(Err(ApiError::Unauthorized("Invalid token".to_string()).into()));
            }
        };

        ready(Ok(AuthUser {
            username: claims.sub,
            role: claims.role,
        }))
    }
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.role.can_manage_employees() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Admin only".to_string()))
        }
    }

    pub fn require_report_access(&self) -> Result<(), ApiError> {
        if self.role.can_download_reports() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Admin only".to_string()))
        }
    }
}
