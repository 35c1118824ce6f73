use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{config::Config, model::role::Role, models::Claims};

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Mints a signed access token for the given subject. The token carries no
/// server-side state; expiry is enforced purely by the verifier.
pub fn generate_access_token(
    username: &str,
    role: Role,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = now();
    let claims = Claims {
        sub: username.to_string(),
        name: username.to_string(),
        role,
        jti: Uuid::new_v4().to_string(),
        iat: issued_at,
        exp: issued_at + config.access_token_ttl,
        iss: config.jwt_issuer.clone(),
        aud: config.jwt_audience.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, config: &Config) -> Result<Claims, String> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_audience(&[&config.jwt_audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            jwt_secret: "unit-test-signing-key".to_string(),
            jwt_issuer: "ems-api".to_string(),
            jwt_audience: "ems-clients".to_string(),
            access_token_ttl: 3600,
            admin_username: "Admin".to_string(),
            admin_password: "secret".to_string(),
            api_prefix: "/api".to_string(),
        }
    }

    #[test]
    fn minted_token_round_trips() {
        let config = test_config();
        let token = generate_access_token("Admin", Role::Admin, &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "Admin");
        assert_eq!(claims.name, "Admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn each_token_gets_a_fresh_jti() {
        let config = test_config();
        let a = verify_token(&generate_access_token("Admin", Role::Admin, &config).unwrap(), &config).unwrap();
        let b = verify_token(&generate_access_token("Admin", Role::Admin, &config).unwrap(), &config).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn token_signed_with_another_key_is_rejected() {
        let config = test_config();
        let token = generate_access_token("Admin", Role::Admin, &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "a-different-signing-key".to_string();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn token_for_another_audience_is_rejected() {
        let config = test_config();
        let token = generate_access_token("Admin", Role::Admin, &config).unwrap();

        let mut other = test_config();
        other.jwt_audience = "someone-else".to_string();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();

        // Mint a token that expired well past the verifier's leeway.
        let issued_at = now() - 7200;
        let claims = Claims {
            sub: "Admin".to_string(),
            name: "Admin".to_string(),
            role: Role::Admin,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            exp: issued_at + 60,
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
