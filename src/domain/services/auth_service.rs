use crate::config::Config;
use crate::domain::models::auth::{Claims, TOKEN_AUDIENCE};
use crate::domain::models::user::User;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rand::{distributions::Alphanumeric, Rng};

const ACCESS_TOKEN_HOURS: i64 = 8;

pub struct AuthService {
    config: Config,
    encoding_key: EncodingKey,
}

impl AuthService {
    pub fn new(config: Config) -> Self {
        let encoding_key = EncodingKey::from_ed_pem(config.jwt_secret_key.as_bytes())
            .expect("Invalid JWT Private Key PEM");

        Self { config, encoding_key }
    }

    /// Issues the access JWT and its paired CSRF token. The tenant claim is
    /// taken from the user row, the single source of truth for tenancy.
    pub fn issue_token(&self, user: &User) -> Result<(String, String), AppError> {
        let csrf_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            tenant_id: user.tenant_id.clone(),
            role: user.role.clone(),
            csrf_token: csrf_token.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            iss: self.config.auth_issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ACCESS_TOKEN_HOURS)).timestamp(),
        };

        let jwt = encode(&Header::new(Algorithm::EdDSA), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal)?;

        Ok((jwt, csrf_token))
    }
}
