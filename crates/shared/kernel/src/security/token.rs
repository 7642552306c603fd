use super::{SecurityError, SecurityErrorExt};
use crate::domain::account::Role;
use crate::domain::config::JwtConfig;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub role: Role,
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    config: JwtConfig,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("ttl_seconds", &self.config.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// # Errors
    /// Returns [`SecurityError::Configuration`] for an empty secret or a zero TTL.
    pub fn new(config: JwtConfig) -> Result<Self, SecurityError> {
        if config.secret.is_empty() {
            return Err(SecurityError::Configuration {
                message: "JWT secret cannot be empty".into(),
                context: None,
            });
        }
        if config.ttl_seconds == 0 {
            return Err(SecurityError::Configuration {
                message: "JWT ttl_seconds must be greater than zero".into(),
                context: None,
            });
        }

        Ok(Self { config })
    }

    /// Lifetime of issued tokens, reported to clients as `expiresIn`.
    #[must_use]
    pub const fn ttl_seconds(&self) -> u64 {
        self.config.ttl_seconds
    }

    /// Signs a token for `subject` valid from now for [`Self::ttl_seconds`].
    ///
    /// # Errors
    /// Returns [`SecurityError::Token`] if signing fails.
    pub fn issue(&self, subject: impl Into<String>, role: Role) -> Result<String, SecurityError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: subject.into(),
            role,
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            exp: now.saturating_add(self.config.ttl_seconds),
        };

        self.sign(&claims)
    }

    /// Checks signature, issuer, audience (when configured) and expiry with the configured
    /// clock-skew leeway.
    ///
    /// # Errors
    /// Returns [`SecurityError::Token`] for any invalid or expired token.
    pub fn verify(&self, token: &str) -> Result<Claims, SecurityError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.config.clock_skew_seconds;
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        match &self.config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key(), &validation)
            .map(|data| data.claims)
            .context("Bearer token rejected")
    }

    fn sign(&self, claims: &Claims) -> Result<String, SecurityError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key())
            .context("Failed to sign token")
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.config.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.config.secret.as_bytes())
    }
}
