use crate::shared::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY` through `lookup`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            ));
        }

        let access_token_expiry: i64 = parse_or(lookup, "JWT_ACCESS_EXPIRY", 1800)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)".to_string(),
            ));
        }

        let issuer = parse_or(lookup, "JWT_ISSUER", "referral-service".to_string())?;

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
