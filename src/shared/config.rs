use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: String, value: String },

    #[error("{0}")]
    Constraint(String),
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Settings {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralSettings {
    pub code_length: usize,
    pub max_code_attempts: u32,
    pub allow_self_referral: bool,
    pub lookup_code_by_email: bool,
    pub referrals_visible_to_participants_only: bool,
}

impl Default for ReferralSettings {
    fn default() -> Self {
        Self {
            code_length: 10,
            max_code_attempts: 5,
            allow_self_referral: true,
            lookup_code_by_email: false,
            referrals_visible_to_participants_only: true,
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub argon2: Argon2Settings,
    pub referral: ReferralSettings,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    #[cfg(not(tarpaulin_include))]
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseSettings {
            url: required(&lookup, "DATABASE_URL")?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 10)?,
            connect_timeout_secs: parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?,
            idle_timeout_secs: parse_or(&lookup, "DB_IDLE_TIMEOUT_SECS", 300)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Constraint(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let argon2_defaults = Argon2Settings::default();
        let argon2 = Argon2Settings {
            memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", argon2_defaults.memory_kib)?,
            iterations: parse_or(&lookup, "ARGON2_ITERATIONS", argon2_defaults.iterations)?,
            parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", argon2_defaults.parallelism)?,
        };

        let referral_defaults = ReferralSettings::default();
        let referral = ReferralSettings {
            code_length: parse_or(&lookup, "REFERRAL_CODE_LENGTH", referral_defaults.code_length)?,
            max_code_attempts: parse_or(
                &lookup,
                "REFERRAL_CODE_MAX_ATTEMPTS",
                referral_defaults.max_code_attempts,
            )?,
            allow_self_referral: parse_bool_or(
                &lookup,
                "REFERRAL_ALLOW_SELF",
                referral_defaults.allow_self_referral,
            )?,
            lookup_code_by_email: parse_bool_or(
                &lookup,
                "REFERRAL_LOOKUP_BY_EMAIL",
                referral_defaults.lookup_code_by_email,
            )?,
            referrals_visible_to_participants_only: parse_bool_or(
                &lookup,
                "REFERRAL_PARTICIPANTS_ONLY",
                referral_defaults.referrals_visible_to_participants_only,
            )?,
        };

        if !(6..=10).contains(&referral.code_length) {
            return Err(ConfigError::Constraint(
                "REFERRAL_CODE_LENGTH must be between 6 and 10".to_string(),
            ));
        }

        if referral.max_code_attempts == 0 {
            return Err(ConfigError::Constraint(
                "REFERRAL_CODE_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host: required(&lookup, "HOST")?,
            port: parse_required(&lookup, "PORT")?,
            database,
            jwt: JwtConfig::from_lookup(&lookup)?,
            argon2,
            referral,
            run_migrations: parse_bool_or(&lookup, "RUN_MIGRATIONS", false)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Blank values count as unset.
fn lookup_value<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_value(lookup, key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

pub(crate) fn parse_required<F, T>(lookup: &F, key: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = required(lookup, key)?;
    raw.parse::<T>().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: raw,
    })
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup_value(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_value(lookup, key) {
        None => Ok(default),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key: key.to_string(),
                value: raw,
            }),
        },
    }
}
