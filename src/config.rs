use std::env;
use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("SUPERUSER_USERNAME, SUPERUSER_EMAIL and SUPERUSER_PASSWORD must be set together")]
    IncompleteSuperuser,

    #[error("SUPERUSER_EMAIL is not a valid email address: {0}")]
    InvalidSuperuserEmail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashingAlgorithm {
    Argon2,
    Bcrypt,
}

impl FromStr for HashingAlgorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            _ => Err(()),
        }
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashingAlgorithm::Argon2 => write!(f, "argon2"),
            HashingAlgorithm::Bcrypt => write!(f, "bcrypt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub sqlx_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasherConfig {
    pub algorithm: HashingAlgorithm,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
    pub bcrypt_cost: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HashingAlgorithm::Argon2,
            // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
            argon2_memory_kib: 4 * 1024,
            argon2_iterations: 3,
            argon2_parallelism: 1,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Superuser provisioned by the bootstrap binary.
#[derive(Clone, PartialEq, Eq)]
pub struct SuperuserConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SuperuserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperuserConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub hasher: HasherConfig,
    pub superuser: Option<SuperuserConfig>,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`), then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database = DatabaseConfig {
            url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 1)?,
            connect_timeout_secs: parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 8)?,
            sqlx_logging: parse_or(&lookup, "DATABASE_SQLX_LOGGING", false)?,
        };

        if database.max_connections == 0 || database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MIN_CONNECTIONS",
                value: database.min_connections.to_string(),
            });
        }

        let defaults = HasherConfig::default();
        let hasher = HasherConfig {
            algorithm: parse_or(&lookup, "PASSWORD_HASHER", defaults.algorithm)?,
            argon2_memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.argon2_memory_kib)?,
            argon2_iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.argon2_iterations)?,
            argon2_parallelism: parse_or(
                &lookup,
                "ARGON2_PARALLELISM",
                defaults.argon2_parallelism,
            )?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
        };

        if !(4..=31).contains(&hasher.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: hasher.bcrypt_cost.to_string(),
            });
        }

        let superuser = match (
            lookup("SUPERUSER_USERNAME"),
            lookup("SUPERUSER_EMAIL"),
            lookup("SUPERUSER_PASSWORD"),
        ) {
            (None, None, None) => None,
            (Some(username), Some(email), Some(password)) => {
                if !EmailAddress::is_valid(email.trim()) {
                    return Err(ConfigError::InvalidSuperuserEmail(email));
                }
                Some(SuperuserConfig {
                    username,
                    email,
                    password,
                })
            }
            _ => return Err(ConfigError::IncompleteSuperuser),
        };

        Ok(Self {
            database,
            hasher,
            superuser,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
