use crate::errors::ConfigError;

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub mongo_uri: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("MONGO_URI")
            .or_else(|| lookup("MONGODB_URI"))
            .ok_or(ConfigError::MissingVar("MONGO_URI"))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Settings { mongo_uri, port })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
