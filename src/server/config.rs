use crate::server::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Public origin used to build menu links and QR codes, without trailing slash
    pub public_url: String,
    /// Emails granted admin capabilities, lowercased
    pub admin_emails: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_url = required("PUBLIC_URL")?;
        let public_url = public_url.trim().trim_end_matches('/').to_string();
        if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PUBLIC_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            public_url,
            admin_emails: parse_admin_emails(&std::env::var("ADMIN_EMAILS").unwrap_or_default()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Splits a comma separated allow-list, dropping blanks.
pub fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}
