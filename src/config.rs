use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Site owner details and runtime knobs read from `folio.toml`.
/// Every key is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub owner_name: String,
    pub database: DatabaseConfig,
    pub contact: ContactConfig,
    pub social: SocialConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Submissions allowed per client within `rate_window_secs`.
    pub rate_limit: u64,
    pub rate_window_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Portfolio".to_string(),
            owner_name: "Portfolio".to_string(),
            database: DatabaseConfig::default(),
            contact: ContactConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: "website/db/folio.db".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            email: "hello@example.com".to_string(),
            phone: "+90 555 123 4567".to_string(),
            location: "Istanbul, Turkey".to_string(),
            rate_limit: 5,
            rate_window_secs: 15 * 60,
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        SocialConfig {
            github: "https://github.com".to_string(),
            linkedin: "https://linkedin.com".to_string(),
            twitter: "https://twitter.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from `$FOLIO_CONFIG`, falling back to `folio.toml` in the working
    /// directory. A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self, String> {
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw).map_err(|e| format!("{}: {}", path, e)),
            Err(_) => {
                log::info!("No {} found, using default site config", path);
                Ok(SiteConfig::default())
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Directory holding the SQLite database, if the path has one.
    pub fn database_dir(&self) -> Option<&str> {
        std::path::Path::new(&self.database.path)
            .parent()
            .and_then(|p| p.to_str())
            .filter(|p| !p.is_empty())
    }
}
