use std::env;

/// Deployment-wide configuration file, loaded before any `.env` fallback
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hcw-athome/hcw-athome.conf";

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} not found in environment", name))
}

/// Credentials for the portal REST API (static header tokens)
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub api_id: String,
    pub api_token: String,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: required("API_URL")?.trim_end_matches('/').to_string(),
            api_id: required("API_ID")?,
            api_token: required("API_TOKEN")?,
        })
    }
}

/// Basic-auth endpoint of a videoconferencing backend
#[derive(Debug, Clone)]
pub struct VideoBackendConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl VideoBackendConfig {
    pub fn openvidu_from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: required("OPENVIDU_URL")?.trim_end_matches('/').to_string(),
            // OpenVidu always authenticates as OPENVIDUAPP
            username: env::var("OPENVIDU_USER").unwrap_or_else(|_| "openviduapp".to_string()),
            password: required("OPENVIDU_SECRET")?,
        })
    }

    pub fn mediasoup_from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: required("MEDIASOUP_URL")?.trim_end_matches('/').to_string(),
            username: required("MEDIASOUP_USER")?,
            password: required("MEDIASOUP_SECRET")?,
        })
    }
}

/// MongoDB connection string of the platform database
pub fn db_uri() -> Result<String, String> {
    required("DB_URI")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_config_from_env() {
        env::set_var("API_URL", "https://portal.example.org/api/");
        env::set_var("API_ID", "admin-id");
        env::set_var("API_TOKEN", "token-123");

        let config = PortalConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://portal.example.org/api");
        assert_eq!(config.api_id, "admin-id");
        assert_eq!(config.api_token, "token-123");
    }

    #[test]
    fn test_openvidu_default_username() {
        env::set_var("OPENVIDU_URL", "https://video.example.org");
        env::set_var("OPENVIDU_SECRET", "secret");
        env::remove_var("OPENVIDU_USER");

        let config = VideoBackendConfig::openvidu_from_env().unwrap();
        assert_eq!(config.username, "openviduapp");
    }

    #[test]
    fn test_missing_variable_is_reported() {
        env::remove_var("MEDIASOUP_URL");
        let err = VideoBackendConfig::mediasoup_from_env().unwrap_err();
        assert!(err.contains("MEDIASOUP_URL"));
    }
}
