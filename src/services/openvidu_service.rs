use crate::config::VideoBackendConfig;
use crate::services::sessions::{SessionBackend, SessionReport};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `GET /api/sessions` response, an OpenVidu paged collection
#[derive(Debug, Deserialize)]
struct SessionsPage {
    #[serde(rename = "numberOfElements")]
    number_of_elements: u64,
    #[serde(default)]
    content: Vec<SessionEntry>,
}

#[derive(Debug, Deserialize)]
struct SessionEntry {
    connections: ConnectionsPage,
}

#[derive(Debug, Deserialize)]
struct ConnectionsPage {
    #[serde(rename = "numberOfElements")]
    number_of_elements: u64,
}

fn sum_connections(page: &SessionsPage) -> u64 {
    page.content
        .iter()
        .map(|session| session.connections.number_of_elements)
        .sum()
}

/// Polls an OpenVidu server for active sessions and connections
pub struct OpenViduService {
    config: VideoBackendConfig,
}

impl OpenViduService {
    pub fn new(config: VideoBackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionBackend for OpenViduService {
    fn name(&self) -> &'static str {
        "openvidu"
    }

    async fn fetch_sessions(&self) -> Result<SessionReport, String> {
        let url = format!("{}/api/sessions", self.config.base_url);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| format!("Failed to reach OpenVidu: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("OpenVidu API error: {}", response.status()));
        }

        let page: SessionsPage = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse OpenVidu sessions: {}", e))?;

        Ok(SessionReport {
            calls: page.number_of_elements,
            connections: Some(sum_connections(&page)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sessions_page() {
        let body = r#"{
            "numberOfElements": 2,
            "content": [
                { "connections": { "numberOfElements": 3 } },
                { "connections": { "numberOfElements": 1 } }
            ]
        }"#;

        let page: SessionsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.number_of_elements, 2);
        assert_eq!(sum_connections(&page), 4);
    }

    #[test]
    fn test_parse_empty_sessions_page() {
        let page: SessionsPage = serde_json::from_str(r#"{"numberOfElements": 0}"#).unwrap();
        assert_eq!(page.number_of_elements, 0);
        assert_eq!(sum_connections(&page), 0);
    }
}
