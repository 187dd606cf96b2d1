use crate::config::VideoBackendConfig;
use crate::services::sessions::{SessionBackend, SessionReport};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct RoomsCount {
    count: u64,
}

/// Polls a Mediasoup server for its active-room count.
/// Mediasoup does not expose per-room connections.
pub struct MediasoupService {
    config: VideoBackendConfig,
}

impl MediasoupService {
    pub fn new(config: VideoBackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionBackend for MediasoupService {
    fn name(&self) -> &'static str {
        "mediasoup"
    }

    async fn fetch_sessions(&self) -> Result<SessionReport, String> {
        let url = format!("{}/rooms-count", self.config.base_url);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| format!("Failed to reach Mediasoup: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Mediasoup API error: {}", response.status()));
        }

        let rooms: RoomsCount = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse rooms count: {}", e))?;

        Ok(SessionReport {
            calls: rooms.count,
            connections: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rooms_count() {
        let rooms: RoomsCount = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        assert_eq!(rooms.count, 7);
    }
}
