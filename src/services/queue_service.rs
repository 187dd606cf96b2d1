use crate::config::PortalConfig;
use crate::models::Queue;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The portal has well under 100 queues; names beyond the first page
// would not resolve.
const QUEUE_PAGE_LIMIT: u32 = 100;

/// Snapshot of the portal queue directory, fetched once per run
pub struct QueueDirectory {
    queues: Vec<Queue>,
}

impl QueueDirectory {
    fn from_queues(queues: Vec<Queue>) -> Self {
        Self { queues }
    }

    /// Downloads the queue directory
    pub async fn load(config: &PortalConfig) -> Result<Self, String> {
        let url = format!("{}/queue?limit={}", config.base_url, QUEUE_PAGE_LIMIT);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .header("id", &config.api_id)
            .header("x-access-token", &config.api_token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch queues: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Portal API error: {}", response.status()));
        }

        let queues: Vec<Queue> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse queue list: {}", e))?;

        log::info!("Loaded {} queues from the portal", queues.len());

        Ok(Self::from_queues(queues))
    }

    /// Resolves a queue name to its id
    pub fn id_by_name(&self, name: &str) -> Option<&str> {
        self.queues
            .iter()
            .find(|queue| queue.name == name)
            .map(|queue| queue.id.as_str())
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> QueueDirectory {
        QueueDirectory::from_queues(vec![
            Queue {
                id: "q1".to_string(),
                name: "Cardiologie".to_string(),
            },
            Queue {
                id: "q2".to_string(),
                name: "Urgences".to_string(),
            },
        ])
    }

    #[test]
    fn test_id_by_name_resolves() {
        let dir = directory();
        assert_eq!(dir.id_by_name("Urgences"), Some("q2"));
    }

    #[test]
    fn test_id_by_name_is_exact() {
        let dir = directory();
        assert_eq!(dir.id_by_name("urgences"), None);
        assert_eq!(dir.id_by_name("Radiologie"), None);
    }
}
