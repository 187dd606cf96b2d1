use crate::config::PortalConfig;
use crate::models::{Queue, UserAccount, UserPayload};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the portal `/user` endpoints.
/// Every request carries the static `id` / `x-access-token` admin headers.
pub struct AccountService {
    client: reqwest::Client,
    config: PortalConfig,
}

impl AccountService {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Accept", "application/json")
            .header("id", &self.config.api_id)
            .header("x-access-token", &self.config.api_token)
            .timeout(REQUEST_TIMEOUT)
    }

    fn send_json(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("Accept", "application/json")
            .header("id", &self.config.api_id)
            .header("x-access-token", &self.config.api_token)
            .timeout(REQUEST_TIMEOUT)
    }

    /// Looks a doctor account up by email. The portal answers with an array;
    /// an empty array means the account does not exist yet.
    pub async fn find_doctor(&self, email: &str) -> Result<Option<UserAccount>, String> {
        let url = format!(
            "{}/user?role=doctor&email={}",
            self.config.base_url,
            urlencoding::encode(email)
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to query user {}: {}", email, e))?;

        if !response.status().is_success() {
            return Err(format!("Portal API error: {}", response.status()));
        }

        let accounts: Vec<UserAccount> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse user response: {}", e))?;

        Ok(accounts.into_iter().next())
    }

    /// Fetches every doctor account known to the portal
    pub async fn list_doctors(&self) -> Result<Vec<UserAccount>, String> {
        let url = format!("{}/user?role=doctor&limit=1000", self.config.base_url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to list doctors: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Portal API error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse doctor list: {}", e))
    }

    /// Creates an account. The portal hashes the password server-side,
    /// so the payload carries it in clear.
    pub async fn create(&self, payload: &UserPayload) -> Result<StatusCode, String> {
        let url = format!("{}/user", self.config.base_url);

        let response = self
            .send_json(reqwest::Method::POST, &url)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Failed to create user {}: {}", payload.email, e))?;

        Ok(response.status())
    }

    /// Updates an existing account. A password in the payload must already
    /// be a bcrypt hash, the portal stores it verbatim on update.
    pub async fn update(&self, id: &str, payload: &UserPayload) -> Result<StatusCode, String> {
        let url = format!("{}/user/{}", self.config.base_url, id);

        let response = self
            .send_json(reqwest::Method::PUT, &url)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Failed to update user {}: {}", payload.email, e))?;

        Ok(response.status())
    }

    /// Lists the queues a user is allowed to take calls from
    pub async fn allowed_queues(&self, id: &str) -> Result<Vec<Queue>, String> {
        let url = format!("{}/user/{}/allowed-queues", self.config.base_url, id);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch allowed queues: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Portal API error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse allowed queues: {}", e))
    }

    /// Assigns a queue to a user
    pub async fn add_queue(&self, id: &str, queue_id: &str) -> Result<StatusCode, String> {
        let url = format!("{}/user/{}/allowed-queues", self.config.base_url, id);

        let response = self
            .send_json(reqwest::Method::POST, &url)
            .json(&json!({ "queue": queue_id }))
            .send()
            .await
            .map_err(|e| format!("Failed to assign queue: {}", e))?;

        Ok(response.status())
    }

    /// Removes a queue assignment from a user
    pub async fn remove_queue(&self, id: &str, queue_id: &str) -> Result<StatusCode, String> {
        let url = format!("{}/user/{}/allowed-queues", self.config.base_url, id);

        let response = self
            .send_json(reqwest::Method::DELETE, &url)
            .json(&json!({ "queue": queue_id }))
            .send()
            .await
            .map_err(|e| format!("Failed to remove queue: {}", e))?;

        Ok(response.status())
    }
}
