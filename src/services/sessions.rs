use async_trait::async_trait;

/// One poll of a videoconferencing backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Ongoing remote consultations
    pub calls: u64,
    /// Participant connections, when the backend exposes them
    pub connections: Option<u64>,
}

/// A videoconferencing backend that can report its active sessions
#[async_trait]
pub trait SessionBackend {
    fn name(&self) -> &'static str;

    async fn fetch_sessions(&self) -> Result<SessionReport, String>;
}
