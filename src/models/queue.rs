use serde::{Deserialize, Serialize};

/// Call-routing queue as returned by the portal API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Queue {
    pub id: String,
    pub name: String,
}
