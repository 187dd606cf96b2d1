use serde::{Deserialize, Serialize};

/// User account as returned by the portal API
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub auth_phone_number: Option<String>,
}

/// Outgoing create/update body for `/user`.
/// The portal hashes `password` itself on create; on update it stores the
/// value verbatim, so updates must carry a bcrypt hash.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub auth_phone_number: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
