use crate::database::MongoDb;
use crate::utils::password::hash_password;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Roles manageable from the command line
pub const MANAGED_ROLES: [&str; 2] = ["admin", "doctor"];

/// Document of the `user` collection
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// Input for a locally created account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

pub fn is_managed_role(role: &str) -> bool {
    MANAGED_ROLES.contains(&role)
}

/// Inserts a user document. The clear-text password is hashed here,
/// the platform reads the stored hash as-is.
pub async fn create_user(db: &MongoDb, new: &NewUser, password: &str) -> Result<(), String> {
    let now = DateTime::now();
    let user = UserDocument {
        id: None,
        email: new.email.clone(),
        first_name: new.first_name.clone(),
        last_name: new.last_name.clone(),
        role: new.role.clone(),
        username: new.email.clone(),
        phone_number: String::new(),
        password: Some(hash_password(password)?),
        created_at: Some(now),
        updated_at: Some(now),
    };

    db.collection::<UserDocument>("user")
        .insert_one(user)
        .await
        .map_err(|e| format!("Failed to insert user {}: {}", new.email, e))?;

    log::info!("Created user {} with role {}", new.email, new.role);

    Ok(())
}

/// Lists every admin and doctor account
pub async fn list_users(db: &MongoDb) -> Result<Vec<UserDocument>, String> {
    let filter = doc! { "role": { "$in": MANAGED_ROLES.to_vec() } };

    let mut cursor = db
        .collection::<UserDocument>("user")
        .find(filter)
        .await
        .map_err(|e| format!("Failed to query users: {}", e))?;

    let mut users = Vec::new();
    while let Some(user) = cursor
        .try_next()
        .await
        .map_err(|e| format!("Failed to read user documents: {}", e))?
    {
        users.push(user);
    }

    Ok(users)
}

/// Deletes one user by email, returns the deleted count
pub async fn delete_user(db: &MongoDb, email: &str) -> Result<u64, String> {
    let result = db
        .collection::<UserDocument>("user")
        .delete_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Failed to delete user {}: {}", email, e))?;

    Ok(result.deleted_count)
}

/// Changes the role of one user by email, returns the modified count
pub async fn promote_user(db: &MongoDb, email: &str, role: &str) -> Result<u64, String> {
    let result = db
        .collection::<UserDocument>("user")
        .update_one(
            doc! { "email": email },
            doc! { "$set": { "role": role, "updatedAt": DateTime::now() } },
        )
        .await
        .map_err(|e| format!("Failed to promote user {}: {}", email, e))?;

    Ok(result.modified_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_managed_role() {
        assert!(is_managed_role("admin"));
        assert!(is_managed_role("doctor"));
        assert!(!is_managed_role("patient"));
        assert!(!is_managed_role(""));
    }

    #[test]
    fn test_user_document_serializes_camel_case() {
        let now = DateTime::now();
        let user = UserDocument {
            id: None,
            email: "a@b.ch".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: "doctor".to_string(),
            username: "a@b.ch".to_string(),
            phone_number: String::new(),
            password: None,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let bson = mongodb::bson::to_document(&user).unwrap();
        assert!(bson.contains_key("firstName"));
        assert!(bson.contains_key("createdAt"));
        assert!(!bson.contains_key("_id"));
        assert!(!bson.contains_key("password"));
    }
}
