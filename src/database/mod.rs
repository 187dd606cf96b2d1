pub mod messages;
pub mod users;

pub use messages::*;
pub use users::*;

use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::time::Duration;

/// Connection to the platform database
#[derive(Clone)]
pub struct MongoDb {
    client: Client,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str) -> Result<Self, String> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| format!("Invalid MongoDB URI: {}", e))?;

        // One-shot runs, fail fast when the database is unreachable
        options.connect_timeout = Some(Duration::from_secs(5));
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let client =
            Client::with_options(options).map_err(|e| format!("MongoDB client error: {}", e))?;

        // Database name from the URI, same default as the platform
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("hcw-athome");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names()
            .await
            .map_err(|e| format!("Failed to connect to MongoDB: {}", e))?;

        log::info!("Connected to MongoDB database: {}", db_name);

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DB_URI").expect("DB_URI must be set");
        let db = MongoDb::connect(&uri).await;
        assert!(db.is_ok());
    }
}
