use crate::database::MongoDb;
use mongodb::bson::{doc, DateTime, Document};

fn cutoff_filter(cutoff: DateTime) -> Document {
    doc! { "createdAt": { "$lt": cutoff } }
}

/// Counts `message` documents created before the cutoff
pub async fn count_messages_older_than(db: &MongoDb, cutoff: DateTime) -> Result<u64, String> {
    db.collection::<Document>("message")
        .count_documents(cutoff_filter(cutoff))
        .await
        .map_err(|e| format!("Failed to count messages: {}", e))
}

/// Deletes `message` documents created before the cutoff,
/// returns the deleted count
pub async fn purge_messages_older_than(db: &MongoDb, cutoff: DateTime) -> Result<u64, String> {
    let result = db
        .collection::<Document>("message")
        .delete_many(cutoff_filter(cutoff))
        .await
        .map_err(|e| format!("Failed to purge messages: {}", e))?;

    Ok(result.deleted_count)
}
