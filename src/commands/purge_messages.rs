// Retention sweep over the `message` collection.

use crate::config;
use crate::database::{self, MongoDb};
use crate::utils::error::AppError;
use chrono::Utc;
use mongodb::bson::DateTime;

fn cutoff_for_days(days: i64) -> DateTime {
    let cutoff = Utc::now() - chrono::Duration::days(days);
    DateTime::from_millis(cutoff.timestamp_millis())
}

pub async fn run(older_than_days: i64, dry_run: bool) -> Result<(), AppError> {
    if older_than_days <= 0 {
        return Err(AppError::InvalidInput(
            "--older-than must be a positive number of days".to_string(),
        ));
    }

    let uri = config::db_uri().map_err(AppError::ConfigError)?;
    let db = MongoDb::connect(&uri).await.map_err(AppError::DatabaseError)?;

    let cutoff = cutoff_for_days(older_than_days);
    let matched = database::count_messages_older_than(&db, cutoff)
        .await
        .map_err(AppError::DatabaseError)?;

    if dry_run {
        println!(
            "{} messages older than {} days (dry run, nothing deleted)",
            matched, older_than_days
        );
        return Ok(());
    }

    let deleted = database::purge_messages_older_than(&db, cutoff)
        .await
        .map_err(AppError::DatabaseError)?;

    println!(
        "{} messages older than {} days, {} deleted",
        matched, older_than_days, deleted
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_in_the_past() {
        let cutoff = cutoff_for_days(30);
        assert!(cutoff < DateTime::now());
    }

    #[test]
    fn test_cutoff_scales_with_days() {
        assert!(cutoff_for_days(60) < cutoff_for_days(30));
    }
}
