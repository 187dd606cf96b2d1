// Removes one queue assignment from one user.

use crate::config::PortalConfig;
use crate::services::{AccountService, QueueDirectory};
use crate::utils::error::AppError;

pub async fn run(email: &str, queue_name: &str) -> Result<(), AppError> {
    let config = PortalConfig::from_env().map_err(AppError::ConfigError)?;
    let accounts = AccountService::new(config.clone());
    let queues = QueueDirectory::load(&config).await.map_err(AppError::ApiError)?;

    let Some(queue_id) = queues.id_by_name(queue_name) else {
        println!("{}: NOT FOUND", queue_name);
        return Err(AppError::NotFound(format!("queue {}", queue_name)));
    };

    let account = accounts
        .find_doctor(email)
        .await
        .map_err(AppError::ApiError)?
        .ok_or_else(|| AppError::NotFound(format!("account {}", email)))?;

    let status = accounts
        .remove_queue(&account.id, queue_id)
        .await
        .map_err(AppError::ApiError)?;

    println!("{}: DELETE", status.as_u16());

    Ok(())
}
