// Reports doctors assigned to more than one call queue. Doctors are
// expected to take calls from a single queue; extra assignments are
// usually import leftovers.

use crate::config::PortalConfig;
use crate::services::AccountService;
use crate::utils::error::AppError;

pub async fn run() -> Result<(), AppError> {
    let config = PortalConfig::from_env().map_err(AppError::ConfigError)?;
    let accounts = AccountService::new(config);

    let doctors = accounts.list_doctors().await.map_err(AppError::ApiError)?;
    log::info!("Checking queue assignments of {} doctors", doctors.len());

    for doctor in doctors {
        let queues = accounts
            .allowed_queues(&doctor.id)
            .await
            .map_err(AppError::ApiError)?;

        if queues.len() > 1 {
            println!("WARNING : {} has more than one queue:", doctor.email);
            for queue in queues {
                println!("{}", queue.name);
            }
        }
    }

    Ok(())
}
