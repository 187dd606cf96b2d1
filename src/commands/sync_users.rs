// ==================== CSV USER IMPORT ====================
// Bulk-creates or updates doctor accounts through the portal API and
// assigns them to call queues. Accounts are never deleted and existing
// queue assignments are never removed.

use crate::config::PortalConfig;
use crate::models::UserPayload;
use crate::services::{AccountService, QueueDirectory};
use crate::utils::error::AppError;
use crate::utils::password::{generate_password, hash_password, GENERATED_PASSWORD_LEN};
use crate::utils::text::{clean_value, split_queue_names};
use std::path::Path;

/// Accounts under the hospital directory domain authenticate upstream:
/// their email keeps its case and they never receive a password.
const DIRECTORY_DOMAIN: &str = "hcduge.ch";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PasswordPlan {
    /// Directory account, authentication is delegated
    None,
    /// Clear-text password supplied in the CSV
    Provided(String),
    /// Random password generated for the row
    Generated(String),
}

/// One CSV row, cleaned up and ready to apply
#[derive(Debug, Clone)]
struct RowPlan {
    first_name: String,
    last_name: String,
    email: String,
    auth_phone_number: String,
    phone_number: String,
    password: PasswordPlan,
    queue_names: Vec<String>,
}

/// Turns a raw CSV record into a plan. Returns None for rows without an
/// email address.
///
/// Layout: lastname, firstname, email, authPhoneNumber, phoneNumber,
/// password, queues
fn plan_row(record: &csv::StringRecord) -> Option<RowPlan> {
    let field = |i: usize| clean_value(record.get(i).unwrap_or(""));

    let last_name = field(0);
    let first_name = field(1);
    let mut email = field(2);
    let auth_phone_number = field(3);
    let phone_number = field(4);
    let password_field = field(5);
    let queue_names = split_queue_names(&field(6));

    if email.is_empty() {
        return None;
    }

    let password = if email.contains(DIRECTORY_DOMAIN) {
        PasswordPlan::None
    } else {
        email = email.to_lowercase();
        if password_field.is_empty() {
            PasswordPlan::Generated(generate_password(GENERATED_PASSWORD_LEN))
        } else {
            PasswordPlan::Provided(password_field)
        }
    };

    Some(RowPlan {
        first_name,
        last_name,
        email,
        auth_phone_number,
        phone_number,
        password,
        queue_names,
    })
}

fn csv_reader<R: std::io::Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'|')
        .flexible(true)
        .from_reader(source)
}

async fn sync_row(
    accounts: &AccountService,
    queues: &QueueDirectory,
    plan: RowPlan,
) -> Result<(), String> {
    let mut payload = UserPayload {
        role: "doctor".to_string(),
        first_name: plan.first_name,
        last_name: plan.last_name,
        email: plan.email.clone(),
        username: plan.email.clone(),
        auth_phone_number: plan.auth_phone_number,
        phone_number: plan.phone_number,
        password: None,
    };

    let user_id = match accounts.find_doctor(&plan.email).await? {
        Some(account) => {
            // Only an explicit CSV password overwrites the stored one.
            // Updates carry the hash, the portal stores it verbatim.
            if let PasswordPlan::Provided(clear) = &plan.password {
                payload.password = Some(hash_password(clear)?);
            }

            let status = accounts.update(&account.id, &payload).await?;
            match &plan.password {
                PasswordPlan::Provided(clear) => {
                    println!("{} : ### UPDATE {} / {}", status.as_u16(), payload.email, clear)
                }
                _ => println!("{} : ### UPDATE {}", status.as_u16(), payload.email),
            }

            account.id
        }
        None => {
            // Creates go through the portal's own hashing, password in clear
            let clear = match &plan.password {
                PasswordPlan::Provided(c) | PasswordPlan::Generated(c) => Some(c.clone()),
                PasswordPlan::None => None,
            };
            payload.password = clear.clone();

            let status = accounts.create(&payload).await?;
            match &clear {
                Some(c) => {
                    println!("{} : ### CREATE {} / {}", status.as_u16(), payload.email, c)
                }
                None => println!("{} : ### CREATE {}", status.as_u16(), payload.email),
            }

            // Re-fetch to learn the id assigned by the portal
            match accounts.find_doctor(&plan.email).await? {
                Some(account) => account.id,
                None => {
                    log::warn!(
                        "Account {} not visible after create, skipping its queues",
                        plan.email
                    );
                    return Ok(());
                }
            }
        }
    };

    for name in &plan.queue_names {
        match queues.id_by_name(name) {
            Some(queue_id) => {
                let status = accounts.add_queue(&user_id, queue_id).await?;
                println!("{} : QUEUE {}", status.as_u16(), name);
            }
            None => println!("MISSING : QUEUE {}", name),
        }
    }

    Ok(())
}

pub async fn run(csv_path: &Path) -> Result<(), AppError> {
    let config = PortalConfig::from_env().map_err(AppError::ConfigError)?;
    let accounts = AccountService::new(config.clone());
    let queues = QueueDirectory::load(&config).await.map_err(AppError::ApiError)?;

    let file = std::fs::File::open(csv_path).map_err(|e| {
        AppError::InvalidInput(format!("Cannot open {}: {}", csv_path.display(), e))
    })?;

    for record in csv_reader(file).records() {
        let record =
            record.map_err(|e| AppError::InvalidInput(format!("Malformed CSV row: {}", e)))?;

        if let Some(plan) = plan_row(&record) {
            sync_row(&accounts, &queues, plan)
                .await
                .map_err(AppError::ApiError)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_plan_skips_rows_without_email() {
        let row = record(&["Dupont", "Jean", "  ", "", "", "", ""]);
        assert!(plan_row(&row).is_none());
    }

    #[test]
    fn test_plan_directory_account_keeps_case_and_password_free() {
        let row = record(&["Dupont", "Jean", "Jean.Dupont@hcduge.ch", "", "", "secret", ""]);
        let plan = plan_row(&row).unwrap();
        assert_eq!(plan.email, "Jean.Dupont@hcduge.ch");
        assert_eq!(plan.password, PasswordPlan::None);
    }

    #[test]
    fn test_plan_external_account_is_lowercased() {
        let row = record(&["Dupont", "Jean", "Jean.Dupont@Example.ORG", "", "", "secret", ""]);
        let plan = plan_row(&row).unwrap();
        assert_eq!(plan.email, "jean.dupont@example.org");
        assert_eq!(plan.password, PasswordPlan::Provided("secret".to_string()));
    }

    #[test]
    fn test_plan_generates_password_when_missing() {
        let row = record(&["Dupont", "Jean", "jean@example.org", "", "", "  ", ""]);
        let plan = plan_row(&row).unwrap();
        match plan.password {
            PasswordPlan::Generated(ref p) => {
                assert_eq!(p.len(), GENERATED_PASSWORD_LEN);
                assert!(p.chars().all(|c| c.is_ascii_alphanumeric()));
            }
            other => panic!("expected generated password, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_trims_and_splits_queues() {
        let row = record(&[
            " Dupont ",
            " Jean ",
            "jean@example.org",
            " +41790000000 ",
            "",
            "pw",
            "\"Cardiologie\"; Urgences ",
        ]);
        let plan = plan_row(&row).unwrap();
        assert_eq!(plan.last_name, "Dupont");
        assert_eq!(plan.first_name, "Jean");
        assert_eq!(plan.auth_phone_number, "+41790000000");
        assert_eq!(plan.queue_names, vec!["Cardiologie", "Urgences"]);
    }

    #[test]
    fn test_csv_reader_accepts_short_rows() {
        let data = "Dupont,Jean,jean@example.org\n";
        let mut reader = csv_reader(data.as_bytes());
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        let plan = plan_row(&rows[0]).unwrap();
        assert_eq!(plan.email, "jean@example.org");
        assert!(plan.queue_names.is_empty());
    }
}
