// ==================== DIRECT DATABASE USER ADMIN ====================
// Create/list/delete/promote accounts straight in the `user` collection,
// for installations where portal admin access is not available.
// Arguments missing on the command line are prompted for.

use crate::config;
use crate::database::{self, MongoDb, NewUser};
use crate::utils::error::AppError;
use crate::utils::password::{generate_password, GENERATED_PASSWORD_LEN};
use std::io::{self, Write};

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| AppError::InvalidInput(format!("Cannot write prompt: {}", e)))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| AppError::InvalidInput(format!("Cannot read answer: {}", e)))?;

    Ok(answer.trim().to_string())
}

fn prompt_or(value: Option<String>, label: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v),
        None => prompt(label),
    }
}

fn prompt_role() -> Result<String, AppError> {
    loop {
        let role = prompt("Choose a role admin/doctor [doctor]: ")?;
        if role.is_empty() {
            return Ok("doctor".to_string());
        }
        if database::is_managed_role(&role) {
            return Ok(role);
        }
        println!("Sorry, role {} is not valid", role);
    }
}

fn resolve_role(role: Option<String>) -> Result<String, AppError> {
    match role {
        Some(role) if database::is_managed_role(&role) => Ok(role),
        Some(role) => Err(AppError::InvalidInput(format!(
            "role {} is not valid, use admin or doctor",
            role
        ))),
        None => prompt_role(),
    }
}

async fn connect() -> Result<MongoDb, AppError> {
    let uri = config::db_uri().map_err(AppError::ConfigError)?;
    MongoDb::connect(&uri).await.map_err(AppError::DatabaseError)
}

pub async fn create(
    email: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
    role: Option<String>,
) -> Result<(), AppError> {
    let email = prompt_or(email, "Enter email account: ")?;
    let first_name = prompt_or(firstname, "Enter firstname account: ")?;
    let last_name = prompt_or(lastname, "Enter lastname account: ")?;
    let role = resolve_role(role)?;

    if email.is_empty() {
        return Err(AppError::InvalidInput("email must not be empty".to_string()));
    }

    let password = generate_password(GENERATED_PASSWORD_LEN);
    println!("Generated password: {}", password);

    let db = connect().await?;
    let new = NewUser {
        email,
        first_name,
        last_name,
        role,
    };

    database::create_user(&db, &new, &password)
        .await
        .map_err(AppError::DatabaseError)
}

pub async fn list() -> Result<(), AppError> {
    let db = connect().await?;
    let users = database::list_users(&db).await.map_err(AppError::DatabaseError)?;

    println!("Email | Firstname | Lastname | role");
    for user in users {
        println!(
            "{} | {} | {} | {}",
            user.email, user.first_name, user.last_name, user.role
        );
    }

    Ok(())
}

pub async fn delete(email: Option<String>) -> Result<(), AppError> {
    let email = prompt_or(email, "Enter email account: ")?;

    let db = connect().await?;
    let deleted = database::delete_user(&db, &email)
        .await
        .map_err(AppError::DatabaseError)?;

    if deleted == 0 {
        println!("No user found with email {}", email);
    }

    Ok(())
}

pub async fn promote(email: Option<String>, role: Option<String>) -> Result<(), AppError> {
    let email = prompt_or(email, "Enter email account: ")?;
    let role = resolve_role(role)?;

    let db = connect().await?;
    let modified = database::promote_user(&db, &email, &role)
        .await
        .map_err(AppError::DatabaseError)?;

    if modified == 0 {
        println!("No user found with email {}", email);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_role_accepts_managed_roles() {
        assert_eq!(resolve_role(Some("admin".to_string())).unwrap(), "admin");
        assert_eq!(resolve_role(Some("doctor".to_string())).unwrap(), "doctor");
    }

    #[test]
    fn test_resolve_role_rejects_unknown_role() {
        let err = resolve_role(Some("patient".to_string())).unwrap_err();
        assert!(err.to_string().contains("patient"));
    }
}
