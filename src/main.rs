mod cli;
mod commands;
mod config;
mod database;
mod models;
mod services;
mod utils;

use clap::Parser;
use cli::{Cli, Command, UserCommand};
use utils::error::AppError;

#[tokio::main]
async fn main() {
    // Deployment config first, local .env as fallback
    dotenv::from_path(config::DEFAULT_CONFIG_PATH).ok();
    dotenv::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::SyncUsers { csv } => commands::sync_users::run(&csv).await,
        Command::CheckQueues => commands::check_queues::run().await,
        Command::RemoveQueue { email, queue } => commands::remove_queue::run(&email, &queue).await,
        Command::User(command) => match command {
            UserCommand::Create {
                email,
                firstname,
                lastname,
                role,
            } => commands::user_admin::create(email, firstname, lastname, role).await,
            UserCommand::List => commands::user_admin::list().await,
            UserCommand::Delete { email } => commands::user_admin::delete(email).await,
            UserCommand::Promote { email, role } => commands::user_admin::promote(email, role).await,
        },
        Command::PurgeMessages {
            older_than,
            dry_run,
        } => commands::purge_messages::run(older_than, dry_run).await,
        Command::Check { backend } => commands::monitor::run(backend).await,
    }
}
