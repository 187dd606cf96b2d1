pub mod check_queues;
pub mod monitor;
pub mod purge_messages;
pub mod remove_queue;
pub mod sync_users;
pub mod user_admin;
