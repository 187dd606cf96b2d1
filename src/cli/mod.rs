//! Command-line interface for hcw-admin.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hcw-admin - administrative toolbox for the HCW@Home platform
///
/// Talks to the portal REST API, the platform MongoDB and the
/// videoconferencing backends. Credentials are read from the environment;
/// /etc/hcw-athome/hcw-athome.conf is loaded first, then a local .env.
#[derive(Debug, Parser)]
#[command(name = "hcw-admin")]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bulk-create or update doctor accounts from a CSV file
    ///
    /// Columns: lastname, firstname, email, authPhoneNumber, phoneNumber,
    /// password, queues (`;`-separated queue names). Existing accounts are
    /// updated, new ones created; accounts are never deleted.
    SyncUsers {
        /// Path to the CSV file
        csv: PathBuf,
    },

    /// Report doctors assigned to more than one queue
    CheckQueues,

    /// Remove a queue assignment from a user
    RemoveQueue {
        /// Email of the user
        email: String,
        /// Name of the queue
        queue: String,
    },

    /// Manage accounts directly in the platform database
    #[command(subcommand)]
    User(UserCommand),

    /// Delete old documents from the message collection
    PurgeMessages {
        /// Age threshold in days
        #[arg(long, value_name = "DAYS")]
        older_than: i64,

        /// Only report what would be deleted
        #[arg(long)]
        dry_run: bool,
    },

    /// Poll a videoconferencing backend for active sessions (Nagios check)
    Check {
        /// Backend to poll
        #[arg(value_enum)]
        backend: CheckTarget,
    },
}

/// Direct-database account administration.
/// Missing arguments are prompted for interactively.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account with a generated password
    Create {
        /// Email of the account
        email: Option<String>,
        /// First name
        firstname: Option<String>,
        /// Last name
        lastname: Option<String>,
        /// Role, admin or doctor
        role: Option<String>,
    },

    /// List admin and doctor accounts
    List,

    /// Delete an account by email
    Delete {
        /// Email of the account
        email: Option<String>,
    },

    /// Change the role of an account
    Promote {
        /// Email of the account
        email: Option<String>,
        /// Role, admin or doctor
        role: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckTarget {
    Openvidu,
    Mediasoup,
}
