use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Club enrollment manager", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Directory holding enrollment data (defaults to the per-user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a club enrollment application
    Enroll {
        /// Student's full name
        #[arg(long)]
        full_name: String,

        /// Student ID (at least 5 characters, letters and digits only)
        #[arg(long)]
        student_id: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Class year: freshman, sophomore, junior, or senior
        #[arg(long)]
        year: String,

        /// Club to enroll in (e.g. robotics, chess, art)
        #[arg(long)]
        club: String,

        /// Prior experience (optional free text)
        #[arg(long, default_value = "")]
        experience: String,

        /// Preferred meeting days, comma-separated (e.g. monday,wednesday)
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,
    },

    /// Admin dashboard (login required)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in to the dashboard
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log out of the dashboard
    Logout,

    /// Show the current session state
    Status,

    /// List enrollments with stats, search, and club filter
    List {
        /// Case-insensitive search against name or student ID
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show enrollments for this club (exact match)
        #[arg(short, long)]
        club: Option<String>,
    },

    /// Edit an enrollment in place (its ID and enrollment date never change)
    Edit {
        /// Enrollment ID (as shown by 'admin list')
        enrollment_id: String,

        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        student_id: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        club: Option<String>,

        /// freshman, sophomore, junior, or senior
        #[arg(long)]
        year: Option<String>,
    },

    /// Delete an enrollment
    Delete {
        /// Enrollment ID (as shown by 'admin list')
        enrollment_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all enrollments to CSV
    Export {
        /// Output path (defaults to club_enrollments_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
