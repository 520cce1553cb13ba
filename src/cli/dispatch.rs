use anyhow::Result;

use crate::cli::types::{AdminCommands, Cli, Commands};
use crate::commands::{admin, delete, edit, enroll, export, list};
use crate::config;
use crate::fs::slots::StorageArea;
use crate::intake::EnrollmentForm;

pub fn dispatch(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir)?;
    let area = StorageArea::new(data_dir);

    match cli.command {
        Commands::Enroll {
            full_name,
            student_id,
            email,
            year,
            club,
            experience,
            days,
        } => enroll::execute(
            &area,
            EnrollmentForm {
                full_name,
                student_id,
                email,
                year,
                club,
                experience,
                days,
            },
        ),
        Commands::Admin { command } => match command {
            AdminCommands::Login { username, password } => {
                admin::login(&area, &username, &password)
            }
            AdminCommands::Logout => admin::logout(&area),
            AdminCommands::Status => admin::status(&area),
            AdminCommands::List { search, club } => {
                list::execute(&area, &search, club.as_deref())
            }
            AdminCommands::Edit {
                enrollment_id,
                full_name,
                student_id,
                email,
                club,
                year,
            } => edit::execute(
                &area,
                &enrollment_id,
                edit::EditOverrides {
                    full_name,
                    student_id,
                    email,
                    club,
                    year,
                },
            ),
            AdminCommands::Delete { enrollment_id, yes } => {
                delete::execute(&area, &enrollment_id, yes)
            }
            AdminCommands::Export { output } => export::execute(&area, output),
        },
    }
}
