//! Admin session commands: login, logout, status.

use anyhow::Result;
use colored::Colorize;

use crate::config;
use crate::error::AuthError;
use crate::fs::auth::{self, SessionState};
use crate::fs::slots::StorageArea;

pub fn login(area: &StorageArea, username: &str, password: &str) -> Result<()> {
    let creds = config::load_credentials(area.root())?;

    if let Err(err) = auth::login(area, &creds, username, password) {
        if err.downcast_ref::<AuthError>() == Some(&AuthError::InvalidCredentials) {
            eprintln!("{} Invalid credentials. Please try again.", "✗".red());
            std::process::exit(1);
        }
        return Err(err);
    }

    println!("{} Logged in as {}", "✓".green(), username.cyan());
    Ok(())
}

pub fn logout(area: &StorageArea) -> Result<()> {
    auth::logout(area)?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

pub fn status(area: &StorageArea) -> Result<()> {
    match SessionState::current(area) {
        SessionState::LoggedIn => println!("{} Admin session: logged in", "✓".green()),
        SessionState::LoggedOut => println!("{} Admin session: logged out", "ℹ".blue()),
    }
    Ok(())
}
