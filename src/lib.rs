pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fs;
pub mod intake;
pub mod models;
