//! Parking garage CLI: argument parsing, interactive menu and rendering

pub mod cli;
pub mod commands;
pub mod output;
pub mod shell;
