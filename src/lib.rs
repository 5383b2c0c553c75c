pub mod cli;
pub mod commands;
pub mod inspector;
pub mod utils;
