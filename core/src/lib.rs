pub mod colorize;
pub mod config;
pub mod error;
pub mod runner;
