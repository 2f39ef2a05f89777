pub mod config;
pub mod context;
pub mod files;
pub mod outcome;
pub mod runner;
