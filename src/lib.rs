//! 学歴判定機 CLI

pub mod catalog_loader;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod report;
