//! CLI commands

pub mod delete;
pub mod list;
pub mod scan;
pub mod show;
