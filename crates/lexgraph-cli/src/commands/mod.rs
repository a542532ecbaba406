//! CLI command implementations.

pub mod init;
pub mod query;
pub mod stats;
