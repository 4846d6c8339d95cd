// bcg-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fs;
