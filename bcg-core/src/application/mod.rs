// bcg-core/src/application/mod.rs

pub mod transformer;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use bcg_core::application::{RepositoryTransformer, RunReport};`

pub use transformer::{RepositoryTransformer, RunReport};
