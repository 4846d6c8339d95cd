// bcg-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Where inventory rows come from and where publish tables go.
pub mod ports;

// 2. Domain
// Cells, asset index, publish rules, config records.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Calamine reader, xlsx writer, YAML config loader, diagnostics sinks.
pub mod infrastructure;

// 4. Application (Use Cases)
// The repository transformer pipeline.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::BcgError;
