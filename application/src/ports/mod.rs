//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod api_extractor;
pub mod file_copier;
pub mod progress;
pub mod snapshot_reader;
