//! Use cases (application services)

pub mod build_api;
pub mod check_api;
pub mod export_api;
pub mod run_tasks;

#[cfg(test)]
pub(crate) mod fakes;
