//! API snapshot tasks
//!
//! The snapshot workflow has a single producer and two consumers:
//!
//! ```text
//! buildApi ──> <build>/tmp/api/<name>.api ──┬──> exportApi ──> <project>/public.api
//!                                           └──> checkApi  <── <root>/api/<version>.api
//! ```
//!
//! - [`settings::SnapshotSettings`] — the overridable baseline location
//! - [`task`] — descriptors for each task
//! - [`plugin::ApiSnapshotPlugin`] — registers the descriptors and orders them
//! - [`diff::SnapshotDiff`] — line-level comparison of two snapshots

pub mod diff;
pub mod plugin;
pub mod settings;
pub mod task;
