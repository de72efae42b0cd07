//! Progress notification port
//!
//! Defines the interface for reporting progress while snapshot tasks run.

use apisnap_domain::TaskName;

/// Callback for progress updates during task execution
///
/// Implementations live in the presentation layer. All methods have empty
/// default implementations.
pub trait TaskProgressNotifier: Send + Sync {
    /// Called once with the resolved execution order
    fn on_plan(&self, _tasks: &[TaskName]) {}

    /// Called when a task starts
    fn on_task_start(&self, _task: TaskName) {}

    /// Called when a task finishes
    fn on_task_complete(&self, _task: TaskName, _success: bool) {}

    /// Called for each task that did not run because an earlier one failed
    fn on_task_skipped(&self, _task: TaskName) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TaskProgressNotifier for NoProgress {}
