//! Progress reporting for snapshot tasks

use apisnap_application::TaskProgressNotifier;
use apisnap_domain::TaskName;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per running task
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskProgressNotifier for ProgressReporter {
    fn on_task_start(&self, task: TaskName) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(task.as_str());
        pb.set_message("running...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_task_complete(&self, _task: TaskName, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }

    fn on_task_skipped(&self, task: TaskName) {
        eprintln!("  {} {} (skipped)", "-".dimmed(), task.as_str().dimmed());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl TaskProgressNotifier for SimpleProgress {
    fn on_plan(&self, tasks: &[TaskName]) {
        let names: Vec<&str> = tasks.iter().map(TaskName::as_str).collect();
        eprintln!("{} {}", "->".cyan(), names.join(" -> ").bold());
    }

    fn on_task_complete(&self, task: TaskName, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), task);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), task);
        }
    }

    fn on_task_skipped(&self, task: TaskName) {
        eprintln!("  {} {} (skipped)", "-".dimmed(), task);
    }
}
