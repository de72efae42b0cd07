//! Run tasks use case
//!
//! Resolves the requested task names into a dependency-first plan and runs
//! each task at most once. The first failure stops the plan; the remaining
//! tasks are reported as skipped.

use crate::ports::api_extractor::ApiExtractor;
use crate::ports::file_copier::FileCopier;
use crate::ports::progress::{NoProgress, TaskProgressNotifier};
use crate::ports::snapshot_reader::SnapshotReader;
use crate::use_cases::build_api::{BuildApiError, BuildApiOutput, BuildApiUseCase};
use crate::use_cases::check_api::{CheckApiError, CheckApiOutput, CheckApiUseCase};
use crate::use_cases::export_api::{ExportApiError, ExportApiOutput, ExportApiUseCase};
use apisnap_domain::{ApiTasks, TaskName};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a task run, tagged with the failing task.
#[derive(Error, Debug)]
pub enum RunTasksError {
    #[error("buildApi failed: {0}")]
    Build(#[from] BuildApiError),

    #[error("exportApi failed: {0}")]
    Export(#[from] ExportApiError),

    #[error("checkApi failed: {0}")]
    Check(#[from] CheckApiError),
}

impl RunTasksError {
    pub fn task(&self) -> TaskName {
        match self {
            RunTasksError::Build(_) => TaskName::BuildApi,
            RunTasksError::Export(_) => TaskName::ExportApi,
            RunTasksError::Check(_) => TaskName::CheckApi,
        }
    }
}

/// Outputs of the tasks that ran.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunTasksOutput {
    /// Tasks in the order they ran.
    pub executed: Vec<TaskName>,
    pub build: Option<BuildApiOutput>,
    pub export: Option<ExportApiOutput>,
    pub check: Option<CheckApiOutput>,
}

/// Use case for running snapshot tasks in dependency order.
pub struct RunTasksUseCase {
    build: BuildApiUseCase,
    export: ExportApiUseCase,
    check: CheckApiUseCase,
}

impl RunTasksUseCase {
    pub fn new(
        extractor: Arc<dyn ApiExtractor>,
        copier: Arc<dyn FileCopier>,
        reader: Arc<dyn SnapshotReader>,
    ) -> Self {
        Self {
            build: BuildApiUseCase::new(extractor),
            export: ExportApiUseCase::new(copier),
            check: CheckApiUseCase::new(reader),
        }
    }

    /// Runs the tasks without progress reporting.
    pub async fn execute(
        &self,
        tasks: &ApiTasks,
        requested: &[TaskName],
    ) -> Result<RunTasksOutput, RunTasksError> {
        self.execute_with_progress(tasks, requested, &NoProgress)
            .await
    }

    /// Runs the tasks with progress notifications.
    ///
    /// # Errors
    ///
    /// Returns the first task failure. Tasks after it in the plan do not run.
    pub async fn execute_with_progress(
        &self,
        tasks: &ApiTasks,
        requested: &[TaskName],
        progress: &dyn TaskProgressNotifier,
    ) -> Result<RunTasksOutput, RunTasksError> {
        let plan = tasks.execution_order(requested);
        debug!(
            "Execution plan: {}",
            plan.iter()
                .map(TaskName::as_str)
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        progress.on_plan(&plan);

        let mut output = RunTasksOutput::default();
        for (index, &name) in plan.iter().enumerate() {
            progress.on_task_start(name);
            let result = self.run_one(tasks, name, &mut output).await;
            progress.on_task_complete(name, result.is_ok());

            if let Err(e) = result {
                warn!("{} failed: {}", name, e);
                for &skipped in &plan[index + 1..] {
                    progress.on_task_skipped(skipped);
                }
                return Err(e);
            }
            output.executed.push(name);
        }

        Ok(output)
    }

    async fn run_one(
        &self,
        tasks: &ApiTasks,
        name: TaskName,
        output: &mut RunTasksOutput,
    ) -> Result<(), RunTasksError> {
        match name {
            TaskName::BuildApi => {
                output.build = Some(self.build.execute(tasks.build()).await?);
            }
            TaskName::ExportApi => {
                output.export = Some(self.export.execute(tasks.export()).await?);
            }
            TaskName::CheckApi => {
                output.check = Some(self.check.execute(tasks.check()).await?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::fakes::{FakeExtractor, MemoryFs};
    use apisnap_domain::{ApiSnapshotPlugin, Project, SnapshotSettings};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl TaskProgressNotifier for RecordingProgress {
        fn on_task_start(&self, task: TaskName) {
            self.events.lock().unwrap().push(format!("start {task}"));
        }

        fn on_task_complete(&self, task: TaskName, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {task} {success}"));
        }

        fn on_task_skipped(&self, task: TaskName) {
            self.events.lock().unwrap().push(format!("skip {task}"));
        }
    }

    fn tasks() -> ApiTasks {
        let project = Project::new("core", "1.0.0", "/repo")
            .unwrap()
            .with_classes_dirs(["classes"]);
        ApiSnapshotPlugin::apply(&project, SnapshotSettings::for_project(&project))
    }

    fn use_case(fs: &Arc<MemoryFs>, extractor: Arc<FakeExtractor>) -> RunTasksUseCase {
        RunTasksUseCase::new(extractor, fs.clone(), fs.clone())
    }

    #[tokio::test]
    async fn test_export_builds_first() {
        let fs = MemoryFs::new();
        let extractor = FakeExtractor::producing(fs.clone(), "class A\n");
        let tasks = tasks();

        let output = use_case(&fs, extractor.clone())
            .execute(&tasks, &[TaskName::ExportApi])
            .await
            .unwrap();

        assert_eq!(output.executed, vec![TaskName::BuildApi, TaskName::ExportApi]);
        assert_eq!(fs.get("/repo/public.api").as_deref(), Some("class A\n"));
        assert_eq!(
            output.export.unwrap().source,
            output.build.unwrap().api_file
        );
        assert_eq!(extractor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_build_runs_once_for_export_and_check() {
        let fs = MemoryFs::new();
        fs.write("/repo/api/1.0.0.api", "class A\n");
        let extractor = FakeExtractor::producing(fs.clone(), "class A\n");
        let tasks = tasks();

        let output = use_case(&fs, extractor.clone())
            .execute(&tasks, &[TaskName::ExportApi, TaskName::CheckApi])
            .await
            .unwrap();

        assert_eq!(extractor.calls().len(), 1);
        assert!(output.check.unwrap().is_compatible());
    }

    #[tokio::test]
    async fn test_build_failure_stops_plan() {
        let fs = MemoryFs::new();
        fs.write("/repo/public.api", "released\n");
        let extractor = FakeExtractor::failing(fs.clone());
        let progress = RecordingProgress::default();
        let tasks = tasks();

        let err = use_case(&fs, extractor)
            .execute_with_progress(&tasks, &[TaskName::ExportApi], &progress)
            .await
            .unwrap_err();

        assert_eq!(err.task(), TaskName::BuildApi);
        assert_eq!(fs.get("/repo/public.api").as_deref(), Some("released\n"));
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start buildApi".to_string(),
                "done buildApi false".to_string(),
                "skip exportApi".to_string(),
            ]
        );
    }
}
