//! Snapshot task registration
//!
//! [`ApiSnapshotPlugin::apply`] registers the three snapshot tasks for a
//! project once, wiring consumers to the build task's declared output.
//! [`ApiTasks::execution_order`] turns a request into a dependency-first
//! plan in which every task appears at most once.

use crate::project::Project;
use crate::snapshot::settings::SnapshotSettings;
use crate::snapshot::task::{BuildApiTask, CheckApiTask, ExportApiTask, TaskName};

/// Registers the snapshot tasks for a project.
pub struct ApiSnapshotPlugin;

impl ApiSnapshotPlugin {
    pub fn apply(project: &Project, settings: SnapshotSettings) -> ApiTasks {
        let build = BuildApiTask::for_project(project);
        let export = ExportApiTask::from_build(&build, project);
        let check = CheckApiTask::from_build(&build, &settings);
        ApiTasks {
            settings,
            build,
            export,
            check,
        }
    }
}

/// The registered snapshot tasks of one project.
#[derive(Debug, Clone)]
pub struct ApiTasks {
    settings: SnapshotSettings,
    build: BuildApiTask,
    export: ExportApiTask,
    check: CheckApiTask,
}

impl ApiTasks {
    /// All task names in registration order.
    pub const NAMES: [TaskName; 3] = [TaskName::BuildApi, TaskName::ExportApi, TaskName::CheckApi];

    pub fn settings(&self) -> &SnapshotSettings {
        &self.settings
    }

    pub fn build(&self) -> &BuildApiTask {
        &self.build
    }

    pub fn export(&self) -> &ExportApiTask {
        &self.export
    }

    pub fn check(&self) -> &CheckApiTask {
        &self.check
    }

    /// Tasks that must complete before `name` may start.
    pub fn dependencies(name: TaskName) -> &'static [TaskName] {
        match name {
            TaskName::BuildApi => &[],
            TaskName::ExportApi | TaskName::CheckApi => &[TaskName::BuildApi],
        }
    }

    /// Orders `requested` so producers run before their consumers.
    ///
    /// Dependencies not in `requested` are added; duplicates are dropped.
    pub fn execution_order(&self, requested: &[TaskName]) -> Vec<TaskName> {
        let mut order = Vec::new();
        for name in requested {
            Self::visit(*name, &mut order);
        }
        order
    }

    fn visit(name: TaskName, order: &mut Vec<TaskName>) {
        if order.contains(&name) {
            return;
        }
        for dep in Self::dependencies(name) {
            Self::visit(*dep, order);
        }
        order.push(name);
    }
}
