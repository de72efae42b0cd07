//! Console output formatter for task results

use apisnap_application::{CheckApiOutput, RunTasksOutput};
use apisnap_domain::{ApiTasks, RequestOptions, TaskName};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Formats task results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the outputs of a task run
    pub fn format_run(output: &RunTasksOutput) -> String {
        let mut out = String::new();

        for task in &output.executed {
            match task {
                TaskName::BuildApi => {
                    if let Some(build) = &output.build {
                        out.push_str(&format!(
                            "{} {}\n",
                            Self::label(*task),
                            build.api_file.display()
                        ));
                    }
                }
                TaskName::ExportApi => {
                    if let Some(export) = &output.export {
                        out.push_str(&format!(
                            "{} {} -> {} ({} bytes)\n",
                            Self::label(*task),
                            export.source.display(),
                            export.dest.display(),
                            export.bytes
                        ));
                    }
                }
                TaskName::CheckApi => {
                    if let Some(check) = &output.check {
                        out.push_str(&Self::format_check(check));
                    }
                }
            }
        }

        out
    }

    /// Format a baseline comparison
    pub fn format_check(check: &CheckApiOutput) -> String {
        let label = Self::label(TaskName::CheckApi);
        if check.is_compatible() {
            return format!(
                "{} {} {}\n",
                label,
                "API matches".green().bold(),
                check.baseline.display()
            );
        }

        let mut out = format!(
            "{} {} {} ({} removed, {} added)\n",
            label,
            "API differs from".yellow().bold(),
            check.baseline.display(),
            check.diff.removed.len(),
            check.diff.added.len()
        );
        for line in &check.diff.removed {
            out.push_str(&format!("{}\n", format!("- {line}").red()));
        }
        for line in &check.diff.added {
            out.push_str(&format!("{}\n", format!("+ {line}").green()));
        }
        out
    }

    /// Format the registered tasks in execution order
    pub fn format_tasks(tasks: &ApiTasks) -> String {
        let mut out = format!("{}\n", "Registered tasks".cyan().bold());

        for name in tasks.execution_order(&ApiTasks::NAMES) {
            out.push_str(&format!("\n{} - {}\n", name.as_str().bold(), name.description()));

            let deps = ApiTasks::dependencies(name);
            if !deps.is_empty() {
                let deps: Vec<&str> = deps.iter().map(TaskName::as_str).collect();
                out.push_str(&format!("  depends on: {}\n", deps.join(", ")));
            }

            match name {
                TaskName::BuildApi => {
                    let build = tasks.build();
                    out.push_str(&format!(
                        "  classes:    {}\n",
                        Self::path_list(&build.input_classes_dirs)
                    ));
                    out.push_str(&format!(
                        "  output:     {}\n",
                        build.output_file().display()
                    ));
                }
                TaskName::ExportApi => {
                    out.push_str(&format!("  source:     {}\n", tasks.export().source().display()));
                    out.push_str(&format!("  dest:       {}\n", tasks.export().dest().display()));
                }
                TaskName::CheckApi => {
                    out.push_str(&format!("  snapshot:   {}\n", tasks.check().actual().display()));
                    out.push_str(&format!("  baseline:   {}\n", tasks.check().baseline().display()));
                }
            }
        }

        out
    }

    /// Format effective request options
    pub fn format_request_options(options: &RequestOptions) -> String {
        let timeout = if options.is_unlimited() {
            "unlimited".to_string()
        } else {
            format!("{} ms", options.timeout().as_millis())
        };
        format!(
            "{}\n  timeout:               {}\n  api_version:           {}\n  disable_auto_function: {}\n",
            "Request options".cyan().bold(),
            timeout,
            options.api_version(),
            options.disable_auto_function()
        )
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn label(task: TaskName) -> String {
        format!("{:<10}", task.as_str()).cyan().bold().to_string()
    }

    fn path_list(paths: &[PathBuf]) -> String {
        if paths.is_empty() {
            return "(none)".to_string();
        }
        paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
