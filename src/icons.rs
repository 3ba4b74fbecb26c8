//! Front-end for the `generate-icons` binary.

use crate::config::IconsConfig;
use pwa_icons::{generate, GenerationReport, IconJob, Progress};
use std::process::ExitCode;

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every size was written.
    Complete,
    /// The source loaded but at least one size failed.
    Partial,
    /// Nothing could be attempted.
    Aborted,
}

impl RunOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Complete => ExitCode::SUCCESS,
            Self::Aborted => ExitCode::from(1),
            Self::Partial => ExitCode::from(2),
        }
    }
}

/// Build the generator job described by `config`.
pub fn job_from_config(config: &IconsConfig) -> IconJob {
    let job = if config.builtin {
        IconJob::builtin(&config.dir)
    } else {
        IconJob::new(config.source_path(), &config.dir)
    };
    job.with_sizes(config.sizes.clone())
}

/// Console line for a single size.
pub fn progress_line(progress: &Progress<'_>) -> String {
    match progress {
        Progress::Generated(icon) => {
            format!("✓ Generated {}", pwa_icons::output_file_name(icon.size))
        }
        Progress::Failed { size, error } => {
            format!("✗ Failed to generate {size}x{size}: {error}")
        }
    }
}

/// Closing summary for a finished run.
pub fn summary(report: &GenerationReport, job: &IconJob) -> String {
    if report.is_complete() {
        format!(
            "🎉 All {} icons generated successfully in {}",
            report.generated.len(),
            job.out_dir.display()
        )
    } else {
        let failed: Vec<String> = report.failed.iter().map(|(s, _)| s.to_string()).collect();
        format!(
            "⚠ Generated {} of {} icons in {} (failed sizes: {})",
            report.generated.len(),
            report.attempted(),
            job.out_dir.display(),
            failed.join(", ")
        )
    }
}

/// Generate the icons described by `config`, reporting progress on stdout.
pub fn run(config: &IconsConfig) -> RunOutcome {
    let job = job_from_config(config);

    println!("🎨 Generating PWA icons from {}...\n", job.source);

    let report = match generate(&job, |p| match p {
        Progress::Generated(_) => println!("{}", progress_line(&p)),
        Progress::Failed { .. } => eprintln!("{}", progress_line(&p)),
    }) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!("Icon generation aborted: {:?}", e);
            if e.is_fatal() {
                eprintln!("✗ {}", e);
                eprintln!("  Pass --source FILE, or --builtin to draw the default knight icon");
            } else {
                eprintln!("✗ Cannot prepare output directory: {}", e);
            }
            return RunOutcome::Aborted;
        }
    };

    println!("\n{}", summary(&report, &job));

    if report.is_complete() {
        RunOutcome::Complete
    } else {
        RunOutcome::Partial
    }
}
