//! Progress reporting while a request is with the agents

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use taskdesk_application::DispatchProgress;
use taskdesk_domain::RequestType;

/// Spinner shown while waiting for the remote agent
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn action_name(request_type: RequestType) -> &'static str {
        match request_type {
            RequestType::SyncSession => "Syncing",
            RequestType::ScanTasks => "Scanning",
            RequestType::UpdateTask => "Updating",
            RequestType::GenerateReport => "Reporting",
            RequestType::ReviewMeeting => "Reviewing",
            RequestType::GenerateAgenda => "Drafting agenda",
            RequestType::ArchiveTasks => "Archiving",
            RequestType::HealthCheck => "Checking",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchProgress for ProgressReporter {
    fn on_dispatch_start(&self, request_type: RequestType, agent_name: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::action_name(request_type));
        pb.set_message(format!("waiting for {}", agent_name));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_dispatch_complete(&self, _request_type: RequestType, success: bool, elapsed_ms: u64) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) else {
            return;
        };
        let status = if success {
            format!("{} done in {} ms", "v".green(), elapsed_ms)
        } else {
            format!("{} failed after {} ms", "x".red(), elapsed_ms)
        };
        pb.finish_with_message(status);
    }
}

/// Plain-text progress lines, for terminals without spinners
pub struct SimpleProgress;

impl DispatchProgress for SimpleProgress {
    fn on_dispatch_start(&self, request_type: RequestType, agent_name: &str) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::action_name(request_type).bold(),
            agent_name
        );
    }

    fn on_dispatch_complete(&self, _request_type: RequestType, success: bool, elapsed_ms: u64) {
        if success {
            eprintln!("  {} {} ms", "v".green(), elapsed_ms);
        } else {
            eprintln!("  {} failed after {} ms", "x".red(), elapsed_ms);
        }
    }
}
