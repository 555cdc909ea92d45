use super::document::{ProjectDocument, TaskStatus};
use super::tally::StatusTally;
use serde::Serialize;

/// Point-in-time progress figures for a project. Field order matches the
/// exported CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMetrics {
    pub project_id: Option<u64>,
    pub project_name: String,
    pub organization: String,
    pub priority: String,
    pub status: String,
    pub total_tasks: usize,
    /// Mapped plus validated; a validated task has been mapped first.
    pub mapped_tasks: usize,
    pub validated_tasks: usize,
    pub invalidated_tasks: usize,
    pub ready_tasks: usize,
    pub bad_imagery_tasks: usize,
    pub percent_mapped: f64,
    pub percent_validated: f64,
    pub active_mappers: u32,
    /// Size of the contributor list, independent of `active_mappers`.
    pub total_mappers: u32,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    pub due_date: Option<String>,
}

impl ProjectMetrics {
    /// Tallies the document's tasks and derives metrics from the result.
    pub fn from_document(document: &ProjectDocument) -> Self {
        let tally: StatusTally = document.task_statuses().collect();
        Self::calculate(&tally, document)
    }

    pub fn calculate(tally: &StatusTally, document: &ProjectDocument) -> Self {
        let total_tasks = tally.total();
        let validated_tasks = tally.count(TaskStatus::Validated);
        let mapped_tasks = tally.count(TaskStatus::Mapped) + validated_tasks;

        Self {
            project_id: document.project_id,
            project_name: document.project_name().to_string(),
            organization: document.organisation_name.clone().unwrap_or_default(),
            priority: document.project_priority.clone().unwrap_or_default(),
            status: document.status.clone().unwrap_or_default(),
            total_tasks,
            mapped_tasks,
            validated_tasks,
            invalidated_tasks: tally.count(TaskStatus::Invalidated),
            ready_tasks: tally.count(TaskStatus::Ready),
            bad_imagery_tasks: tally.count(TaskStatus::BadImagery),
            percent_mapped: percentage(mapped_tasks, total_tasks),
            percent_validated: percentage(validated_tasks, total_tasks),
            active_mappers: document.active_mappers,
            total_mappers: document.contributor_count(),
            created: document.created.clone(),
            last_updated: document.last_updated.clone(),
            due_date: document.due_date.clone(),
        }
    }

    pub fn validation_gap(&self) -> usize {
        self.mapped_tasks.saturating_sub(self.validated_tasks)
    }

    pub fn tasks_remaining(&self) -> usize {
        self.total_tasks.saturating_sub(self.mapped_tasks)
    }
}

/// `part / whole * 100` rounded to two decimals, 0 for an empty whole.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

/// Rounds half away from zero at the second decimal.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a rounded percentage with at least one decimal: `96.0`, `33.33`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
