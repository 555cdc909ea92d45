use super::metrics::{percentage, round2, ProjectMetrics};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerEfficiency {
    pub total_contributors: u32,
    pub active_recent_mappers: u32,
    pub avg_tasks_per_contributor: f64,
    pub tasks_remaining: usize,
    pub validation_backlog: usize,
    pub validation_completion_rate: f64,
}

impl VolunteerEfficiency {
    /// The contributor list can lag behind the active-mapper signal, so the
    /// larger of the two counts is used as the contributor base.
    pub fn from_metrics(metrics: &ProjectMetrics) -> Self {
        let total_contributors = metrics.total_mappers.max(metrics.active_mappers);
        let avg_tasks_per_contributor = if total_contributors == 0 {
            0.0
        } else {
            round2(metrics.mapped_tasks as f64 / f64::from(total_contributors))
        };

        Self {
            total_contributors,
            active_recent_mappers: metrics.active_mappers,
            avg_tasks_per_contributor,
            tasks_remaining: metrics.tasks_remaining(),
            validation_backlog: metrics.validation_gap(),
            validation_completion_rate: percentage(metrics.validated_tasks, metrics.mapped_tasks),
        }
    }
}
