use super::document::ProjectDocument;
use super::metrics::ProjectMetrics;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub value: String,
}

/// Flat key/value digest of a project for sharing outside the full report.
///
/// Counts come from the computed [`ProjectMetrics`], so `mapped_tasks` is
/// MAPPED plus VALIDATED tasks, the same figure the metrics export carries.
/// The percent rows carry what the export itself reports, which can drift
/// from the task geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project_id: Option<u64>,
    pub rows: Vec<SummaryRow>,
}

impl ProjectSummary {
    pub fn from_document(document: &ProjectDocument, metrics: &ProjectMetrics) -> Self {
        let row = |metric: &'static str, value: String| SummaryRow { metric, value };

        let rows = vec![
            row("project_id", optional(metrics.project_id)),
            row("title", metrics.project_name.clone()),
            row("organisation", metrics.organization.clone()),
            row("status", metrics.status.clone()),
            row("priority", metrics.priority.clone()),
            row("total_tasks", metrics.total_tasks.to_string()),
            row("mapped_tasks", metrics.mapped_tasks.to_string()),
            row("validated_tasks", metrics.validated_tasks.to_string()),
            row("invalidated_tasks", metrics.invalidated_tasks.to_string()),
            row("percent_mapped", optional(document.percent_mapped)),
            row("percent_validated", optional(document.percent_validated)),
            row("percent_bad_imagery", optional(document.percent_bad_imagery)),
            row("active_mappers", metrics.active_mappers.to_string()),
            row("last_updated", metrics.last_updated.clone().unwrap_or_default()),
            row("due_date", metrics.due_date.clone().unwrap_or_default()),
            row("campaigns", document.campaign_names().join(";")),
        ];

        Self {
            project_id: metrics.project_id,
            rows,
        }
    }

    pub fn file_name(&self) -> String {
        match self.project_id {
            Some(id) => format!("project_{id}_summary.csv"),
            None => "project_summary.csv".to_string(),
        }
    }

    pub fn value(&self, metric: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value.as_str())
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
