//! CSV output for a finished analysis. One file per record set, one row per
//! record, header row always written.

use super::analysis::CampaignAnalysis;
use super::summary::ProjectSummary;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const METRICS_FILE: &str = "detailed_project_metrics.csv";
pub const EFFICIENCY_FILE: &str = "volunteer_efficiency_metrics.csv";
pub const IMPACT_FILE: &str = "humanitarian_impact_estimates.csv";
pub const INSIGHTS_FILE: &str = "campaign_insights.csv";
pub const RECOMMENDATIONS_FILE: &str = "action_recommendations.csv";

const METRICS_HEADERS: [&str; 18] = [
    "project_id",
    "project_name",
    "organization",
    "priority",
    "status",
    "total_tasks",
    "mapped_tasks",
    "validated_tasks",
    "invalidated_tasks",
    "ready_tasks",
    "bad_imagery_tasks",
    "percent_mapped",
    "percent_validated",
    "active_mappers",
    "total_mappers",
    "created",
    "last_updated",
    "due_date",
];
const EFFICIENCY_HEADERS: [&str; 6] = [
    "total_contributors",
    "active_recent_mappers",
    "avg_tasks_per_contributor",
    "tasks_remaining",
    "validation_backlog",
    "validation_completion_rate",
];
const IMPACT_HEADERS: [&str; 3] = [
    "estimated_buildings_mapped",
    "estimated_population_covered",
    "estimated_road_km_mapped",
];
const INSIGHT_HEADERS: [&str; 3] = ["type", "insight", "metric"];
const RECOMMENDATION_HEADERS: [&str; 4] = ["priority", "area", "action", "target"];
const SUMMARY_HEADERS: [&str; 2] = ["metric", "value"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Paths written by a single export call, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportManifest {
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn write_analysis(&self, analysis: &CampaignAnalysis) -> Result<ExportManifest, ExportError> {
        self.ensure_output_dir()?;

        let files = vec![
            self.write_rows(METRICS_FILE, &METRICS_HEADERS, [&analysis.metrics])?,
            self.write_rows(EFFICIENCY_FILE, &EFFICIENCY_HEADERS, [&analysis.efficiency])?,
            self.write_rows(IMPACT_FILE, &IMPACT_HEADERS, [analysis.impact.to_row()])?,
            self.write_rows(INSIGHTS_FILE, &INSIGHT_HEADERS, &analysis.insights)?,
            self.write_rows(
                RECOMMENDATIONS_FILE,
                &RECOMMENDATION_HEADERS,
                &analysis.recommendations,
            )?,
        ];

        info!(
            output_dir = %self.output_dir.display(),
            files = files.len(),
            "wrote analysis exports"
        );
        Ok(ExportManifest { files })
    }

    pub fn write_summary(&self, summary: &ProjectSummary) -> Result<PathBuf, ExportError> {
        self.ensure_output_dir()?;
        let path = self.write_rows(&summary.file_name(), &SUMMARY_HEADERS, &summary.rows)?;
        info!(path = %path.display(), "wrote project summary");
        Ok(path)
    }

    fn ensure_output_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    fn write_rows<I, T>(
        &self,
        file_name: &str,
        headers: &[&str],
        rows: I,
    ) -> Result<PathBuf, ExportError>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let path = self.output_dir.join(file_name);
        let wrap = |source: csv::Error| ExportError::Write {
            path: path.clone(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(wrap)?;
        writer.write_record(headers).map_err(wrap)?;
        for row in rows {
            writer.serialize(row).map_err(wrap)?;
        }
        writer
            .flush()
            .map_err(|err| wrap(csv::Error::from(err)))?;

        Ok(path)
    }
}
