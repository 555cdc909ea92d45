mod analysis;
pub mod document;
mod efficiency;
pub mod export;
mod impact;
pub mod insights;
mod metrics;
pub mod recommendations;
mod summary;
mod tally;

#[cfg(test)]
mod tests;

pub use analysis::{CampaignAnalysis, CampaignAnalyzer};
pub use document::{ProjectDocument, ProjectDocumentError, TaskStatus};
pub use efficiency::VolunteerEfficiency;
pub use export::{ExportError, ExportManifest, ReportExporter};
pub use impact::{HumanitarianImpact, ImpactConfig, ImpactEstimateRow, ImpactEstimator};
pub use insights::{Insight, InsightGenerator, InsightKind};
pub use metrics::{format_percent, ProjectMetrics};
pub use recommendations::{Recommendation, RecommendationGenerator, RecommendationPriority};
pub use summary::{ProjectSummary, SummaryRow};
pub use tally::StatusTally;
