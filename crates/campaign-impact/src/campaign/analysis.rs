use super::document::ProjectDocument;
use super::efficiency::VolunteerEfficiency;
use super::impact::{HumanitarianImpact, ImpactConfig, ImpactEstimator};
use super::insights::{Insight, InsightGenerator};
use super::metrics::ProjectMetrics;
use super::recommendations::{Recommendation, RecommendationGenerator};
use super::tally::StatusTally;
use serde::Serialize;
use tracing::debug;

/// Everything derived from one project snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignAnalysis {
    pub metrics: ProjectMetrics,
    pub impact: HumanitarianImpact,
    pub efficiency: VolunteerEfficiency,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
}

/// Runs tally, metrics, estimates, and both rule tables in a single pass.
#[derive(Debug, Clone, Default)]
pub struct CampaignAnalyzer {
    estimator: ImpactEstimator,
    insights: InsightGenerator,
    recommendations: RecommendationGenerator,
}

impl CampaignAnalyzer {
    pub fn new(
        estimator: ImpactEstimator,
        insights: InsightGenerator,
        recommendations: RecommendationGenerator,
    ) -> Self {
        Self {
            estimator,
            insights,
            recommendations,
        }
    }

    /// Standard rule tables with the given impact multipliers.
    pub fn with_impact_config(config: ImpactConfig) -> Self {
        Self {
            estimator: ImpactEstimator::new(config),
            ..Self::default()
        }
    }

    pub fn analyze(&self, document: &ProjectDocument) -> CampaignAnalysis {
        let tally: StatusTally = document.task_statuses().collect();
        debug!(statuses = ?tally.entries(), "tallied task statuses");
        self.analyze_tally(&tally, document)
    }

    pub fn analyze_tally(&self, tally: &StatusTally, document: &ProjectDocument) -> CampaignAnalysis {
        let metrics = ProjectMetrics::calculate(tally, document);
        let impact = self.estimator.estimate(&metrics);
        let efficiency = VolunteerEfficiency::from_metrics(&metrics);
        let insights = self.insights.generate(&metrics);
        let recommendations = self.recommendations.generate(&metrics, &efficiency);

        debug!(
            project_id = ?metrics.project_id,
            total_tasks = metrics.total_tasks,
            percent_mapped = metrics.percent_mapped,
            insights = insights.len(),
            recommendations = recommendations.len(),
            "campaign analysis complete"
        );

        CampaignAnalysis {
            metrics,
            impact,
            efficiency,
            insights,
            recommendations,
        }
    }
}
