//! Action items for campaign coordinators.
//!
//! Every rule is evaluated independently and results keep table order; there
//! is no re-sorting by priority.

use super::efficiency::VolunteerEfficiency;
use super::metrics::ProjectMetrics;
use serde::Serialize;
use std::fmt;
use tracing::trace;

const READY_BACKLOG_LIMIT: usize = 50;
const VALIDATION_BACKLOG_LIMIT: usize = 50;
const MIN_ACTIVE_MAPPERS: u32 = 10;
const INVALIDATION_LIMIT: usize = 10;
const BAD_IMAGERY_LIMIT: usize = 5;
const FINAL_PUSH_REMAINING: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    pub const fn code(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub area: String,
    pub action: String,
    pub target: String,
}

impl Recommendation {
    pub fn new(
        priority: RecommendationPriority,
        area: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            area: area.into(),
            action: action.into(),
            target: target.into(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub name: &'static str,
    pub applies: fn(&ProjectMetrics, &VolunteerEfficiency) -> bool,
    pub build: fn(&ProjectMetrics, &VolunteerEfficiency) -> Recommendation,
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    rules: Vec<RecommendationRule>,
}

impl RecommendationGenerator {
    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    pub fn generate(
        &self,
        metrics: &ProjectMetrics,
        efficiency: &VolunteerEfficiency,
    ) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter(|rule| (rule.applies)(metrics, efficiency))
            .map(|rule| {
                trace!(rule = rule.name, "recommendation rule fired");
                (rule.build)(metrics, efficiency)
            })
            .collect()
    }
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            name: "mapping_campaign",
            applies: |metrics, _| metrics.ready_tasks > READY_BACKLOG_LIMIT,
            build: |metrics, _| {
                Recommendation::new(
                    RecommendationPriority::High,
                    "Mapping Campaign",
                    format!(
                        "Organize focused mapping event - {} tasks ready to map",
                        metrics.ready_tasks
                    ),
                    "Complete 30-50 tasks per session",
                )
            },
        },
        RecommendationRule {
            name: "quality_assurance",
            applies: |_, efficiency| efficiency.validation_backlog > VALIDATION_BACKLOG_LIMIT,
            build: |_, efficiency| {
                Recommendation::new(
                    RecommendationPriority::High,
                    "Quality Assurance",
                    format!(
                        "Schedule validation clinic - {} tasks awaiting QA",
                        efficiency.validation_backlog
                    ),
                    "Achieve 80% validation rate",
                )
            },
        },
        RecommendationRule {
            name: "community_engagement",
            applies: |metrics, _| metrics.active_mappers < MIN_ACTIVE_MAPPERS,
            build: |_, _| {
                Recommendation::new(
                    RecommendationPriority::Medium,
                    "Community Engagement",
                    "Expand mapper recruitment through Missing Maps events",
                    "Increase active mapper count to 15+",
                )
            },
        },
        RecommendationRule {
            name: "mapper_training",
            applies: |metrics, _| metrics.invalidated_tasks > INVALIDATION_LIMIT,
            build: |metrics, _| {
                Recommendation::new(
                    RecommendationPriority::Medium,
                    "Mapper Training",
                    format!(
                        "Conduct training session on common issues ({} invalidations)",
                        metrics.invalidated_tasks
                    ),
                    "Reduce invalidation rate below 5%",
                )
            },
        },
        RecommendationRule {
            name: "imagery_access",
            applies: |metrics, _| metrics.bad_imagery_tasks > BAD_IMAGERY_LIMIT,
            build: |metrics, _| {
                Recommendation::new(
                    RecommendationPriority::Low,
                    "Imagery Access",
                    format!(
                        "Request alternative imagery sources for {} tasks",
                        metrics.bad_imagery_tasks
                    ),
                    "Enable completion of all tasks",
                )
            },
        },
        RecommendationRule {
            name: "project_completion",
            applies: |_, efficiency| {
                (1..=FINAL_PUSH_REMAINING).contains(&efficiency.tasks_remaining)
            },
            build: |_, efficiency| {
                Recommendation::new(
                    RecommendationPriority::High,
                    "Project Completion",
                    format!(
                        "Final push needed - only {} tasks remaining",
                        efficiency.tasks_remaining
                    ),
                    "Complete project within 1-2 weeks",
                )
            },
        },
    ]
}
