use super::{Insight, InsightKind, InsightRule, InsightRuleGroup};
use crate::campaign::metrics::format_percent;

const NEARLY_COMPLETE_PCT: f64 = 95.0;
const NEEDS_ATTENTION_PCT: f64 = 50.0;
const VALIDATION_GAP_LIMIT: usize = 100;
const VALIDATED_COVERAGE_PCT: f64 = 80.0;
const STRONG_COMMUNITY_MAPPERS: u32 = 20;
const WEAK_COMMUNITY_MAPPERS: u32 = 5;
const URGENT_PRIORITIES: [&str; 2] = ["URGENT", "HIGH"];

pub(crate) fn standard_groups() -> Vec<InsightRuleGroup> {
    vec![
        InsightRuleGroup::new(
            "progress",
            vec![
                InsightRule {
                    name: "nearly_complete",
                    applies: |metrics| metrics.percent_mapped >= NEARLY_COMPLETE_PCT,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::Success,
                            "Project nearly complete - excellent mapper engagement",
                            format!("{}% mapped", format_percent(metrics.percent_mapped)),
                        )
                    },
                },
                InsightRule {
                    name: "needs_attention",
                    applies: |metrics| metrics.percent_mapped < NEEDS_ATTENTION_PCT,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::ActionNeeded,
                            "Project needs more mapper attention",
                            format!("Only {}% mapped", format_percent(metrics.percent_mapped)),
                        )
                    },
                },
            ],
        ),
        InsightRuleGroup::new(
            "validation",
            vec![
                InsightRule {
                    name: "validation_backlog",
                    applies: |metrics| metrics.validation_gap() > VALIDATION_GAP_LIMIT,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::ValidationNeeded,
                            "Significant validation backlog - organize validation clinic",
                            format!("{} tasks awaiting validation", metrics.validation_gap()),
                        )
                    },
                },
                InsightRule {
                    name: "validation_coverage",
                    applies: |metrics| metrics.percent_validated > VALIDATED_COVERAGE_PCT,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::Success,
                            "Excellent validation coverage maintained",
                            format!("{}% validated", format_percent(metrics.percent_validated)),
                        )
                    },
                },
            ],
        ),
        InsightRuleGroup::new(
            "community",
            vec![
                InsightRule {
                    name: "strong_community",
                    applies: |metrics| metrics.active_mappers > STRONG_COMMUNITY_MAPPERS,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::Community,
                            "Strong volunteer participation - active community",
                            format!("{} active mappers", metrics.active_mappers),
                        )
                    },
                },
                InsightRule {
                    name: "weak_community",
                    applies: |metrics| metrics.active_mappers < WEAK_COMMUNITY_MAPPERS,
                    build: |metrics| {
                        Insight::new(
                            InsightKind::Community,
                            "Low mapper engagement - consider promotional campaign",
                            format!("Only {} active mappers", metrics.active_mappers),
                        )
                    },
                },
            ],
        ),
        InsightRuleGroup::new(
            "urgency",
            vec![InsightRule {
                name: "high_priority",
                applies: |metrics| URGENT_PRIORITIES.contains(&metrics.priority.as_str()),
                build: |metrics| {
                    Insight::new(
                        InsightKind::Urgency,
                        "High-priority humanitarian project - rapid completion critical",
                        format!("Priority: {}", metrics.priority),
                    )
                },
            }],
        ),
    ]
}
