mod rules;

use super::metrics::ProjectMetrics;
use serde::Serialize;
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    Success,
    ActionNeeded,
    ValidationNeeded,
    Community,
    Urgency,
}

impl InsightKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ActionNeeded => "ACTION_NEEDED",
            Self::ValidationNeeded => "VALIDATION_NEEDED",
            Self::Community => "COMMUNITY",
            Self::Urgency => "URGENCY",
        }
    }
}

/// Qualitative observation about campaign health.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub insight: String,
    pub metric: String,
}

impl Insight {
    pub fn new(kind: InsightKind, insight: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            kind,
            insight: insight.into(),
            metric: metric.into(),
        }
    }
}

/// Declarative rule: when `applies` holds, `build` produces the insight.
#[derive(Clone, Copy)]
pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&ProjectMetrics) -> bool,
    pub build: fn(&ProjectMetrics) -> Insight,
}

impl fmt::Debug for InsightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Rules sharing one else-branch chain. At most one rule per group fires,
/// the first whose predicate holds.
#[derive(Debug, Clone)]
pub struct InsightRuleGroup {
    pub name: &'static str,
    pub rules: Vec<InsightRule>,
}

impl InsightRuleGroup {
    pub fn new(name: &'static str, rules: Vec<InsightRule>) -> Self {
        Self { name, rules }
    }

    fn evaluate(&self, metrics: &ProjectMetrics) -> Option<Insight> {
        let rule = self.rules.iter().find(|rule| (rule.applies)(metrics))?;
        trace!(group = self.name, rule = rule.name, "insight rule fired");
        Some((rule.build)(metrics))
    }
}

/// Evaluates every group in order and collects the insights that fired.
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    groups: Vec<InsightRuleGroup>,
}

impl InsightGenerator {
    pub fn new(groups: Vec<InsightRuleGroup>) -> Self {
        Self { groups }
    }

    pub fn standard() -> Self {
        Self::new(rules::standard_groups())
    }

    pub fn groups(&self) -> &[InsightRuleGroup] {
        &self.groups
    }

    pub fn generate(&self, metrics: &ProjectMetrics) -> Vec<Insight> {
        self.groups
            .iter()
            .filter_map(|group| group.evaluate(metrics))
            .collect()
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
