use super::common::*;
use crate::campaign::recommendations::RecommendationRule;
use crate::campaign::{Recommendation, RecommendationGenerator, RecommendationPriority};

#[test]
fn quiet_project_produces_no_recommendations() {
    let recommendations =
        RecommendationGenerator::standard().generate(&quiet_metrics(), &quiet_efficiency());
    assert!(
        recommendations.is_empty(),
        "unexpected recommendations: {recommendations:?}"
    );
}

#[test]
fn every_rule_fires_in_table_order() {
    let mut metrics = quiet_metrics();
    metrics.ready_tasks = 60;
    metrics.active_mappers = 3;
    metrics.invalidated_tasks = 15;
    metrics.bad_imagery_tasks = 8;
    let mut efficiency = quiet_efficiency();
    efficiency.validation_backlog = 60;
    efficiency.tasks_remaining = 30;

    let recommendations = RecommendationGenerator::standard().generate(&metrics, &efficiency);

    let summary: Vec<(RecommendationPriority, &str)> = recommendations
        .iter()
        .map(|rec| (rec.priority, rec.area.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (RecommendationPriority::High, "Mapping Campaign"),
            (RecommendationPriority::High, "Quality Assurance"),
            (RecommendationPriority::Medium, "Community Engagement"),
            (RecommendationPriority::Medium, "Mapper Training"),
            (RecommendationPriority::Low, "Imagery Access"),
            (RecommendationPriority::High, "Project Completion"),
        ]
    );

    assert_eq!(
        recommendations[0].action,
        "Organize focused mapping event - 60 tasks ready to map"
    );
    assert_eq!(
        recommendations[1].action,
        "Schedule validation clinic - 60 tasks awaiting QA"
    );
    assert_eq!(
        recommendations[3].action,
        "Conduct training session on common issues (15 invalidations)"
    );
    assert_eq!(
        recommendations[4].action,
        "Request alternative imagery sources for 8 tasks"
    );
    assert_eq!(
        recommendations[5].action,
        "Final push needed - only 30 tasks remaining"
    );
    assert_eq!(recommendations[5].target, "Complete project within 1-2 weeks");
}

#[test]
fn completion_push_requires_remaining_work() {
    let generator = RecommendationGenerator::standard();
    let metrics = quiet_metrics();

    for (remaining, expected) in [(0, false), (1, true), (50, true), (51, false)] {
        let mut efficiency = quiet_efficiency();
        efficiency.tasks_remaining = remaining;
        let fired = generator
            .generate(&metrics, &efficiency)
            .iter()
            .any(|rec| rec.area == "Project Completion");
        assert_eq!(fired, expected, "tasks_remaining = {remaining}");
    }
}

#[test]
fn thresholds_are_strict() {
    let mut metrics = quiet_metrics();
    metrics.ready_tasks = 50;
    metrics.active_mappers = 10;
    metrics.invalidated_tasks = 10;
    metrics.bad_imagery_tasks = 5;
    let mut efficiency = quiet_efficiency();
    efficiency.validation_backlog = 50;

    let recommendations = RecommendationGenerator::standard().generate(&metrics, &efficiency);

    assert!(recommendations.is_empty());
}

#[test]
fn custom_rules_replace_standard_table() {
    let generator = RecommendationGenerator::new(vec![RecommendationRule {
        name: "always",
        applies: |_, _| true,
        build: |metrics, _| {
            Recommendation::new(
                RecommendationPriority::Low,
                "Reporting",
                format!("Share progress for {}", metrics.project_name),
                "Weekly",
            )
        },
    }]);

    let recommendations = generator.generate(&quiet_metrics(), &quiet_efficiency());

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].action, "Share progress for Quiet");
    assert_eq!(generator.rules().len(), 1);
}
