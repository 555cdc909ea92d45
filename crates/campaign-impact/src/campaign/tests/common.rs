use crate::campaign::document::{
    ProjectDocument, ProjectInfo, TaskCollection, TaskFeature, TaskProperties,
};
use crate::campaign::{ProjectMetrics, VolunteerEfficiency};

pub(super) fn feature(status: Option<&str>) -> TaskFeature {
    TaskFeature {
        properties: TaskProperties {
            task_status: status.map(str::to_string),
        },
    }
}

pub(super) fn document_with_counts(counts: &[(&str, usize)]) -> ProjectDocument {
    let features = counts
        .iter()
        .flat_map(|&(status, count)| {
            std::iter::repeat_with(move || feature(Some(status))).take(count)
        })
        .collect();

    ProjectDocument {
        project_id: Some(32710),
        project_info: ProjectInfo {
            name: Some("Flood Resilience Mapping".to_string()),
        },
        organisation_name: Some("HOT".to_string()),
        project_priority: Some("MEDIUM".to_string()),
        status: Some("PUBLISHED".to_string()),
        active_mappers: 12,
        contributors: Some(vec![serde_json::json!({"username": "mapper"}); 8]),
        tasks: TaskCollection { features },
        ..ProjectDocument::default()
    }
}

/// Tally from the worked example: 100 tasks, 60 mapped, 20 validated.
pub(super) fn reference_document() -> ProjectDocument {
    document_with_counts(&[
        ("MAPPED", 40),
        ("VALIDATED", 20),
        ("READY", 30),
        ("INVALIDATED", 5),
        ("BADIMAGERY", 5),
    ])
}

/// Metrics that trip no insight or recommendation rule.
pub(super) fn quiet_metrics() -> ProjectMetrics {
    ProjectMetrics {
        project_id: Some(1),
        project_name: "Quiet".to_string(),
        organization: "HOT".to_string(),
        priority: "LOW".to_string(),
        status: "PUBLISHED".to_string(),
        total_tasks: 200,
        mapped_tasks: 140,
        validated_tasks: 100,
        invalidated_tasks: 2,
        ready_tasks: 40,
        bad_imagery_tasks: 1,
        percent_mapped: 70.0,
        percent_validated: 50.0,
        active_mappers: 12,
        total_mappers: 15,
        created: None,
        last_updated: None,
        due_date: None,
    }
}

pub(super) fn quiet_efficiency() -> VolunteerEfficiency {
    VolunteerEfficiency::from_metrics(&quiet_metrics())
}
