use campaign_impact::campaign::{format_percent, CampaignAnalysis};
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Display, Write};

const RULE_WIDTH: usize = 80;

/// Writes the console report for `analysis` into `out`.
pub(crate) fn render_report<W, Tz>(
    out: &mut W,
    analysis: &CampaignAnalysis,
    generated_at: DateTime<Tz>,
) -> fmt::Result
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let heavy = "=".repeat(RULE_WIDTH);
    let metrics = &analysis.metrics;
    let efficiency = &analysis.efficiency;
    let impact = &analysis.impact;

    writeln!(out, "{heavy}")?;
    writeln!(out, "HUMANITARIAN MAPPING IMPACT ANALYSIS")?;
    writeln!(out, "HOT Tasking Manager Project Assessment")?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "{heavy}\n")?;

    section(out, "PROJECT OVERVIEW")?;
    writeln!(out, "Project ID: {}", optional(metrics.project_id))?;
    writeln!(out, "Name: {}", metrics.project_name)?;
    writeln!(out, "Organization: {}", metrics.organization)?;
    writeln!(out, "Priority: {}", metrics.priority)?;
    writeln!(out, "Status: {}", metrics.status)?;
    writeln!(out, "Created: {}", optional(metrics.created.as_deref()))?;
    writeln!(out, "Last Updated: {}", optional(metrics.last_updated.as_deref()))?;
    writeln!(out, "Due Date: {}\n", optional(metrics.due_date.as_deref()))?;

    section(out, "MAPPING PROGRESS")?;
    writeln!(out, "Total Tasks: {}", metrics.total_tasks)?;
    writeln!(
        out,
        "Mapped: {} ({}%)",
        metrics.mapped_tasks,
        format_percent(metrics.percent_mapped)
    )?;
    writeln!(
        out,
        "Validated: {} ({}%)",
        metrics.validated_tasks,
        format_percent(metrics.percent_validated)
    )?;
    writeln!(out, "Invalidated: {}", metrics.invalidated_tasks)?;
    writeln!(out, "Ready to Map: {}", metrics.ready_tasks)?;
    writeln!(out, "Bad Imagery: {}\n", metrics.bad_imagery_tasks)?;

    section(out, "VOLUNTEER ENGAGEMENT")?;
    writeln!(out, "Total Contributors: {}", efficiency.total_contributors)?;
    writeln!(
        out,
        "Active Recent Mappers: {}",
        efficiency.active_recent_mappers
    )?;
    writeln!(
        out,
        "Avg Tasks per Contributor: {}",
        format_percent(efficiency.avg_tasks_per_contributor)
    )?;
    writeln!(out, "Tasks Remaining: {}", efficiency.tasks_remaining)?;
    writeln!(out, "Validation Backlog: {}", efficiency.validation_backlog)?;
    writeln!(
        out,
        "Validation Completion: {}%\n",
        format_percent(efficiency.validation_completion_rate)
    )?;

    section(out, "ESTIMATED HUMANITARIAN IMPACT")?;
    writeln!(
        out,
        "Buildings Mapped: ~{}",
        group_thousands(impact.estimated_buildings_mapped)
    )?;
    writeln!(
        out,
        "Population Covered: ~{} people",
        group_thousands(impact.estimated_population_covered)
    )?;
    writeln!(
        out,
        "Road Network: ~{:.1} km",
        impact.estimated_road_km_mapped
    )?;
    writeln!(out, "\nHumanitarian Applications:")?;
    for application in &impact.humanitarian_applications {
        writeln!(out, "  • {application}")?;
    }
    writeln!(
        out,
        "\nNote: Estimates based on typical task completion patterns, not measured values\n"
    )?;

    section(out, "CAMPAIGN INSIGHTS")?;
    for insight in &analysis.insights {
        writeln!(out, "[{}] {}", insight.kind.code(), insight.insight)?;
        writeln!(out, "  → {}\n", insight.metric)?;
    }

    section(out, "ACTIONABLE RECOMMENDATIONS")?;
    for (index, recommendation) in analysis.recommendations.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {}",
            index + 1,
            recommendation.priority.code(),
            recommendation.area
        )?;
        writeln!(out, "   Action: {}", recommendation.action)?;
        writeln!(out, "   Target: {}\n", recommendation.target)?;
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    let light = "-".repeat(RULE_WIDTH);
    writeln!(out, "{light}\n{title}\n{light}")
}

fn optional<T: Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

/// `1234567` -> `1,234,567`.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
