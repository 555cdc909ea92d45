use crate::render::render_report;
use campaign_impact::campaign::{
    CampaignAnalyzer, ProjectDocument, ProjectSummary, ReportExporter,
};
use campaign_impact::config::AppConfig;
use campaign_impact::error::AppError;
use campaign_impact::telemetry;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "campaign-impact",
    about = "Assess progress and humanitarian impact of a Tasking Manager project snapshot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the impact report and write CSV exports (default command)
    Report(ReportArgs),
    /// Write the flat project summary CSV
    Summary(SourceArgs),
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Project JSON export to analyze (overrides IMPACT_PROJECT_JSON)
    #[arg(long)]
    project: Option<PathBuf>,
    /// Directory for CSV exports (overrides IMPACT_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Print the analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Skip writing CSV exports
    #[arg(long)]
    no_export: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Report(args) => {
            apply_overrides(&mut config, args.source);
            run_report(&config, args.json, args.no_export)
        }
        Command::Summary(args) => {
            apply_overrides(&mut config, args);
            run_summary(&config)
        }
    }
}

fn apply_overrides(config: &mut AppConfig, mut args: SourceArgs) {
    if let Some(project) = args.project.take() {
        config.paths.project_json = project;
    }
    if let Some(output_dir) = args.output_dir.take() {
        config.paths.output_dir = output_dir;
    }
}

fn run_report(config: &AppConfig, json: bool, no_export: bool) -> Result<(), AppError> {
    let generated_at = Local::now();
    let document = ProjectDocument::from_path(&config.paths.project_json)?;
    let analyzer = CampaignAnalyzer::with_impact_config(config.impact.clone());
    let analysis = analyzer.analyze(&document);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        let mut report = String::new();
        render_report(&mut report, &analysis, generated_at)?;
        print!("{report}");
    }

    if no_export {
        return Ok(());
    }

    let exporter = ReportExporter::new(&config.paths.output_dir);
    let manifest = exporter.write_analysis(&analysis)?;
    info!(
        environment = ?config.environment,
        files = manifest.files.len(),
        "analysis complete"
    );
    if !json {
        println!("{}", "=".repeat(80));
        println!(
            "ANALYSIS COMPLETE - All outputs saved to: {}",
            exporter.output_dir().display()
        );
        println!("{}", "=".repeat(80));
    }

    Ok(())
}

fn run_summary(config: &AppConfig) -> Result<(), AppError> {
    let document = ProjectDocument::from_path(&config.paths.project_json)?;
    let analysis = CampaignAnalyzer::with_impact_config(config.impact.clone()).analyze(&document);
    let summary = ProjectSummary::from_document(&document, &analysis.metrics);

    let path = ReportExporter::new(&config.paths.output_dir).write_summary(&summary)?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_flags_parse() {
        let cli = Cli::try_parse_from([
            "campaign-impact",
            "report",
            "--project",
            "snapshot.json",
            "--json",
            "--no-export",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.source.project, Some(PathBuf::from("snapshot.json")));
                assert!(args.json);
                assert!(args.no_export);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn overrides_replace_configured_paths() {
        let mut config = AppConfig::load().expect("config loads");
        apply_overrides(
            &mut config,
            SourceArgs {
                project: Some(PathBuf::from("other.json")),
                output_dir: None,
            },
        );

        assert_eq!(config.paths.project_json, PathBuf::from("other.json"));
    }
}
