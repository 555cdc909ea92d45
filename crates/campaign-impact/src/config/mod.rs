use crate::campaign::ImpactConfig;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub paths: PathConfig,
    pub impact: ImpactConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("IMPACT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let project_json = env::var("IMPACT_PROJECT_JSON")
            .unwrap_or_else(|_| "project_32710.json".to_string());
        let output_dir = env::var("IMPACT_OUTPUT_DIR").unwrap_or_else(|_| "outputs".to_string());

        let defaults = ImpactConfig::default();
        let impact = ImpactConfig {
            buildings_per_task: env_number(
                "IMPACT_BUILDINGS_PER_TASK",
                defaults.buildings_per_task,
            )?,
            people_per_building: env_number(
                "IMPACT_PEOPLE_PER_BUILDING",
                defaults.people_per_building,
            )?,
            road_km_per_task: env_number("IMPACT_ROAD_KM_PER_TASK", defaults.road_km_per_task)?,
        };

        let log_level = env::var("IMPACT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            paths: PathConfig {
                project_json: PathBuf::from(project_json),
                output_dir: PathBuf::from(output_dir),
            },
            impact,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key,
                    value: raw.clone(),
                })
        }
        _ => Ok(default),
    }
}

/// Where the project snapshot is read from and where exports land.
#[derive(Debug, Clone)]
pub struct PathConfig {
    pub project_json: PathBuf,
    pub output_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a valid number (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
