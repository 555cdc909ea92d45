//! Project snapshot as exported by the Tasking Manager project endpoint.
//!
//! Every field is optional. Missing keys, explicit `null`s, and values of the
//! wrong JSON type all fall back to defaults so a sparse or sloppy export still
//! yields a complete analysis. Only unreadable or syntactically invalid JSON
//! is an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Closed set of task states the analysis distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskStatus {
    Ready,
    Mapped,
    Validated,
    Invalidated,
    BadImagery,
    Unknown,
}

impl TaskStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Ready,
            Self::Mapped,
            Self::Validated,
            Self::Invalidated,
            Self::BadImagery,
            Self::Unknown,
        ]
    }

    /// Maps a raw `taskStatus` value. Anything outside the known codes,
    /// including lock states, is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "READY" => Self::Ready,
            "MAPPED" => Self::Mapped,
            "VALIDATED" => Self::Validated,
            "INVALIDATED" => Self::Invalidated,
            "BADIMAGERY" => Self::BadImagery,
            _ => Self::Unknown,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Mapped => "MAPPED",
            Self::Validated => "VALIDATED",
            Self::Invalidated => "INVALIDATED",
            Self::BadImagery => "BADIMAGERY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectDocumentError {
    #[error("failed to read project document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDocument {
    #[serde(deserialize_with = "lenient")]
    pub project_id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub project_info: ProjectInfo,
    #[serde(deserialize_with = "lenient")]
    pub organisation_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub project_priority: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub active_mappers: u32,
    #[serde(deserialize_with = "lenient")]
    pub contributors: Option<Vec<serde_json::Value>>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub percent_mapped: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub percent_validated: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub percent_bad_imagery: Option<f64>,
    #[serde(deserialize_with = "lenient_items")]
    pub campaigns: Vec<Campaign>,
    #[serde(deserialize_with = "lenient")]
    pub tasks: TaskCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskCollection {
    #[serde(deserialize_with = "lenient_items")]
    pub features: Vec<TaskFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskFeature {
    #[serde(deserialize_with = "lenient")]
    pub properties: TaskProperties,
}

/// A non-string `taskStatus` reads as absent and tallies as `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskProperties {
    #[serde(deserialize_with = "lenient")]
    pub task_status: Option<String>,
}

impl TaskFeature {
    pub fn status(&self) -> TaskStatus {
        self.properties
            .task_status
            .as_deref()
            .map(TaskStatus::from_code)
            .unwrap_or(TaskStatus::Unknown)
    }
}

impl ProjectDocument {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProjectDocumentError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProjectDocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            tasks = document.tasks.features.len(),
            "loaded project document"
        );
        Ok(document)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProjectDocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProjectDocumentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn task_statuses(&self) -> impl Iterator<Item = TaskStatus> + '_ {
        self.tasks.features.iter().map(TaskFeature::status)
    }

    /// Length of the contributor list, or 0 when the export carries none.
    pub fn contributor_count(&self) -> u32 {
        self.contributors
            .as_ref()
            .map(|contributors| contributors.len().try_into().unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    pub fn project_name(&self) -> &str {
        self.project_info.name.as_deref().unwrap_or_default()
    }

    pub fn campaign_names(&self) -> Vec<&str> {
        self.campaigns
            .iter()
            .map(|campaign| campaign.name.as_deref().unwrap_or_default())
            .collect()
    }
}

/// Reads any JSON value and keeps it only if it fits `T`; `null` and type
/// mismatches become `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`lenient`], but per element: a malformed entry becomes `T::default()`
/// instead of discarding the whole array.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let items: Vec<serde_json::Value> = lenient(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::StatusTally;

    #[test]
    fn empty_object_defaults_every_field() {
        let document = ProjectDocument::from_json_str("{}").expect("empty document parses");

        assert_eq!(document, ProjectDocument::default());
        assert_eq!(document.contributor_count(), 0);
        assert_eq!(document.project_name(), "");
        assert_eq!(document.task_statuses().count(), 0);
    }

    #[test]
    fn explicit_nulls_fall_back_to_defaults() {
        let raw = r#"{
            "projectId": null,
            "projectInfo": null,
            "activeMappers": null,
            "contributors": null,
            "campaigns": null,
            "tasks": {"features": null}
        }"#;

        let document = ProjectDocument::from_json_str(raw).expect("null fields tolerated");

        assert!(document.project_id.is_none());
        assert_eq!(document.active_mappers, 0);
        assert_eq!(document.contributor_count(), 0);
        assert!(document.campaigns.is_empty());
        assert!(document.tasks.features.is_empty());
    }

    #[test]
    fn missing_and_unrecognized_statuses_are_unknown() {
        let raw = r#"{
            "tasks": {"features": [
                {"properties": {"taskStatus": "MAPPED"}},
                {"properties": {"taskStatus": "LOCKED_FOR_MAPPING"}},
                {"properties": {}},
                {"properties": null},
                {}
            ]}
        }"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");
        let statuses: Vec<TaskStatus> = document.task_statuses().collect();

        assert_eq!(
            statuses,
            vec![
                TaskStatus::Mapped,
                TaskStatus::Unknown,
                TaskStatus::Unknown,
                TaskStatus::Unknown,
                TaskStatus::Unknown,
            ]
        );
    }

    #[test]
    fn non_string_statuses_are_unknown() {
        let raw = r#"{"tasks":{"features":[
            {"properties":{"taskStatus":"MAPPED"}},
            {"properties":{"taskStatus":3}},
            {"properties":{"taskStatus":true}},
            {"properties":{"taskStatus":{"code":"MAPPED"}}}
        ]}}"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");
        let statuses: Vec<TaskStatus> = document.task_statuses().collect();

        assert_eq!(
            statuses,
            vec![
                TaskStatus::Mapped,
                TaskStatus::Unknown,
                TaskStatus::Unknown,
                TaskStatus::Unknown,
            ]
        );
    }

    #[test]
    fn string_project_id_defaults_to_none() {
        let raw = r#"{"projectId":"32710","projectInfo":{"name":"Floods"}}"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");

        assert!(document.project_id.is_none());
        assert_eq!(document.project_name(), "Floods");
    }

    #[test]
    fn mistyped_scalars_fall_back_to_defaults() {
        let raw = r#"{
            "activeMappers": 4.0,
            "percentMapped": "n/a",
            "percentValidated": 12.5,
            "organisationName": 42,
            "contributors": "many",
            "dueDate": false
        }"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");

        assert_eq!(document.active_mappers, 0);
        assert!(document.percent_mapped.is_none());
        assert_eq!(document.percent_validated, Some(12.5));
        assert!(document.organisation_name.is_none());
        assert_eq!(document.contributor_count(), 0);
        assert!(document.due_date.is_none());
    }

    #[test]
    fn mistyped_containers_and_entries_fall_back_to_defaults() {
        let raw = r#"{
            "projectInfo": "Floods",
            "campaigns": {"name": "Missing Maps"},
            "tasks": {"features": [{"properties": "READY"}, 7, {"properties": {"taskStatus": "READY"}}]}
        }"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");
        let tally: StatusTally = document.task_statuses().collect();

        assert_eq!(document.project_name(), "");
        assert!(document.campaigns.is_empty());
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.count(TaskStatus::Ready), 1);
        assert_eq!(tally.count(TaskStatus::Unknown), 2);
    }

    #[test]
    fn malformed_campaign_entries_keep_their_siblings() {
        let raw = r#"{"campaigns": [{"name": "Missing Maps"}, "Floods", {"name": 5}]}"#;

        let document = ProjectDocument::from_json_str(raw).expect("document parses");

        assert_eq!(document.campaign_names(), vec!["Missing Maps", "", ""]);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = ProjectDocument::from_json_str("{\"tasks\": [").expect_err("truncated json");
        assert!(matches!(err, ProjectDocumentError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ProjectDocument::from_path("definitely/not/here.json")
            .expect_err("missing file rejected");
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
