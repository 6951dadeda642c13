//! Scenario documents and lookup by id.
//!
//! Two document shapes are accepted, and may be mixed:
//!
//! ```json
//! {"scenarios": [{"id": "S1", "day": 1}]}
//! {"groups": [{"name": "opening", "scenarios": [{"id": "S2", "day": 2}]}]}
//! ```
//!
//! Grouped scenarios are searched before top-level ones. Records stay raw
//! JSON until looked up, so only the requested record has to be well formed.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::CatalogError;
use crate::prompt::Scenario;

#[derive(Deserialize, Debug, Default)]
pub struct ScenarioDocument {
    #[serde(default)]
    pub groups: Vec<ScenarioGroup>,
    #[serde(default)]
    pub scenarios: Vec<Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ScenarioGroup {
    /// Only used in logs.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scenarios: Vec<Value>,
}

/// The string `id` of a raw record, if it has one.
fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

impl ScenarioDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let doc = Self::from_json(&text).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        debug!(
            path = %path.display(),
            groups = doc.groups.len(),
            scenarios = doc.len(),
            "loaded scenario document"
        );
        Ok(doc)
    }

    /// Every raw record with its group name, grouped ones first.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Value)> {
        self.groups
            .iter()
            .flat_map(|g| g.scenarios.iter().map(move |s| (g.name.as_deref(), s)))
            .chain(self.scenarios.iter().map(|s| (None, s)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw record whose `id` equals `id`.
    pub fn find(&self, id: &str) -> Option<&Value> {
        let (group, record) = self.iter().find(|(_, r)| record_id(r) == Some(id))?;
        debug!(id, group = group.unwrap_or("-"), "scenario record found");
        Some(record)
    }

    /// Look up `id` and deserialize that record alone.
    pub fn get(&self, id: &str) -> Result<Scenario, CatalogError> {
        let record = self
            .find(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Scenario::deserialize(record).map_err(|source| CatalogError::Record {
            id: id.to_string(),
            source,
        })
    }
}

/// Load `path` and return the scenario with the given id.
pub fn load_scenario(path: impl AsRef<Path>, id: &str) -> Result<Scenario, CatalogError> {
    ScenarioDocument::load(path)?.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::num::NonZeroU32;

    const MIXED: &str = r#"{
        "groups": [
            {"name": "opening", "scenarios": [{"id": "S1", "day": 1}, {"id": "S2", "day": 2}]},
            {"scenarios": [{"id": "S3", "day": 3}]}
        ],
        "scenarios": [{"id": "S2", "day": 20}, {"id": "S4", "day": 4}]
    }"#;

    fn day(scenario: &Scenario) -> Option<u32> {
        scenario.day.map(NonZeroU32::get)
    }

    #[test]
    fn flat_document() {
        let doc = ScenarioDocument::from_json(r#"{"scenarios": [{"id": "S6", "day": 6}]}"#).unwrap();
        assert_eq!(day(&doc.get("S6").unwrap()), Some(6));
    }

    #[test]
    fn grouped_scenarios_take_precedence() {
        let doc = ScenarioDocument::from_json(MIXED).unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(day(&doc.get("S2").unwrap()), Some(2));
        assert_eq!(day(&doc.get("S3").unwrap()), Some(3));
        assert_eq!(day(&doc.get("S4").unwrap()), Some(4));
    }

    #[test]
    fn missing_id_is_not_found() {
        let doc = ScenarioDocument::from_json(MIXED).unwrap();
        let err = doc.get("S9").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == "S9"));
    }

    #[test]
    fn empty_document_has_no_scenarios() {
        let doc = ScenarioDocument::from_json("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn malformed_sibling_does_not_hide_other_records() {
        let doc = ScenarioDocument::from_json(
            r#"{"scenarios": [{"id": "S1", "day": 1}, {"id": "S2", "day": "two"}, "junk"]}"#,
        )
        .unwrap();
        assert_eq!(day(&doc.get("S1").unwrap()), Some(1));

        let err = doc.get("S2").unwrap_err();
        assert!(matches!(err, CatalogError::Record { id, .. } if id == "S2"));
    }

    #[test]
    fn records_without_string_id_are_skipped() {
        let doc = ScenarioDocument::from_json(
            r#"{"scenarios": [{"id": 7, "day": 1}, {"day": 2}, {"id": "7", "day": 3}]}"#,
        )
        .unwrap();
        assert_eq!(day(&doc.get("7").unwrap()), Some(3));
    }

    #[test]
    fn load_scenario_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MIXED.as_bytes()).unwrap();
        let scenario = load_scenario(file.path(), "S1").unwrap();
        assert_eq!(scenario.id.as_deref(), Some("S1"));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scenario(dir.path().join("missing.json"), "S1").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load_scenario(file.path(), "S1").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
