use std::{collections::HashSet, fmt};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CATALOG_FILE: &str = "projects.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One portfolio project, as shipped in `content/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub screenshots: Vec<String>,
    pub features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
    pub github_url: String,
    pub live_url: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog file {0} not found")]
    Missing(String),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(String),
    #[error("Duplicate project id {0}")]
    DuplicateId(ProjectId),
}

/// Read-only, ordered set of projects. Built once at startup and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records = serde_json::from_str::<Vec<ProjectRecord>>(json)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_records(records)
    }

    /// Loads the catalog compiled into the binary (or the WASM bundle).
    pub fn embedded() -> Result<Self, CatalogError> {
        let file = Content::get(CATALOG_FILE)
            .ok_or_else(|| CatalogError::Missing(CATALOG_FILE.to_string()))?;
        let json = std::str::from_utf8(&file.data)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_json(json)
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_record(id: u32, technologies: &[&str], screenshots: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId(id),
        title: format!("Project {id}"),
        short_description: format!("Short {id}"),
        description: format!("Long description {id}"),
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        image: format!("https://img.example/{id}.png"),
        screenshots: screenshots.iter().map(|s| s.to_string()).collect(),
        features: vec![format!("Feature {id}a"), format!("Feature {id}b")],
        challenges: format!("Challenges {id}"),
        solutions: format!("Solutions {id}"),
        github_url: format!("https://github.com/example/{id}"),
        live_url: format!("https://demo.example/{id}"),
    }
}
