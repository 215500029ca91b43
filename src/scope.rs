//! Sibling scope resolution
//!
//! A task's siblings share its parent task if it has one, else its section,
//! else its project.

use serde::{Deserialize, Serialize};

/// The slice of a remote task that ordering needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderableTask {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub child_order: i64,
}

/// Filter identifying one sibling group on the remote side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKey {
    Parent(String),
    Section(String),
    Project(String),
}

impl ScopeKey {
    /// Query parameter name and value for a scoped task listing
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            ScopeKey::Parent(id) => ("parent_id", id),
            ScopeKey::Section(id) => ("section_id", id),
            ScopeKey::Project(id) => ("project_id", id),
        }
    }
}

pub fn scope_key_of(task: &OrderableTask) -> ScopeKey {
    if let Some(parent_id) = &task.parent_id {
        return ScopeKey::Parent(parent_id.clone());
    }
    if let Some(section_id) = &task.section_id {
        return ScopeKey::Section(section_id.clone());
    }
    ScopeKey::Project(task.project_id.clone())
}

/// Whether `candidate` sits in the same sibling group as `task`.
///
/// Only section and parent are compared; the project is not. Callers must
/// apply this to a list already fetched with [`scope_key_of`], otherwise
/// top-level tasks of different projects compare equal.
pub fn same_scope(task: &OrderableTask, candidate: &OrderableTask) -> bool {
    task.section_id == candidate.section_id && task.parent_id == candidate.parent_id
}
