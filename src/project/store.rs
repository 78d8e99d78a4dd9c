//! Saved projects as pretty-printed JSON files, one per project id, in a single directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::error::{WorkspaceError, WorkspaceResult};
use crate::state::compositor::CompositorState;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    /// Unix seconds.
    #[serde(default)]
    pub created: Option<u64>,
    /// Unix seconds.
    #[serde(default)]
    pub modified: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub state: CompositorState,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct ProjectId(pub String);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub created: Option<u64>,
    pub modified: Option<u64>,
    pub path: PathBuf,
    /// Set when the file exists but could not be read as a project.
    pub error: Option<String>,
}

#[derive(serde::Deserialize)]
struct ProjectHeader {
    #[serde(default)]
    meta: Option<ProjectMeta>,
}

/// Keeps ASCII alphanumerics, `-` and `_`; everything else becomes `_`.
pub fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &ProjectId) -> WorkspaceResult<PathBuf> {
        if id.0.is_empty() || sanitize_project_name(&id.0) != id.0 {
            return Err(WorkspaceError::validation(format!(
                "invalid project id {:?}",
                id.0
            )));
        }
        Ok(self.dir.join(format!("{}.json", id.0)))
    }

    pub fn save(&self, id: Option<&ProjectId>, project: &Project) -> WorkspaceResult<ProjectId> {
        self.save_at(id, project, unix_now())
    }

    /// Saves with an explicit clock. Without an id, one is generated from the project name and
    /// `now`.
    #[tracing::instrument(skip(self, project), fields(name = %project.meta.name))]
    pub fn save_at(
        &self,
        id: Option<&ProjectId>,
        project: &Project,
        now: u64,
    ) -> WorkspaceResult<ProjectId> {
        std::fs::create_dir_all(&self.dir)?;
        let id = match id {
            Some(id) => id.clone(),
            None => {
                let name = if project.meta.name.is_empty() {
                    "untitled"
                } else {
                    project.meta.name.as_str()
                };
                ProjectId(format!("{}_{now}", sanitize_project_name(name)))
            }
        };
        let path = self.path_for(&id)?;

        let mut project = project.clone();
        project.meta.created.get_or_insert(now);
        project.meta.modified = Some(now);
        let json = serde_json::to_string_pretty(&project)?;
        std::fs::write(&path, json)?;
        tracing::info!(id = %id.0, path = %path.display(), "project saved");
        Ok(id)
    }

    pub fn load(&self, id: &ProjectId) -> WorkspaceResult<Project> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(WorkspaceError::not_found(format!("project {}", id.0)));
        }
        let json = std::fs::read_to_string(&path)?;
        let project: Project = serde_json::from_str(&json)?;
        project.state.validate()?;
        Ok(project)
    }

    /// All `*.json` files in the store, newest `modified` first.
    pub fn list(&self) -> WorkspaceResult<Vec<ProjectSummary>> {
        std::fs::create_dir_all(&self.dir)?;
        let mut out = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let id = ProjectId(stem.to_string());

            let header = std::fs::read_to_string(&path)
                .map_err(WorkspaceError::from)
                .and_then(|json| {
                    serde_json::from_str::<ProjectHeader>(&json).map_err(WorkspaceError::from)
                });
            let summary = match header {
                Ok(ProjectHeader { meta: Some(meta) }) => ProjectSummary {
                    id,
                    name: meta.name,
                    created: meta.created,
                    modified: meta.modified,
                    path,
                    error: None,
                },
                Ok(ProjectHeader { meta: None }) => ProjectSummary {
                    name: stem.to_string(),
                    id,
                    created: None,
                    modified: None,
                    path,
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "unreadable project file");
                    ProjectSummary {
                        name: stem.to_string(),
                        id,
                        created: None,
                        modified: None,
                        path,
                        error: Some("Invalid project file".to_string()),
                    }
                }
            };
            out.push(summary);
        }
        out.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.id.cmp(&b.id)));
        Ok(out)
    }

    pub fn delete(&self, id: &ProjectId) -> WorkspaceResult<()> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(WorkspaceError::not_found(format!("project {}", id.0)));
        }
        std::fs::remove_file(&path)?;
        tracing::info!(id = %id.0, "project deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/store.rs"]
mod tests;
