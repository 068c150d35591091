//! The store handle.
//!
//! [`Store`] wraps the store root and is passed explicitly to every
//! operation, so several stores can be used side by side (tests rely on
//! this). Layout under the root:
//!
//! ```text
//! config.json
//! projects/<name>/project.json
//! projects/<name>/sources/<file>
//! projects/<name>/jobs/
//! projects/<name>/versions/<id>[_<tag>]/resume.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::atomic::{read_json, write_json_atomic};
use super::config::GlobalConfig;
use super::locate::{expand_home, locate_store};
use super::project::{ProjectState, VersionEntry};
use super::version_id::version_dir_name;
use crate::error::{Result, StateError};

pub const CONFIG_FILE: &str = "config.json";
pub const PROJECT_FILE: &str = "project.json";
pub const RESUME_FILE: &str = "resume.yaml";
pub const EXTRACTED_TEXT_FILE: &str = "extracted_text.txt";

/// Handle to an on-disk version store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store at an explicit root. Nothing is created until a write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the store for the current directory.
    ///
    /// An override path is created if it does not exist yet.
    pub fn discover(override_path: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));

        if let Some(path) = override_path {
            let root = expand_home(path, &home);
            fs::create_dir_all(&root)?;
            debug!(root = %root.display(), "using store override");
            return Ok(Self::open(root));
        }

        let cwd = std::env::current_dir()?;
        let root = locate_store(None, &cwd, &home);
        debug!(root = %root.display(), "located store");
        Ok(Self::open(root))
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // --- Global config ---

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Load the global config, or the default when none was written yet.
    pub fn load_config(&self) -> Result<GlobalConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }
        read_json(&path)
    }

    /// Save the global config using atomic write.
    pub fn save_config(&self, config: &GlobalConfig) -> Result<()> {
        write_json_atomic(&self.config_path(), config)
    }

    /// The active project recorded in the config.
    pub fn active_project(&self) -> Result<Option<String>> {
        Ok(self.load_config()?.active_project)
    }

    /// Make an existing project the active one.
    pub fn set_active_project(&self, name: &str) -> Result<()> {
        validate_project_name(name)?;
        if !self.project_file(name).exists() {
            return Err(StateError::not_found("Project", name));
        }
        let mut config = self.load_config()?;
        config.active_project = Some(name.to_string());
        self.save_config(&config)
    }

    /// Resolve the project to operate on: the explicit name, else the
    /// active project.
    pub fn resolve_project(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(name) = explicit {
            return Ok(name.to_string());
        }
        self.active_project()?
            .ok_or_else(|| StateError::invalid("No project specified and no active project set"))
    }

    // --- Projects ---

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("projects")
    }

    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.projects_dir().join(name)
    }

    fn project_file(&self, name: &str) -> PathBuf {
        self.project_dir(name).join(PROJECT_FILE)
    }

    /// Sorted names of all projects in the store.
    pub fn list_projects(&self) -> Result<Vec<String>> {
        let dir = self.projects_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Create a project with an empty version list.
    ///
    /// The project becomes active when `activate` is set or when no project
    /// is active yet.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a name that is not directory-safe, `Conflict` if
    /// the project directory already exists. Nothing is written in either
    /// case.
    pub fn init_project(&self, name: &str, activate: bool) -> Result<PathBuf> {
        validate_project_name(name)?;

        let project_dir = self.project_dir(name);
        if project_dir.exists() {
            return Err(StateError::Conflict {
                name: name.to_string(),
            });
        }

        for sub in ["sources", "versions", "jobs"] {
            fs::create_dir_all(project_dir.join(sub))?;
        }

        let mut state = ProjectState::new(name);
        self.save_project(&mut state)?;

        let mut config = self.load_config()?;
        if activate || config.active_project.is_none() {
            config.active_project = Some(name.to_string());
            self.save_config(&config)?;
        }

        debug!(project = name, path = %project_dir.display(), "initialized project");
        Ok(project_dir)
    }

    /// Load a project's state.
    ///
    /// # Errors
    ///
    /// `NotFound` if the project has no `project.json`.
    pub fn load_project(&self, name: &str) -> Result<ProjectState> {
        validate_project_name(name)?;
        let path = self.project_file(name);
        if !path.exists() {
            return Err(StateError::not_found("Project", name));
        }
        read_json(&path)
    }

    /// Save a project's state, refreshing `updated_at` first.
    pub fn save_project(&self, state: &mut ProjectState) -> Result<()> {
        state.touch();
        write_json_atomic(&self.project_file(&state.name), state)
    }

    // --- Versions ---

    /// Directory of a version, derived from its ID and tag.
    pub fn version_dir(&self, project: &str, id: &str, tag: Option<&str>) -> PathBuf {
        self.project_dir(project)
            .join("versions")
            .join(version_dir_name(id, tag))
    }

    /// Directory of an existing version entry.
    pub fn entry_dir(&self, project: &str, entry: &VersionEntry) -> PathBuf {
        self.version_dir(project, &entry.id, entry.tag.as_deref())
    }

    /// Path to the active version's `resume.yaml`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no active version is set, `NotFound` if the active
    /// ID has no entry.
    pub fn active_version_path(&self, project: &str) -> Result<PathBuf> {
        let state = self.load_project(project)?;
        let active = state.active_version.as_deref().ok_or_else(|| {
            StateError::invalid(format!("No active version set for project: {}", project))
        })?;
        let entry = state
            .version(active)
            .ok_or_else(|| StateError::not_found("Active version", active))?;
        Ok(self.entry_dir(project, entry).join(RESUME_FILE))
    }
}

/// Reject names that would escape or hide inside the projects directory.
pub fn validate_project_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);
    if bad {
        return Err(StateError::invalid(format!("Invalid project name: '{}'", name)));
    }
    Ok(())
}
