use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{GROUP_KIND, RepositoriesGroup};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to encode group '{group}': {source}")]
    Encode {
        group: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A group manifest together with the file it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFile {
    pub path: PathBuf,
    pub manifest: RepositoriesGroup,
}

impl GroupFile {
    pub fn new(path: impl Into<PathBuf>, manifest: RepositoriesGroup) -> Self {
        Self {
            path: path.into(),
            manifest,
        }
    }

    pub fn title(&self) -> &str {
        &self.manifest.metadata.name
    }

    pub fn description(&self) -> String {
        let file = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("File: {file}")
    }
}

pub trait GroupStore {
    fn list_groups(&self) -> &[GroupFile];
    fn get_group(&self, name: &str) -> Option<GroupFile>;
    fn save_group(&mut self, group: &GroupFile) -> Result<(), StoreError>;
}

/// Directory of YAML manifests; only `RepositoriesGroup` documents are kept.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    root: PathBuf,
    groups: Vec<GroupFile>,
}

#[derive(Deserialize)]
struct KindProbe {
    #[serde(default)]
    kind: String,
}

impl ManifestStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        let mut files = Vec::new();
        collect_yaml_files(&root, &mut files)?;
        files.sort();

        let mut groups = Vec::new();
        for path in files {
            match load_group(&path) {
                Ok(Some(manifest)) => groups.push(GroupFile::new(path, manifest)),
                Ok(None) => debug!(path = %path.display(), "not a {GROUP_KIND}, ignored"),
                Err(err) => warn!(error = %err, "skipping manifest"),
            }
        }
        info!(root = %root.display(), groups = groups.len(), "manifests loaded");
        Ok(Self { root, groups })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl GroupStore for ManifestStore {
    fn list_groups(&self) -> &[GroupFile] {
        &self.groups
    }

    fn get_group(&self, name: &str) -> Option<GroupFile> {
        self.groups.iter().find(|group| group.title() == name).cloned()
    }

    fn save_group(&mut self, group: &GroupFile) -> Result<(), StoreError> {
        let encoded =
            serde_yaml::to_string(&group.manifest).map_err(|source| StoreError::Encode {
                group: group.title().to_string(),
                source,
            })?;
        fs::write(&group.path, encoded).map_err(|source| StoreError::Write {
            path: group.path.clone(),
            source,
        })?;
        match self.groups.iter_mut().find(|cached| cached.path == group.path) {
            Some(cached) => cached.manifest = group.manifest.clone(),
            None => {
                self.groups.push(group.clone());
                self.groups.sort_by(|a, b| a.path.cmp(&b.path));
            }
        }
        info!(group = group.title(), path = %group.path.display(), "group saved");
        Ok(())
    }
}

fn collect_yaml_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), StoreError> {
    let walk_err = |source| StoreError::Walk {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(walk_err)? {
        let path = entry.map_err(walk_err)?.path();
        if path.is_dir() {
            collect_yaml_files(&path, out)?;
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        ) {
            out.push(path);
        }
    }
    Ok(())
}

fn load_group(path: &Path) -> Result<Option<RepositoriesGroup>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let probe: KindProbe = serde_yaml::from_str(&raw).map_err(parse_err)?;
    if probe.kind != GROUP_KIND {
        return Ok(None);
    }
    serde_yaml::from_str(&raw).map(Some).map_err(parse_err)
}
