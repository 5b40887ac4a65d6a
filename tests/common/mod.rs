#![allow(dead_code)]

use std::path::PathBuf;

use repogroups::domain::{RepositoriesGroup, Repository};
use repogroups::{GroupFile, GroupStore, StoreError};

/// In-memory store; `fail_saves` makes every save return a write error.
#[derive(Default)]
pub struct MemoryStore {
    pub groups: Vec<GroupFile>,
    pub saved: Vec<GroupFile>,
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn with_groups(groups: Vec<GroupFile>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }
}

impl GroupStore for MemoryStore {
    fn list_groups(&self) -> &[GroupFile] {
        &self.groups
    }

    fn get_group(&self, name: &str) -> Option<GroupFile> {
        self.groups.iter().find(|group| group.title() == name).cloned()
    }

    fn save_group(&mut self, group: &GroupFile) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Write {
                path: group.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.saved.push(group.clone());
        Ok(())
    }
}

pub fn group(name: &str, repositories: &[&str]) -> GroupFile {
    let mut manifest = RepositoriesGroup {
        api_version: "github.example.io/v1alpha1".to_string(),
        kind: "RepositoriesGroup".to_string(),
        ..RepositoriesGroup::default()
    };
    manifest.metadata.name = name.to_string();
    manifest.spec.repositories = repositories
        .iter()
        .map(|repo| Repository::new(*repo, ""))
        .collect();
    GroupFile::new(PathBuf::from(format!("{name}.yaml")), manifest)
}
