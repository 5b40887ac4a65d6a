use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::io::ManifestStore;

use super::{options::UiOptions, runtime::App};

/// Entry point: loads the manifests under a directory and runs the terminal editor.
#[derive(Debug)]
pub struct GroupEditor {
    groups_dir: PathBuf,
    options: UiOptions,
}

impl GroupEditor {
    pub fn new(groups_dir: impl Into<PathBuf>) -> Self {
        Self {
            groups_dir: groups_dir.into(),
            options: UiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<()> {
        let GroupEditor {
            groups_dir,
            options,
        } = self;
        let store = ManifestStore::open(&groups_dir)
            .with_context(|| format!("failed to load groups from {}", groups_dir.display()))?;
        App::new(store, options).run()
    }
}
