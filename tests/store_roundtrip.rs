use std::fs;

use repogroups::domain::{Record, RepositoriesGroup, Slot};
use repogroups::{GroupStore, ManifestStore};

const MANIFEST: &str = r#"apiVersion: github.example.io/v1alpha1
kind: RepositoriesGroup
metadata:
  name: platform
  labels:
    team: core
spec:
  deletionPolicy: Orphan
  providerConfigRef:
    name: github
  repositories:
    - name: api
      description: Public API
      topics: [rust]
"#;

#[test]
fn edits_survive_save_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("platform.yaml"), MANIFEST).expect("write manifest");

    let mut store = ManifestStore::open(dir.path()).expect("open store");
    let mut group = store.get_group("platform").expect("platform group");
    let Some(entry) = RepositoriesGroup::entry("Spec.HasIssues") else {
        panic!("Spec.HasIssues missing from schema");
    };
    let Slot::Flag(flag) = &entry.slot else {
        panic!("Spec.HasIssues should be a flag");
    };
    *(flag.slot)(&mut group.manifest) = Some(true);
    group.manifest.spec.visibility = "private".to_string();
    store.save_group(&group).expect("save");

    assert_eq!(store.get_group("platform"), Some(group.clone()));

    let reloaded = ManifestStore::open(dir.path()).expect("reopen store");
    let reread = reloaded.get_group("platform").expect("platform group");
    assert_eq!(reread.manifest, group.manifest);
    assert_eq!(reread.manifest.spec.has_issues, Some(true));
    assert_eq!(reread.manifest.spec.visibility, "private");
    assert!(reread.manifest.spec.extra.contains_key("providerConfigRef"));
    assert_eq!(reread.manifest.metadata.labels.get("team").map(String::as_str), Some("core"));
    assert_eq!(reread.manifest.spec.repositories[0].topics, vec!["rust".to_string()]);
}

#[test]
fn save_to_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("platform.yaml"), MANIFEST).expect("write manifest");
    let mut store = ManifestStore::open(dir.path()).expect("open store");
    let mut group = store.get_group("platform").expect("platform group");
    group.path = dir.path().join("missing").join("platform.yaml");
    let err = store.save_group(&group).expect_err("parent directory does not exist");
    assert!(err.to_string().contains("failed to write"));
}
