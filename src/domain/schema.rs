use std::fmt;

use super::manifest::{Repository, RepositoriesGroup};

/// Presentation kind declared next to a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Checkbox,
    Text,
    Repository,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Checkbox => write!(f, "checkbox"),
            FieldKind::Text => write!(f, "text"),
            FieldKind::Repository => write!(f, "repository"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Typed access to a boolean that may be absent from the manifest.
pub struct FlagSlot<R> {
    pub read: fn(&R) -> Option<bool>,
    pub slot: fn(&mut R) -> &mut Option<bool>,
}

pub struct TextSlot<R> {
    pub read: fn(&R) -> &str,
    pub slot: fn(&mut R) -> &mut String,
}

pub struct OptionalTextSlot<R> {
    pub read: fn(&R) -> Option<&str>,
    pub slot: fn(&mut R) -> &mut Option<String>,
}

pub struct RecordsSlot<R> {
    pub read: fn(&R) -> &[Repository],
    pub slot: fn(&mut R) -> &mut Vec<Repository>,
}

/// Storage shape of a schema entry. `Opaque` marks lists, maps and nested records
/// that generic binding never turns into components.
pub enum Slot<R> {
    Flag(FlagSlot<R>),
    Text(TextSlot<R>),
    OptionalText(OptionalTextSlot<R>),
    Records(RecordsSlot<R>),
    Opaque,
}

impl<R> Slot<R> {
    pub fn shape(&self) -> &'static str {
        match self {
            Slot::Flag(_) => "optional bool",
            Slot::Text(_) => "string",
            Slot::OptionalText(_) => "optional string",
            Slot::Records(_) => "repository list",
            Slot::Opaque => "opaque",
        }
    }
}

// fn pointers are Copy regardless of R, derives would demand R: Copy.
impl<R> Clone for FlagSlot<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for FlagSlot<R> {}
impl<R> Clone for TextSlot<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for TextSlot<R> {}
impl<R> Clone for OptionalTextSlot<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for OptionalTextSlot<R> {}
impl<R> Clone for RecordsSlot<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for RecordsSlot<R> {}

pub struct FieldEntry<R> {
    pub path: &'static str,
    pub annotation: Option<Annotation>,
    pub slot: Slot<R>,
}

/// A manifest type whose fields are addressable by dotted path.
pub trait Record: Sized + 'static {
    fn schema() -> &'static [FieldEntry<Self>];

    fn entry(path: &str) -> Option<&'static FieldEntry<Self>> {
        Self::schema().iter().find(|entry| entry.path == path)
    }
}

macro_rules! flag {
    ($root:ty, $path:literal, $label:literal, $($field:ident).+) => {{
        fn read(record: &$root) -> Option<bool> {
            record.$($field).+
        }
        fn slot(record: &mut $root) -> &mut Option<bool> {
            &mut record.$($field).+
        }
        FieldEntry {
            path: $path,
            annotation: Some(Annotation {
                label: $label,
                kind: FieldKind::Checkbox,
            }),
            slot: Slot::Flag(FlagSlot { read, slot }),
        }
    }};
}

macro_rules! text {
    ($root:ty, $path:literal, $label:literal, $($field:ident).+) => {{
        fn read(record: &$root) -> &str {
            &record.$($field).+
        }
        fn slot(record: &mut $root) -> &mut String {
            &mut record.$($field).+
        }
        FieldEntry {
            path: $path,
            annotation: Some(Annotation {
                label: $label,
                kind: FieldKind::Text,
            }),
            slot: Slot::Text(TextSlot { read, slot }),
        }
    }};
}

macro_rules! opaque {
    ($path:literal) => {
        FieldEntry {
            path: $path,
            annotation: None,
            slot: Slot::Opaque,
        }
    };
}

static GROUP_FIELDS: [FieldEntry<RepositoriesGroup>; 34] = [
    text!(RepositoriesGroup, "Metadata.Name", "Name", metadata.name),
    opaque!("Metadata.Labels"),
    text!(
        RepositoriesGroup,
        "Spec.DeletionPolicy",
        "Deletion Policy",
        spec.deletion_policy
    ),
    opaque!("Spec.ManagementPolicies"),
    {
        fn read(record: &RepositoriesGroup) -> &[Repository] {
            &record.spec.repositories
        }
        fn slot(record: &mut RepositoriesGroup) -> &mut Vec<Repository> {
            &mut record.spec.repositories
        }
        FieldEntry {
            path: "Spec.Repositories",
            annotation: Some(Annotation {
                label: "Repositories",
                kind: FieldKind::Repository,
            }),
            slot: Slot::Records(RecordsSlot { read, slot }),
        }
    },
    opaque!("Spec.Permissions"),
    opaque!("Spec.Topics"),
    opaque!("Spec.Protections"),
    opaque!("Spec.SecurityAndAnalysis"),
    text!(
        RepositoriesGroup,
        "Spec.DefaultBranch",
        "Default Branch",
        spec.default_branch
    ),
    text!(RepositoriesGroup, "Spec.Visibility", "Visibility", spec.visibility),
    flag!(RepositoriesGroup, "Spec.HasIssues", "Has Issues", spec.has_issues),
    flag!(
        RepositoriesGroup,
        "Spec.HasDownloads",
        "Has Downloads",
        spec.has_downloads
    ),
    flag!(RepositoriesGroup, "Spec.HasWiki", "Has Wiki", spec.has_wiki),
    flag!(
        RepositoriesGroup,
        "Spec.AllowAutoMerge",
        "Allow Auto-Merge",
        spec.allow_auto_merge
    ),
    flag!(
        RepositoriesGroup,
        "Spec.AllowSquashMerge",
        "Allow Squash Merge",
        spec.allow_squash_merge
    ),
    flag!(
        RepositoriesGroup,
        "Spec.DeleteBranchOnMerge",
        "Delete Branch on Merge",
        spec.delete_branch_on_merge
    ),
    flag!(RepositoriesGroup, "Spec.AutoInit", "Auto Init", spec.auto_init),
    flag!(
        RepositoriesGroup,
        "Spec.ArchiveOnDestroy",
        "Archive on Destroy",
        spec.archive_on_destroy
    ),
    flag!(
        RepositoriesGroup,
        "Spec.HasDiscussions",
        "Has Discussions",
        spec.has_discussions
    ),
    flag!(
        RepositoriesGroup,
        "Spec.AllowUpdateBranch",
        "Allow Update Branch",
        spec.allow_update_branch
    ),
    flag!(
        RepositoriesGroup,
        "Spec.AllowMergeCommit",
        "Allow Merge Commit",
        spec.allow_merge_commit
    ),
    flag!(
        RepositoriesGroup,
        "Spec.AllowRebaseMerge",
        "Allow Rebase Merge",
        spec.allow_rebase_merge
    ),
    flag!(RepositoriesGroup, "Spec.IsTemplate", "Is Template", spec.is_template),
    text!(
        RepositoriesGroup,
        "Spec.MergeCommitMessage",
        "Merge Commit Message",
        spec.merge_commit_message
    ),
    text!(
        RepositoriesGroup,
        "Spec.MergeCommitTitle",
        "Merge Commit Title",
        spec.merge_commit_title
    ),
    text!(
        RepositoriesGroup,
        "Spec.SquashMergeCommitMessage",
        "Squash Commit Message",
        spec.squash_merge_commit_message
    ),
    text!(
        RepositoriesGroup,
        "Spec.SquashMergeCommitTitle",
        "Squash Commit Title",
        spec.squash_merge_commit_title
    ),
    flag!(
        RepositoriesGroup,
        "Spec.VulnerabilityAlerts",
        "Vulnerability Alerts",
        spec.vulnerability_alerts
    ),
    opaque!("Spec.AutolinkReferences"),
    opaque!("ApiVersion"),
    opaque!("Kind"),
    opaque!("Metadata"),
    opaque!("Spec"),
];

static REPOSITORY_FIELDS: [FieldEntry<Repository>; 11] = [
    text!(Repository, "Name", "Name", name),
    text!(Repository, "Description", "Description", description),
    opaque!("Permissions"),
    opaque!("Topics"),
    flag!(Repository, "Archived", "Archived", archived),
    text!(Repository, "Visibility", "Visibility", visibility),
    text!(Repository, "DefaultBranch", "Default Branch", default_branch),
    flag!(
        Repository,
        "AllowAutoMerge",
        "Allow Auto-Merge",
        allow_auto_merge
    ),
    flag!(
        Repository,
        "DeleteBranchOnMerge",
        "Delete Branch on Merge",
        delete_branch_on_merge
    ),
    opaque!("SecurityAndAnalysis"),
    opaque!("Protections"),
];

impl Record for RepositoriesGroup {
    fn schema() -> &'static [FieldEntry<Self>] {
        &GROUP_FIELDS
    }
}

impl Record for Repository {
    fn schema() -> &'static [FieldEntry<Self>] {
        &REPOSITORY_FIELDS
    }
}

pub fn bool_to_str(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Summary of the annotated scalar fields that carry a value.
pub fn preview_lines<R: Record>(record: &R) -> Vec<String> {
    R::schema()
        .iter()
        .filter_map(|entry| {
            let label = entry.annotation?.label;
            let value = match &entry.slot {
                Slot::Flag(flag) => (flag.read)(record).map(bool_to_str)?.to_string(),
                Slot::Text(text) => {
                    let value = (text.read)(record);
                    if value.is_empty() {
                        return None;
                    }
                    value.to_string()
                }
                Slot::OptionalText(text) => {
                    let value = (text.read)(record)?;
                    if value.is_empty() {
                        return None;
                    }
                    value.to_string()
                }
                Slot::Records(_) | Slot::Opaque => return None,
            };
            Some(format!("{label}: {value}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_paths_are_unique() {
        let paths: Vec<&str> = RepositoriesGroup::schema().iter().map(|e| e.path).collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(paths.len(), sorted.len());
    }

    #[test]
    fn flag_slot_writes_into_nested_spec() {
        let mut group = RepositoriesGroup::default();
        let Some(entry) = RepositoriesGroup::entry("Spec.HasWiki") else {
            panic!("missing entry");
        };
        let Slot::Flag(flag) = &entry.slot else {
            panic!("expected flag slot");
        };
        *(flag.slot)(&mut group) = Some(true);
        assert_eq!(group.spec.has_wiki, Some(true));
        assert_eq!((flag.read)(&group), Some(true));
    }

    #[test]
    fn preview_omits_unset_fields() {
        let mut repo = Repository::new("api", "");
        repo.archived = Some(false);
        repo.visibility = "internal".to_string();
        assert_eq!(
            preview_lines(&repo),
            vec!["Name: api", "Archived: no", "Visibility: internal"]
        );
    }
}
