/// Static descriptor of one editor tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabModel {
    pub name: &'static str,
    pub field_paths: &'static [&'static str],
    /// `false` for the tab that lists repositories instead of group fields.
    pub group_level: bool,
}

pub static TABS: [TabModel; 8] = [
    TabModel {
        name: "Group: General",
        field_paths: &[
            "Spec.Visibility",
            "Spec.DefaultBranch",
            "Spec.Topics",
            "Spec.ArchiveOnDestroy",
            "Spec.AutoInit",
            "Spec.IsTemplate",
            "Spec.ManagementPolicies",
            "Spec.DeletionPolicy",
        ],
        group_level: true,
    },
    TabModel {
        name: "Group: Features",
        field_paths: &[
            "Spec.HasIssues",
            "Spec.HasDownloads",
            "Spec.HasWiki",
            "Spec.HasDiscussions",
            "Spec.AllowAutoMerge",
            "Spec.AllowSquashMerge",
            "Spec.AllowMergeCommit",
            "Spec.AllowRebaseMerge",
            "Spec.AllowUpdateBranch",
            "Spec.DeleteBranchOnMerge",
            "Spec.VulnerabilityAlerts",
        ],
        group_level: true,
    },
    TabModel {
        name: "Group: Merge Messages",
        field_paths: &[
            "Spec.MergeCommitMessage",
            "Spec.MergeCommitTitle",
            "Spec.SquashMergeCommitMessage",
            "Spec.SquashMergeCommitTitle",
        ],
        group_level: true,
    },
    TabModel {
        name: "Group: Protections",
        field_paths: &["Spec.Protections"],
        group_level: true,
    },
    TabModel {
        name: "Group: Security",
        field_paths: &["Spec.SecurityAndAnalysis"],
        group_level: true,
    },
    TabModel {
        name: "Group: Autolinks",
        field_paths: &["Spec.AutolinkReferences"],
        group_level: true,
    },
    TabModel {
        name: "Group: Permissions",
        field_paths: &["Spec.Permissions"],
        group_level: true,
    },
    TabModel {
        name: "Repositories",
        field_paths: &["Spec.Repositories"],
        group_level: false,
    },
];

/// Fields of a single repository offered by the drill-down editor, in focus order.
pub const REPOSITORY_EDITABLE_FIELDS: [&str; 7] = [
    "Name",
    "Description",
    "Archived",
    "Visibility",
    "DefaultBranch",
    "AllowAutoMerge",
    "DeleteBranchOnMerge",
];
