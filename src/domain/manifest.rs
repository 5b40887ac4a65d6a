use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Discriminator carried by every manifest this tool edits.
pub const GROUP_KIND: &str = "RepositoriesGroup";

/// Root resource of a group manifest, shaped after the CRD it is applied as.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoriesGroup {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: RepositoriesGroupSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoriesGroupSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deletion_policy: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub management_policies: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protections: Vec<Protection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_and_analysis: Vec<SecurityAndAnalysis>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_branch: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_downloads: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_on_destroy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_discussions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_update_branch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub merge_commit_message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub merge_commit_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub squash_merge_commit_message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub squash_merge_commit_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability_alerts: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub autolink_references: Vec<AutolinkReference>,
    /// Keys this tool does not model, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_and_analysis: Vec<SecurityAndAnalysis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protections: Vec<Protection>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Repository {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub team: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collaborator: String,
    #[serde(default)]
    pub permission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAndAnalysis {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advanced_security: Vec<Status>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secret_scanning: Vec<Status>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secret_scanning_push_protection: Vec<Status>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enforce_admins: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub require_conversation_resolution: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub require_signed_commits: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_status_checks: Vec<StatusCheck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_pull_request_reviews: Vec<PullRequestReview>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub contexts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestReview {
    #[serde(default)]
    pub require_code_owner_reviews: bool,
    #[serde(default)]
    pub dismiss_stale_reviews: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub restrict_dismissals: bool,
    #[serde(default)]
    pub required_approving_review_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dismissal_restrictions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutolinkReference {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_alphanumeric: Option<bool>,
    #[serde(default)]
    pub key_prefix: String,
    #[serde(default)]
    pub target_url_template: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
apiVersion: github.example.io/v1alpha1
kind: RepositoriesGroup
metadata:
  name: platform
spec:
  visibility: private
  hasIssues: true
  providerConfigRef:
    name: default
  repositories:
    - name: api
      description: Public API
      archived: false
    - name: web
"#;

    #[test]
    fn parses_camel_case_manifest() {
        let group: RepositoriesGroup = serde_yaml::from_str(SAMPLE).expect("manifest");
        assert_eq!(group.kind, GROUP_KIND);
        assert_eq!(group.metadata.name, "platform");
        assert_eq!(group.spec.visibility, "private");
        assert_eq!(group.spec.has_issues, Some(true));
        assert_eq!(group.spec.has_wiki, None);
        assert_eq!(group.spec.repositories.len(), 2);
        assert_eq!(group.spec.repositories[0].archived, Some(false));
    }

    #[test]
    fn unknown_spec_keys_survive_serialization() {
        let group: RepositoriesGroup = serde_yaml::from_str(SAMPLE).expect("manifest");
        assert!(group.spec.extra.contains_key("providerConfigRef"));
        let encoded = serde_yaml::to_string(&group).expect("encode");
        assert!(encoded.contains("providerConfigRef"));
        assert!(!encoded.contains("hasWiki"), "unset flags stay omitted");
    }
}
