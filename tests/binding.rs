use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use repogroups::domain::{RepositoriesGroup, Repository};
use repogroups::form::{
    ComponentKind, FocusMode, REPOSITORY_EDITABLE_FIELDS, TABS, UiEvent, bind, unresolved_paths,
};

#[test]
fn one_component_per_bindable_path_in_order() {
    let group = RepositoriesGroup::default();
    let features = &TABS[1];
    let components = bind(&group, features.field_paths);
    assert_eq!(components.len(), features.field_paths.len());
    assert!(components.iter().all(|c| c.kind() == ComponentKind::Checkbox));
    assert_eq!(components[0].label(), "Has Issues");
    assert_eq!(components[10].label(), "Vulnerability Alerts");
}

#[test]
fn nonexistent_and_complex_paths_are_omitted() {
    let group = RepositoriesGroup::default();
    let components = bind(
        &group,
        &["Spec.Visibility", "Spec.DoesNotExist", "Spec.Topics", "Spec.AutoInit"],
    );
    let labels: Vec<&str> = components.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Visibility", "Auto Init"]);

    let general = &TABS[0];
    assert_eq!(bind(&group, general.field_paths).len(), 6);
    let skipped: Vec<&str> = unresolved_paths::<RepositoriesGroup>(general.field_paths)
        .into_iter()
        .map(|u| u.path)
        .collect();
    assert_eq!(skipped, vec!["Spec.Topics", "Spec.ManagementPolicies"]);
}

#[test]
fn tabs_without_scalar_fields_bind_nothing() {
    let group = RepositoriesGroup::default();
    for tab in &TABS[3..7] {
        assert!(bind(&group, tab.field_paths).is_empty(), "{}", tab.name);
    }
}

#[test]
fn checkbox_toggle_writes_through() {
    let mut group = RepositoriesGroup::default();
    let mut components = bind(&group, &["Spec.HasWiki"]);
    let space = UiEvent::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

    components[0].handle_input(&mut group, &space, FocusMode::Editing);
    assert_eq!(group.spec.has_wiki, Some(true));
    components[0].handle_input(&mut group, &space, FocusMode::Editing);
    components[0].handle_input(&mut group, &space, FocusMode::Editing);
    assert_eq!(group.spec.has_wiki, Some(true), "two toggles restore the value");
}

#[test]
fn every_repository_editor_field_binds() {
    let repo = Repository::new("api", "");
    assert_eq!(
        bind(&repo, &REPOSITORY_EDITABLE_FIELDS).len(),
        REPOSITORY_EDITABLE_FIELDS.len()
    );
    assert!(unresolved_paths::<Repository>(&REPOSITORY_EDITABLE_FIELDS).is_empty());
}
