mod blink;
mod modal;
mod session;
mod strategy;

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::{RepositoriesGroup, Repository};
use crate::form::{
    FieldComponent, FocusMode, REPOSITORY_EDITABLE_FIELDS, TABS, UiEvent, bind, bind_records,
    unresolved_paths,
};
use crate::io::{GroupFile, GroupStore};
use crate::presentation::ConfigureView;

use super::screens::Transition;
use super::status::Message;
use blink::BlinkTimer;
use session::{GroupSession, TabState};
use strategy::{GenericTabStrategy, RepositoryTabStrategy, TabStrategy};

/// Tabbed editor over one group manifest.
///
/// Every tab owns its components, built once here; input and rendering go to
/// the strategy of the active tab.
pub struct ConfigureGroup {
    session: GroupSession,
    strategies: Vec<Box<dyn TabStrategy>>,
}

impl ConfigureGroup {
    pub fn new(group: GroupFile, blink_interval: Duration) -> Self {
        report_unbindable_fields();

        let mut tabs = Vec::with_capacity(TABS.len());
        let mut strategies: Vec<Box<dyn TabStrategy>> = Vec::with_capacity(TABS.len());
        for model in &TABS {
            let components: Vec<Box<dyn FieldComponent<RepositoriesGroup>>> = if model.group_level
            {
                strategies.push(Box::new(GenericTabStrategy));
                bind(&group.manifest, model.field_paths)
            } else {
                strategies.push(Box::new(RepositoryTabStrategy::default()));
                model
                    .field_paths
                    .iter()
                    .filter_map(|path| bind_records::<RepositoriesGroup>(path))
                    .map(|list| Box::new(list) as Box<dyn FieldComponent<RepositoriesGroup>>)
                    .collect()
            };
            debug!(tab = model.name, fields = components.len(), "tab bound");
            tabs.push(TabState { model, components });
        }
        info!(group = group.title(), path = %group.path.display(), "editing group");

        let mut session = GroupSession {
            tabs,
            active_tab: 0,
            focused_index: 0,
            mode: FocusMode::Navigation,
            group,
            message: None,
            blink: BlinkTimer::new(blink_interval),
        };
        session.focus_current();
        Self {
            session,
            strategies,
        }
    }

    /// Feeds one event to the active tab. Any key press clears the previous message.
    pub fn handle_event(&mut self, event: &UiEvent, store: &mut dyn GroupStore) -> Transition {
        if matches!(event, UiEvent::Key(_)) {
            self.session.message = None;
        }
        let active = self.session.active_tab;
        self.strategies[active].update(&mut self.session, event, store)
    }

    /// Fires the blink tick when it is due.
    pub fn tick(&mut self, now: Instant, store: &mut dyn GroupStore) {
        if self.session.blink.take_due(now) {
            let active = self.session.active_tab;
            self.strategies[active].update(&mut self.session, &UiEvent::Tick(now), store);
        }
    }

    pub fn blink_deadline(&self) -> Option<Instant> {
        self.session.blink.deadline()
    }

    pub fn advance_focus(&mut self) {
        self.session.advance_focus();
    }

    pub fn retreat_focus(&mut self) {
        self.session.retreat_focus();
    }

    pub fn switch_tab(&mut self, delta: i32) {
        self.session.switch_tab(delta);
    }

    pub fn save(&mut self, store: &mut dyn GroupStore) {
        self.session.save(store);
    }

    /// Appends `repo` to the group in memory and shows it selected on the repository tab.
    pub fn add_repository(&mut self, repo: Repository) {
        let name = repo.name.clone();
        let repositories = &mut self.session.group.manifest.spec.repositories;
        repositories.push(repo);
        let index = repositories.len() - 1;

        if let Some(tab) = self.session.tabs.iter().position(|tab| !tab.model.group_level) {
            self.session.select_tab(tab);
            let record = &self.session.group.manifest;
            for component in &mut self.session.tabs[tab].components {
                component.collection_set_selected(record, index);
            }
        }
        self.session.message = Some(Message::info(format!(
            "Repository '{name}' added to group '{}'. Press Ctrl+S to save.",
            self.session.group.title()
        )));
    }

    pub fn active_tab(&self) -> usize {
        self.session.active_tab
    }

    pub fn tab_count(&self) -> usize {
        self.session.tabs.len()
    }

    pub fn focused_index(&self) -> usize {
        self.session.focused_index
    }

    pub fn mode(&self) -> FocusMode {
        self.session.mode
    }

    pub fn component_count(&self, tab: usize) -> usize {
        self.session
            .tabs
            .get(tab)
            .map_or(0, |tab| tab.components.len())
    }

    /// Number of components of `tab` that currently report focus.
    pub fn focused_count(&self, tab: usize) -> usize {
        self.session.tabs.get(tab).map_or(0, |tab| {
            tab.components
                .iter()
                .filter(|component| component.is_focused())
                .count()
        })
    }

    pub fn modal_open(&self) -> bool {
        self.strategies[self.session.active_tab].modal_open()
    }

    pub fn group(&self) -> &GroupFile {
        &self.session.group
    }

    pub fn message(&self) -> Option<&Message> {
        self.session.message.as_ref()
    }

    pub fn view(&self) -> ConfigureView {
        let strategy = &self.strategies[self.session.active_tab];
        ConfigureView {
            title: format!(
                "Configure group: {} ({})",
                self.session.group.title(),
                self.session.group.description()
            ),
            tabs: self.session.tabs.iter().map(|tab| tab.model.name).collect(),
            active_tab: self.session.active_tab,
            body: strategy.body(&self.session),
            status: strategy.status_text(&self.session),
        }
    }
}

fn report_unbindable_fields() {
    for model in TABS.iter().filter(|model| model.group_level) {
        for unresolved in unresolved_paths::<RepositoriesGroup>(model.field_paths) {
            debug!(
                tab = model.name,
                path = unresolved.path,
                reason = %unresolved.reason,
                "field has no editor"
            );
        }
    }
    for unresolved in unresolved_paths::<Repository>(&REPOSITORY_EDITABLE_FIELDS) {
        debug!(
            path = unresolved.path,
            reason = %unresolved.reason,
            "repository field has no editor"
        );
    }
}
