use thiserror::Error;
use tracing::debug;

use crate::domain::{FieldKind, Record, Slot};

use super::components::{
    CheckboxComponent, FieldComponent, RepositoriesComponent, TextBinding, TextInputComponent,
};

/// Why a field path produced no component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindSkip {
    #[error("segment `{0}` does not resolve")]
    UnknownSegment(String),
    #[error("no presentation annotation")]
    Unannotated,
    #[error("{kind} annotation cannot edit a {shape} slot")]
    ShapeMismatch {
        kind: FieldKind,
        shape: &'static str,
    },
    #[error("repository lists are bound separately")]
    RecordList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPath {
    pub path: &'static str,
    pub reason: BindSkip,
}

/// Builds one component per bindable path, in input order. Paths that cannot be
/// bound are skipped.
pub fn bind<R: Record>(root: &R, paths: &[&str]) -> Vec<Box<dyn FieldComponent<R>>> {
    paths
        .iter()
        .filter_map(|path| match bind_path(root, path) {
            Ok(component) => Some(component),
            Err(reason) => {
                debug!(path, %reason, "field path skipped");
                None
            }
        })
        .collect()
}

/// Dedicated entry point for a repository list slot.
pub fn bind_records<R: Record>(path: &str) -> Option<RepositoriesComponent<R>> {
    let entry = resolve::<R>(path).ok()?;
    let annotation = entry.annotation?;
    match (&entry.slot, annotation.kind) {
        (Slot::Records(slot), FieldKind::Repository) => {
            Some(RepositoriesComponent::new(annotation.label, *slot))
        }
        _ => None,
    }
}

/// Paths from `paths` that `bind` would drop, with the reason.
pub fn unresolved_paths<R: Record>(paths: &[&'static str]) -> Vec<UnresolvedPath> {
    paths
        .iter()
        .filter_map(|path| {
            let reason = match resolve::<R>(path) {
                Ok(entry) => classify(entry).err()?,
                Err(reason) => reason,
            };
            Some(UnresolvedPath { path, reason })
        })
        .collect()
}

fn bind_path<R: Record>(root: &R, path: &str) -> Result<Box<dyn FieldComponent<R>>, BindSkip> {
    let entry = resolve::<R>(path)?;
    let (label, slot) = classify(entry)?;
    let component: Box<dyn FieldComponent<R>> = match slot {
        Slot::Flag(flag) => Box::new(CheckboxComponent::new(label, *flag)),
        Slot::Text(text) => Box::new(TextInputComponent::new(
            label,
            TextBinding::Plain(*text),
            root,
        )),
        Slot::OptionalText(text) => Box::new(TextInputComponent::new(
            label,
            TextBinding::Optional(*text),
            root,
        )),
        Slot::Records(_) | Slot::Opaque => return Err(BindSkip::RecordList),
    };
    Ok(component)
}

/// Walks the dotted segments so a failure names the first segment that is missing.
fn resolve<R: Record>(path: &str) -> Result<&'static crate::domain::FieldEntry<R>, BindSkip> {
    let mut end = 0;
    for segment in path.split('.') {
        end += segment.len();
        if R::entry(&path[..end]).is_none() {
            return Err(BindSkip::UnknownSegment(segment.to_string()));
        }
        end += 1;
    }
    R::entry(path).ok_or_else(|| BindSkip::UnknownSegment(path.to_string()))
}

fn classify<R: Record>(
    entry: &'static crate::domain::FieldEntry<R>,
) -> Result<(&'static str, &'static Slot<R>), BindSkip> {
    let annotation = entry.annotation.ok_or(BindSkip::Unannotated)?;
    match (annotation.kind, &entry.slot) {
        (FieldKind::Checkbox, Slot::Flag(_))
        | (FieldKind::Text, Slot::Text(_))
        | (FieldKind::Text, Slot::OptionalText(_)) => Ok((annotation.label, &entry.slot)),
        (FieldKind::Repository, Slot::Records(_)) => Err(BindSkip::RecordList),
        (kind, slot) => Err(BindSkip::ShapeMismatch {
            kind,
            shape: slot.shape(),
        }),
    }
}
