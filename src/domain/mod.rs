mod manifest;
mod schema;

pub use manifest::{
    AutolinkReference, GROUP_KIND, Metadata, Permission, Protection, PullRequestReview,
    Repository, RepositoriesGroup, RepositoriesGroupSpec, SecurityAndAnalysis, Status,
    StatusCheck,
};
pub use schema::{
    Annotation, FieldEntry, FieldKind, FlagSlot, OptionalTextSlot, Record, RecordsSlot, Slot,
    TextSlot, bool_to_str, preview_lines,
};
