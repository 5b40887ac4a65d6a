mod store;

pub use store::{GroupFile, GroupStore, ManifestStore, StoreError};
