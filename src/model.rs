mod artifact;
mod error;
mod input;
mod resolve;
mod selection;
mod settings;
mod view;

#[cfg(test)]
mod tests;

pub use artifact::{ArtifactKind, ArtifactSet, ArtifactSlot};
pub use error::{Result, StoreError};
pub use input::InputCollection;
pub use resolve::{ResolvedInput, display_handle, resolve_selection};
pub use selection::Selection;
pub use settings::{PipelineSettings, SettingsField};
pub use view::{ViewField, ViewSettings};
