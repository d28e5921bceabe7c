//! Domain layer - core data structures and types.
//!
//! This module contains the state the store owns:
//! - Theme colors and partial theme updates
//! - Opaque page-builder content
//! - The persisted snapshot and the mutation type

pub mod content;
pub mod mutation;
pub mod snapshot;
pub mod theme;

pub use content::BuilderContent;
pub use mutation::Mutation;
pub use snapshot::PersistedSnapshot;
pub use theme::{Rgb, ThemeField, ThemePatch, ThemeSettings};
