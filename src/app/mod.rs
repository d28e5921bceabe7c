//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (theme, builder content, snapshot, mutations)
//! - `services/` - Persistence hooks and the page-builder widget binding
//! - `infrastructure/` - Key-value storage backends, error
//! - `settings.rs` - Store configuration
//! - `state.rs` - The store itself

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use domain::{BuilderContent, Mutation, PersistedSnapshot, Rgb, ThemeField, ThemePatch, ThemeSettings};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use services::editor_host::{EditorHost, EditorWidget};
pub use services::persistence::{NoopPersister, PersistHook, StoragePersister};
pub use settings::StoreConfig;
pub use state::{SharedStore, Store};
