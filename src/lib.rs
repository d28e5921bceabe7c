//! Theme and page-builder content store.
//!
//! A [`Store`] holds the page theme and the document authored in the
//! page-builder widget, writes a full JSON snapshot to durable storage after
//! every change, and restores it on startup.

pub mod app;

pub use app::{
    AppError, BuilderContent, EditorHost, EditorWidget, FileStorage, KeyValueStorage,
    MemoryStorage, Mutation, NoopPersister, PersistHook, PersistedSnapshot, Result, Rgb,
    SharedStore, StoragePersister, Store, StoreConfig, ThemeField, ThemePatch, ThemeSettings,
};
