use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::domain::{BuilderContent, Mutation, PersistedSnapshot, ThemePatch, ThemeSettings};
use super::infrastructure::storage::KeyValueStorage;
use super::services::persistence::{NoopPersister, PersistHook, StoragePersister};
use super::settings::StoreConfig;

/// Single store instance shared by UI components on one thread.
pub type SharedStore = Rc<RefCell<Store>>;

/// Owner of the theme and builder-content slots.
///
/// Construct one per process and pass it by reference (or as a
/// [`SharedStore`]) to whatever needs it. Every mutation goes through
/// [`Store::commit`], which applies the change and then hands the full
/// snapshot to the persistence hook. Nothing here can fail from the caller's
/// point of view.
pub struct Store {
    theme: ThemeSettings,
    builder_content: Option<BuilderContent>,
    hook: Box<dyn PersistHook>,
}

impl Store {
    /// Rehydrate from `storage` under the configured key and persist back into it.
    ///
    /// A missing or corrupt snapshot leaves both slots at their defaults.
    pub fn open<S>(storage: S, config: &StoreConfig) -> Self
    where
        S: KeyValueStorage + 'static,
    {
        let persister = StoragePersister::new(storage, config.storage_key.as_str())
            .pretty(config.pretty_snapshots);
        let initial = persister.restore().unwrap_or_default();
        Self::with_hook(initial, persister)
    }

    /// Open the file-backed store described by the user's config file
    pub fn open_default() -> Self {
        let config = StoreConfig::load();
        Self::open(config.file_storage(), &config)
    }

    pub fn with_hook(initial: PersistedSnapshot, hook: impl PersistHook + 'static) -> Self {
        Self {
            theme: initial.theme,
            builder_content: initial.builder_content,
            hook: Box::new(hook),
        }
    }

    /// Defaults, persisted nowhere
    pub fn ephemeral() -> Self {
        Self::with_hook(PersistedSnapshot::default(), NoopPersister)
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    /// Merge `patch` into the theme; unspecified colors keep their values.
    pub fn update_theme(&mut self, patch: ThemePatch) {
        self.commit(Mutation::SetTheme(patch));
    }

    /// Last saved builder content, `None` until the first save
    pub fn builder_content(&self) -> Option<&BuilderContent> {
        self.builder_content.as_ref()
    }

    /// Replace the builder content wholesale (last write wins).
    pub fn save_builder_content(&mut self, content: BuilderContent) {
        self.commit(Mutation::SetBuilderContent(content));
    }

    /// Apply a mutation, then persist the full state.
    pub fn commit(&mut self, mutation: Mutation) {
        let name = mutation.name();
        match mutation {
            Mutation::SetTheme(patch) => self.theme.merge(patch),
            Mutation::SetBuilderContent(content) => self.builder_content = Some(content),
        }
        tracing::debug!(mutation = name, "committed");

        let snapshot = self.snapshot();
        self.hook.persist(&snapshot);
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            theme: self.theme.clone(),
            builder_content: self.builder_content.clone(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::ephemeral()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("theme", &self.theme)
            .field("builder_content", &self.builder_content)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::ThemeField;
    use crate::app::infrastructure::storage::MemoryStorage;
    use serde_json::json;

    /// Records every snapshot it is handed
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<PersistedSnapshot>>>);

    impl PersistHook for Recorder {
        fn persist(&mut self, snapshot: &PersistedSnapshot) {
            self.0.borrow_mut().push(snapshot.clone());
        }
    }

    fn recorded_store() -> (Store, Recorder) {
        let recorder = Recorder::default();
        let store = Store::with_hook(PersistedSnapshot::default(), recorder.clone());
        (store, recorder)
    }

    #[test]
    fn test_fresh_store_defaults() {
        let store = Store::open(MemoryStorage::new(), &StoreConfig::default());
        assert_eq!(store.theme(), &ThemeSettings::default());
        assert_eq!(store.builder_content(), None);
    }

    #[test]
    fn test_update_theme_merges() {
        let mut store = Store::ephemeral();
        store.update_theme(ThemePatch::new().with(ThemeField::Primary, "#000000"));
        store.update_theme(ThemePatch::new().with(ThemeField::Accent, "#111111"));

        let theme = store.theme();
        assert_eq!(theme.primary_color, "#000000");
        assert_eq!(theme.accent_color, "#111111");
        assert_eq!(theme.secondary_color, "#10B981");
        assert_eq!(theme.background_color, "#F3F4F6");
        assert_eq!(theme.text_color, "#1F2937");
    }

    #[test]
    fn test_every_mutation_persists_full_snapshot() {
        let (mut store, recorder) = recorded_store();
        store.save_builder_content(BuilderContent::from("<p>draft</p>"));
        store.update_theme(ThemePatch::new().with(ThemeField::Text, "#222222"));

        let written = recorder.0.borrow();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].builder_content, Some(BuilderContent::from("<p>draft</p>")));
        assert_eq!(written[0].theme, ThemeSettings::default());
        // Theme change still carries the content slot
        assert_eq!(written[1].builder_content, Some(BuilderContent::from("<p>draft</p>")));
        assert_eq!(written[1].theme.text_color, "#222222");
        assert_eq!(written[1], store.snapshot());
    }

    #[test]
    fn test_saving_same_content_twice() {
        let mut store = Store::ephemeral();
        let content = BuilderContent::new(json!({"pages": [{"frames": []}]}));

        store.save_builder_content(content.clone());
        assert_eq!(store.builder_content(), Some(&content));
        store.save_builder_content(content.clone());
        assert_eq!(store.builder_content(), Some(&content));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = Store::ephemeral();
        store.save_builder_content(BuilderContent::new(json!({"a": 1})));
        store.save_builder_content(BuilderContent::new(json!({"b": 2})));
        assert_eq!(
            store.builder_content(),
            Some(&BuilderContent::new(json!({"b": 2})))
        );
    }

    #[test]
    fn test_commit_directly() {
        let (mut store, recorder) = recorded_store();
        store.commit(Mutation::SetTheme(ThemePatch::new()));
        assert_eq!(store.theme(), &ThemeSettings::default());
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_shared_store() {
        let shared = Store::ephemeral().into_shared();
        let other = Rc::clone(&shared);

        other
            .borrow_mut()
            .update_theme(ThemePatch::new().with(ThemeField::Background, "#000000"));
        assert_eq!(shared.borrow().theme().background_color, "#000000");
    }

    #[test]
    fn test_debug_omits_hook() {
        let debug = format!("{:?}", Store::ephemeral());
        assert!(debug.starts_with("Store"));
        assert!(debug.contains("theme"));
    }
}
