use crate::app::domain::BuilderContent;
use crate::app::state::Store;

/// The two calls the host needs from the embedded page-builder widget.
pub trait EditorWidget {
    /// Current authored document
    fn export_document(&self) -> BuilderContent;

    /// Replace what the widget is showing with `content`
    fn load_document(&mut self, content: &BuilderContent);
}

/// Moves documents between the widget and the store on explicit save/load.
/// Keeps no copy of the content itself.
pub struct EditorHost<W> {
    widget: W,
}

impl<W: EditorWidget> EditorHost<W> {
    pub fn new(widget: W) -> Self {
        Self { widget }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn into_widget(self) -> W {
        self.widget
    }

    /// Export the widget's document and save it as the store's builder content.
    pub fn save_to_store(&self, store: &mut Store) {
        store.save_builder_content(self.widget.export_document());
    }

    /// Push the saved document into the widget.
    /// Returns `false` (and leaves the widget alone) when nothing was saved yet.
    pub fn load_from_store(&mut self, store: &Store) -> bool {
        match store.builder_content() {
            Some(content) => {
                self.widget.load_document(content);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Store;
    use serde_json::json;

    #[derive(Default)]
    struct FakeWidget {
        document: Option<BuilderContent>,
        loads: usize,
    }

    impl EditorWidget for FakeWidget {
        fn export_document(&self) -> BuilderContent {
            self.document
                .clone()
                .unwrap_or_else(|| BuilderContent::from(""))
        }

        fn load_document(&mut self, content: &BuilderContent) {
            self.document = Some(content.clone());
            self.loads += 1;
        }
    }

    #[test]
    fn test_load_without_saved_content() {
        let store = Store::ephemeral();
        let mut host = EditorHost::new(FakeWidget::default());
        assert!(!host.load_from_store(&store));
        assert_eq!(host.widget().loads, 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = Store::ephemeral();
        let doc = BuilderContent::new(json!({"components": [{"type": "text"}]}));

        let author = EditorHost::new(FakeWidget {
            document: Some(doc.clone()),
            loads: 0,
        });
        author.save_to_store(&mut store);
        assert_eq!(store.builder_content(), Some(&doc));

        let mut viewer = EditorHost::new(FakeWidget::default());
        assert!(viewer.load_from_store(&store));
        assert_eq!(viewer.widget().document.as_ref(), Some(&doc));
        assert_eq!(viewer.into_widget().loads, 1);
    }
}
