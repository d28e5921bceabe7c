use super::content::BuilderContent;
use super::theme::ThemePatch;

/// Every state change the store accepts.
/// Public operations build one of these and hand it to `Store::commit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetTheme(ThemePatch),
    SetBuilderContent(BuilderContent),
}

impl Mutation {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTheme(_) => "set_theme",
            Self::SetBuilderContent(_) => "set_builder_content",
        }
    }
}
