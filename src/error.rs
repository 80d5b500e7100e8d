//! Widget error taxonomy.
//!
//! Fatal errors abort the operation that produced them; everything else
//! (an optional sub-element missing from the markup) is graceful feature
//! omission, not an error.

/// Errors surfaced by widget lifecycle and interaction handling.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The attach target is missing from the document or is not an element
    /// node. Attach aborts without side effects.
    #[error("a document element must be given to initialize this widget")]
    InvalidElement,

    /// The component registry has been shut down; no lifecycle or dispatch
    /// call can be serviced.
    #[error("widget host registry is not available")]
    MissingHost,

    /// A required related element could not be found in the markup. Fatal
    /// for the operation that needed it.
    #[error("required element for role `{0}` was not found")]
    MissingTarget(String),

    /// Detach was called for a root that has no attached widget.
    #[error("widget is not attached")]
    NotAttached,
}

impl WidgetError {
    /// Shorthand for a [`WidgetError::MissingTarget`] with the given role.
    pub fn missing(role: impl Into<String>) -> Self {
        Self::MissingTarget(role.into())
    }
}
