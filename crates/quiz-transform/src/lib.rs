//! Pure conversions between the hierarchical Quiz DSL and the flat editor
//! block sequence. Both directions are total: they never fail, never
//! validate, and produce best-effort output for malformed input.
//! Validation is the caller's separate responsibility.

mod forward;
mod markdown;
mod reverse;

pub use forward::dsl_to_blocks;
pub use markdown::{markdown_to_rich, rich_to_markdown};
pub use reverse::blocks_to_dsl;

use quiz_model::Localization;

/// Context threaded through both transform directions. Localization is an
/// optional, read-only lookup; when absent every placeholder degrades to
/// the empty string.
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    pub localization: Option<Localization>,
}

impl TransformContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = Some(localization);
        self
    }

    /// Localized placeholder for the given key path, or the empty string.
    /// Never a hardcoded language-specific default.
    pub(crate) fn placeholder(&self, key: &str) -> String {
        self.localization
            .as_ref()
            .and_then(|localization| localization.lookup(key))
            .unwrap_or_default()
            .to_string()
    }
}
