use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key paths the core reads. The localization object may carry many more
/// UI-facing strings; those are never consulted here.
pub mod keys {
    pub const QUIZ_DEFAULT_TITLE: &str = "quiz.defaultTitle";
    pub const SECTION_DEFAULT_TITLE: &str = "section.defaultTitle";
}

/// Read-only view over a caller-supplied localization object.
///
/// The object is treated as an opaque nested map queried by exact dotted
/// key path. A missing object, missing key, or non-string leaf all degrade
/// to `None`; callers fall back to the empty string, never to a hardcoded
/// language-specific default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localization {
    strings: Map<String, Value>,
}

impl Localization {
    pub fn new(strings: Map<String, Value>) -> Self {
        Self { strings }
    }

    /// Wrap a JSON value; non-object values yield an empty lookup.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(strings) => Self { strings },
            _ => Self::default(),
        }
    }

    /// Look up a dotted key path, e.g. `quiz.defaultTitle`.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.strings.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }
}
