/// Selection events
///
/// An event names the asset a sound play chose. `"default"` means the
/// synthesized fallback tone.
use crate::category::Category;

/// Name published when the fallback tone was played
pub const DEFAULT_SELECTION: &str = "default";

/// A sound play happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub category: Category,
    pub selected_name: String,
}

impl SelectionEvent {
    pub fn new(category: Category, selected_name: impl Into<String>) -> Self {
        Self {
            category,
            selected_name: selected_name.into(),
        }
    }

    /// Whether this event came from the fallback tone
    pub fn is_default(&self) -> bool {
        self.selected_name == DEFAULT_SELECTION
    }

    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        format!("Played {}/{}", self.category, self.selected_name)
    }
}
