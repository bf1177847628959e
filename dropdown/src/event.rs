use std::sync::Arc;

/// The `target` of a [`ChangeEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTarget {
    /// Field identifier the dropdown was mounted with.
    pub name: String,
    /// Id of the picked option.
    pub value: String,
}

/// Reported to the owning form when the user picks an option.
///
/// Shaped like a native input change so one form-wide handler can route
/// every field by `target.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }
}

/// Change callback held by props.
pub type OnChange = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Whether a widget used an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not handled; the host may route it elsewhere.
    Ignored,
    /// Handled; stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
