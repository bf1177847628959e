use std::fmt;
use std::sync::Arc;

use crate::event::{ChangeEvent, OnChange};
use crate::option::DropdownOption;

/// Caller-owned inputs of a dropdown, rebuilt by the form every frame.
///
/// The widget only reads these; the selected value in particular stays
/// with the caller and changes only through the caller's own change
/// handler.
#[derive(Clone)]
pub struct DropdownProps {
    name: String,
    options: Vec<DropdownOption>,
    value: Option<String>,
    on_change: Option<OnChange>,
    label: Option<String>,
    placeholder: String,
    search_placeholder: String,
    required: bool,
    disabled: bool,
    show_search: bool,
}

impl DropdownProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            value: None,
            on_change: None,
            label: None,
            placeholder: "Select...".to_string(),
            search_placeholder: "Search...".to_string(),
            required: false,
            disabled: false,
            show_search: true,
        }
    }

    pub fn options<O: Into<DropdownOption>>(mut self, options: impl IntoIterator<Item = O>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn option(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(DropdownOption::new(id, label));
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn maybe_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn on_change(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Share one handler between several fields.
    pub fn on_change_handler(mut self, handler: OnChange) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Show the required marker. Purely cosmetic.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_search(mut self, show: bool) -> Self {
        self.show_search = show;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn get_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn get_search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_search_shown(&self) -> bool {
        self.show_search
    }

    /// Whether `id` is the current value. `""` is never selected.
    pub fn is_selected(&self, id: &str) -> bool {
        !id.is_empty() && self.value.as_deref() == Some(id)
    }

    pub(crate) fn emit_change(&self, value: &str) {
        let event = ChangeEvent::new(self.name.clone(), value);
        match &self.on_change {
            Some(handler) => handler(&event),
            None => log::debug!("Dropdown {:?}: no change handler for {:?}", self.name, value),
        }
    }
}

impl fmt::Debug for DropdownProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownProps")
            .field("name", &self.name)
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .field("label", &self.label)
            .field("required", &self.required)
            .field("disabled", &self.disabled)
            .field("show_search", &self.show_search)
            .finish()
    }
}
