//! Field definitions and caller-owned values of the estimate form.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use dropdown::{ChangeEvent, DropdownOption, DropdownProps, OnChange};

/// Static description of one dropdown field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<DropdownOption>,
    pub required: bool,
    pub disabled: bool,
    pub show_search: bool,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            options: Vec::new(),
            required: true,
            disabled: false,
            show_search: true,
        }
    }

    /// Props for this frame, with the form's current value.
    pub fn props(&self, values: &FormValues) -> DropdownProps {
        DropdownProps::new(self.name)
            .label(self.label)
            .placeholder(self.placeholder)
            .search_placeholder(format!("Search {}...", self.label.to_lowercase()))
            .options(self.options.iter().cloned())
            .maybe_value(values.get(self.name))
            .on_change_handler(values.handler())
            .required(self.required)
            .disabled(self.disabled)
            .show_search(self.show_search)
    }
}

const LOCATIONS: &[&str] = &[
    "Whitefield",
    "Electronic City",
    "Koramangala",
    "Indiranagar",
    "HSR Layout",
    "Marathahalli",
    "Hebbal",
    "Jayanagar",
    "Yelahanka",
    "Bellandur",
    "Sarjapur Road",
    "Rajajinagar",
    "Banashankari",
    "Malleshwaram",
    "BTM Layout",
];

fn slug(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

pub fn estimate_fields() -> Vec<FieldSpec> {
    let mut location = FieldSpec::new("location", "Location", "Select location");
    location.options = LOCATIONS
        .iter()
        .map(|label| DropdownOption::new(slug(label), *label))
        .collect();

    let mut bhk = FieldSpec::new("bhk", "BHK", "Select BHK");
    bhk.options = (1..=5)
        .map(|n| DropdownOption::new(n.to_string(), format!("{n} BHK")))
        .collect();

    let mut bath = FieldSpec::new("bath", "Bathrooms", "Select bathrooms");
    bath.show_search = false;
    bath.options = (1..=4)
        .map(|n| DropdownOption::new(n.to_string(), n.to_string()))
        .collect();

    let mut furnishing = FieldSpec::new("furnishing", "Furnishing", "Coming soon");
    furnishing.required = false;
    furnishing.disabled = true;
    furnishing.options = vec![
        DropdownOption::new("unfurnished", "Unfurnished"),
        DropdownOption::new("semi", "Semi-furnished"),
        DropdownOption::new("full", "Furnished"),
    ];

    vec![location, bhk, bath, furnishing]
}

/// Selected values keyed by field name, written only by the change handler.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl FormValues {
    pub fn get(&self, name: &str) -> Option<String> {
        self.values.read().ok().and_then(|map| map.get(name).cloned())
    }

    pub fn apply(&self, event: &ChangeEvent) {
        log::info!("{} = {}", event.target.name, event.target.value);
        if let Ok(mut map) = self.values.write() {
            map.insert(event.target.name.clone(), event.target.value.clone());
        }
    }

    /// One handler shared by every field, routed by `target.name`.
    pub fn handler(&self) -> OnChange {
        let values = self.clone();
        Arc::new(move |event| values.apply(event))
    }
}
