/// One choice offered by a dropdown.
///
/// `id` is what the change event reports, `label` is what the user sees and
/// what the search query matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub id: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl<I: Into<String>, L: Into<String>> From<(I, L)> for DropdownOption {
    fn from((id, label): (I, L)) -> Self {
        Self::new(id, label)
    }
}

/// The option a value refers to. The first option with a matching id wins;
/// `None` and `""` never match.
pub fn find_option<'a>(
    options: &'a [DropdownOption],
    value: Option<&str>,
) -> Option<&'a DropdownOption> {
    let value = value.filter(|v| !v.is_empty())?;
    options.iter().find(|option| option.id == value)
}
