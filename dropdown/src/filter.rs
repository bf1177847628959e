//! Live narrowing of the option list by the search query.

use crate::option::DropdownOption;

/// Options whose label contains `query`, ignoring case.
///
/// The result keeps the input order. An empty query returns every option.
/// Whitespace and combining marks in the query are matched literally.
pub fn filter_options<'a>(options: &'a [DropdownOption], query: &str) -> Vec<&'a DropdownOption> {
    if query.is_empty() {
        return options.iter().collect();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&DropdownOption> = options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .collect();

    log::trace!(
        "filter_options: {:?} kept {} of {}",
        query,
        matches.len(),
        options.len()
    );
    matches
}
