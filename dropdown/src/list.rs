//! The selection list shared by both presentation modes.

use formdom::{Edges, Element, Size, Style};

use crate::config::DropdownConfig;
use crate::option::DropdownOption;
use crate::props::DropdownProps;
use crate::theme::Theme;

pub const CHECK_GLYPH: &str = "✓";
const SEARCH_GLYPH: &str = "⌕";

pub fn search_id(name: &str) -> String {
    format!("{name}-search")
}

pub fn entry_id(name: &str, index: usize) -> String {
    format!("{name}-option-{index}")
}

pub fn empty_id(name: &str) -> String {
    format!("{name}-empty")
}

/// Navigation state for one frame of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView<'a> {
    pub query: &'a str,
    /// Active entry, an index into the filtered list.
    pub cursor: usize,
    /// First visible entry.
    pub scroll: usize,
    /// Entries shown at once.
    pub visible: usize,
}

/// Move `scroll` the least amount that keeps `cursor` inside a window of
/// `visible` entries out of `len`.
pub fn scroll_to_cursor(scroll: usize, cursor: usize, visible: usize, len: usize) -> usize {
    let visible = visible.max(1);
    let scroll = if cursor < scroll {
        cursor
    } else if cursor >= scroll + visible {
        cursor + 1 - visible
    } else {
        scroll
    };
    scroll.min(len.saturating_sub(visible))
}

/// Rows the list occupies: the search row, then the entry window or the
/// no-results line.
pub fn content_height(show_search: bool, filtered_len: usize, visible: usize) -> u16 {
    let search = u16::from(show_search);
    let body = filtered_len.min(visible).max(1) as u16;
    search + body
}

/// Build the list element for `filtered`.
pub fn list_element(
    props: &DropdownProps,
    filtered: &[&DropdownOption],
    view: ListView<'_>,
    config: &DropdownConfig,
    theme: &Theme,
) -> Element {
    let name = props.name();
    let mut list = Element::col()
        .id(format!("{name}-list"))
        .width(Size::Fill);

    if props.is_search_shown() {
        list = list.child(search_row(props, view.query, theme));
    }

    if filtered.is_empty() {
        return list.child(
            Element::text(config.no_results_text.as_str())
                .id(empty_id(name))
                .width(Size::Fill)
                .padding(Edges::horizontal(1))
                .style(Style::new().foreground(theme.muted)),
        );
    }

    let end = (view.scroll + view.visible).min(filtered.len());
    let entries = filtered[view.scroll.min(end)..end]
        .iter()
        .enumerate()
        .map(|(offset, option)| {
            let index = view.scroll + offset;
            entry(props, option, index, index == view.cursor, theme)
        });
    list.children(entries)
}

fn search_row(props: &DropdownProps, query: &str, theme: &Theme) -> Element {
    let text = if query.is_empty() {
        Element::text(props.get_search_placeholder())
            .width(Size::Fill)
            .style(Style::new().foreground(theme.muted))
    } else {
        Element::text(query)
            .width(Size::Fill)
            .style(Style::new().foreground(theme.text))
    };

    Element::row()
        .id(search_id(props.name()))
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .padding(Edges::horizontal(1))
        .gap(1)
        .child(Element::text(SEARCH_GLYPH).style(Style::new().foreground(theme.muted)))
        .child(text)
}

fn entry(
    props: &DropdownProps,
    option: &DropdownOption,
    index: usize,
    active: bool,
    theme: &Theme,
) -> Element {
    let selected = props.is_selected(&option.id);

    let style = match (selected, active) {
        (true, true) => Style::new()
            .background(theme.primary)
            .foreground(theme.primary_foreground)
            .bold()
            .underline(),
        (true, false) => Style::new()
            .background(theme.primary)
            .foreground(theme.primary_foreground)
            .bold(),
        (false, true) => Style::new().background(theme.accent).foreground(theme.text),
        (false, false) => Style::new().foreground(theme.text),
    };
    let text_style = Style {
        background: None,
        border: Default::default(),
        ..style
    };

    Element::row()
        .id(entry_id(props.name(), index))
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .padding(Edges::horizontal(1))
        .gap(1)
        .clickable(true)
        .style(style)
        .child(Element::text(option.label.as_str()).width(Size::Fill).style(text_style))
        .child(Element::text(if selected { CHECK_GLYPH } else { " " }).style(text_style))
}
