use formdom::{Border, Edges, Element, Size, Style};

use crate::option::find_option;
use crate::props::DropdownProps;
use crate::theme::Theme;

pub const CHEVRON_GLYPH: &str = "↕";
pub const REQUIRED_MARKER: &str = " *";

/// Text shown in the closed trigger: the selected option's label, else the
/// placeholder.
pub fn display_text(props: &DropdownProps) -> &str {
    find_option(props.get_options(), props.get_value())
        .map(|option| option.label.as_str())
        .unwrap_or(props.get_placeholder())
}

/// Optional label line above the trigger.
pub fn label_line(props: &DropdownProps, theme: &Theme) -> Option<Element> {
    let label = props.get_label()?;
    let mut line = Element::row()
        .id(format!("{}-label", props.name()))
        .height(Size::Fixed(1))
        .child(Element::text(label).style(Style::new().foreground(theme.text).bold()));
    if props.is_required() {
        line = line.child(
            Element::text(REQUIRED_MARKER).style(Style::new().foreground(theme.destructive)),
        );
    }
    Some(line)
}

/// The trigger button itself. Its id is the field name.
pub fn trigger_element(props: &DropdownProps, focused: bool, open: bool, theme: &Theme) -> Element {
    let disabled = props.is_disabled();
    let has_value = find_option(props.get_options(), props.get_value()).is_some();

    let border_color = if !disabled && (focused || open) {
        theme.primary
    } else {
        theme.border
    };
    let mut text_style = Style::new().foreground(if has_value { theme.text } else { theme.muted });
    let mut chevron_style = Style::new().foreground(theme.muted);
    if disabled {
        text_style = text_style.dim();
        chevron_style = chevron_style.dim();
    }

    Element::row()
        .id(props.name())
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .padding(Edges::horizontal(1))
        .gap(1)
        .style(
            Style::new()
                .background(theme.background)
                .foreground(border_color)
                .border(Border::Rounded),
        )
        .clickable(!disabled)
        .focusable(!disabled)
        .disabled(disabled)
        .child(
            Element::text(display_text(props))
                .width(Size::Fill)
                .style(text_style),
        )
        .child(Element::text(CHEVRON_GLYPH).style(chevron_style))
}
