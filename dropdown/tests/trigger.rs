mod common;

use common::{bhk, cities, frame, paint, screen_text};
use dropdown::trigger::display_text;
use dropdown::{find_option, Dropdown, DropdownOption, DropdownProps, Viewport};
use formdom::find_element;

#[test]
fn test_bhk_label_for_value() {
    let props = DropdownProps::new("bhk")
        .option("1", "1 BHK")
        .option("2", "2 BHK")
        .placeholder("Select BHK");

    assert_eq!(display_text(&props.clone().value("2")), "2 BHK");
    assert_eq!(display_text(&props.clone().value("")), "Select BHK");
    assert_eq!(display_text(&props.clone().value("7")), "Select BHK");
    assert_eq!(display_text(&props), "Select BHK");
}

#[test]
fn test_default_placeholder() {
    assert_eq!(display_text(&bhk()), "Select...");
}

#[test]
fn test_first_duplicate_wins() {
    let options = vec![
        DropdownOption::new("a", "First"),
        DropdownOption::new("a", "Second"),
    ];

    assert_eq!(find_option(&options, Some("a")).map(|o| o.label.as_str()), Some("First"));
    assert_eq!(find_option(&options, Some("")), None);
    assert_eq!(find_option(&options, None), None);
}

#[test]
fn test_empty_id_is_never_selected() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = DropdownProps::new("bhk")
        .option("", "Any")
        .option("2", "2 BHK")
        .placeholder("Select BHK")
        .value("");

    assert_eq!(find_option(props.get_options(), props.get_value()), None);
    assert!(!props.is_selected(""));
    assert_eq!(display_text(&props), "Select BHK");

    dropdown.activate(&props);
    let (root, _) = frame(&dropdown, &props, 40, 20);
    for id in ["bhk-option-0", "bhk-option-1"] {
        let entry = find_element(&root, id).unwrap();
        assert_eq!(entry.child_elements()[1].text_content(), Some(" "), "{id}");
    }
}

#[test]
fn test_trigger_renders_label_and_chevron() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = bhk().value("2");

    let (root, result) = frame(&dropdown, &props, 30, 6);
    let text = screen_text(&paint(&root, &result, 30, 6));

    assert_eq!(text[0], format!("╭{}╮", "─".repeat(28)));
    assert!(text[1].starts_with("│ 2 BHK"));
    assert!(text[1].ends_with("↕ │"));
}

#[test]
fn test_long_label_truncated() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = DropdownProps::new("loc")
        .option("ecity", "Electronic City Phase Two")
        .value("ecity");

    let (root, result) = frame(&dropdown, &props, 16, 4);
    let text = screen_text(&paint(&root, &result, 16, 4));

    // 16 columns: border, padding, ten label cells, gap, chevron, padding, border.
    assert_eq!(text[1], "│ Electroni… ↕ │");
}

#[test]
fn test_label_and_required_marker() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities().required(true);

    let (root, result) = frame(&dropdown, &props, 30, 6);
    let text = screen_text(&paint(&root, &result, 30, 6));

    assert!(text[0].starts_with("Location *"));
}

#[test]
fn test_disabled_trigger_is_inert() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities().disabled(true);

    let (root, result) = frame(&dropdown, &props, 30, 6);
    let trigger = find_element(&root, "location").unwrap();

    assert!(!trigger.clickable);
    assert!(!trigger.focusable);
    assert_eq!(formdom::hit_test(&result, &root, 5, 2), None);
    assert!(trigger.child_elements()[0].style.text_style.dim);
}

#[test]
fn test_focused_trigger_highlighted() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = bhk();
    let theme = *dropdown.theme();

    let focused = dropdown.element(&props, true);
    let blurred = dropdown.element(&props, false);

    let border = |root: &formdom::Element| find_element(root, "bhk").and_then(|t| t.style.foreground);
    assert_eq!(border(&focused), Some(theme.primary));
    assert_eq!(border(&blurred), Some(theme.border));
}
