mod common;

use common::{cities, frame, frame_at, paint, screen_text, Recorder};
use dropdown::presentation::overlay_rect;
use dropdown::{
    Dropdown, DropdownConfig, EventResult, MountContext, OverlayHost, SheetHost, SurfaceHost,
    Theme, Viewport,
};
use formdom::{find_element, hit_test, Event, MouseButton, Rect};

fn click_at(root: &formdom::Element, result: &formdom::LayoutResult, x: u16, y: u16) -> Event {
    Event::Click {
        target: hit_test(result, root, x, y),
        x,
        y,
        button: MouseButton::Left,
    }
}

// ============================================================================
// Overlay geometry
// ============================================================================

#[test]
fn test_overlay_below_when_it_fits() {
    let screen = Rect::from_size(40, 20);
    let anchor = Rect::new(2, 3, 20, 3);

    assert_eq!(overlay_rect(screen, anchor, 6), Rect::new(2, 6, 20, 6));
}

#[test]
fn test_overlay_flips_above() {
    let screen = Rect::from_size(40, 20);
    let anchor = Rect::new(2, 15, 20, 3);

    assert_eq!(overlay_rect(screen, anchor, 6), Rect::new(2, 9, 20, 6));
}

#[test]
fn test_overlay_shrinks_on_roomier_side() {
    let screen = Rect::from_size(40, 10);

    assert_eq!(
        overlay_rect(screen, Rect::new(0, 3, 30, 3), 8),
        Rect::new(0, 6, 30, 4)
    );
    assert_eq!(
        overlay_rect(screen, Rect::new(0, 5, 30, 3), 8),
        Rect::new(0, 0, 30, 5)
    );
}

#[test]
fn test_overlay_clamped_to_screen_width() {
    let screen = Rect::from_size(40, 20);

    assert_eq!(overlay_rect(screen, Rect::new(30, 0, 20, 3), 4).width, 10);
}

#[test]
fn test_host_capabilities() {
    assert!(!OverlayHost.is_modal());
    assert!(OverlayHost.dismiss_on_outside_pointer());
    assert!(SheetHost.is_modal());
    assert!(!SheetHost.dismiss_on_outside_pointer());
}

#[test]
fn test_sheet_height_budget() {
    let theme = Theme::default();
    let cx = MountContext {
        name: "location",
        screen: Rect::from_size(40, 20),
        anchor: Rect::new(0, 0, 40, 3),
        content_height: 4,
        sheet_max_height: 0.8,
        theme: &theme,
    };

    // 16 rows less the border and the handle.
    assert_eq!(SheetHost.max_content_rows(&cx), 13);
    // Above and below the trigger, less the border.
    assert_eq!(OverlayHost.max_content_rows(&cx), 15);
}

// ============================================================================
// Overlay in a frame
// ============================================================================

#[test]
fn test_overlay_anchored_under_trigger() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities();
    dropdown.activate(&props);

    let (_, result) = frame(&dropdown, &props, 40, 20);

    // Label row, then the 3-row trigger, then the panel: border, search
    // row, three entries, border.
    assert_eq!(result["location"], Rect::new(0, 1, 40, 3));
    assert_eq!(result["location-panel"], Rect::new(0, 4, 40, 6));
    assert_eq!(result["location-search"].y, 5);
    assert_eq!(result["location-option-0"], Rect::new(1, 6, 38, 1));
    assert_eq!(result["location-option-2"].y, 8);
}

#[test]
fn test_overlay_opens_above_near_bottom() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities();
    dropdown.activate(&props);

    let (_, result) = frame_at(&dropdown, &props, 40, 20, 15);

    let trigger = result["location"];
    let panel = result["location-panel"];
    assert_eq!(trigger.y, 16);
    assert_eq!(panel.bottom(), trigger.y);
}

#[test]
fn test_overlay_outside_press_falls_through() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities();
    dropdown.activate(&props);
    let (root, result) = frame(&dropdown, &props, 40, 20);

    // Inside the panel but not on an entry.
    let inside = click_at(&root, &result, 0, 6);
    assert_eq!(dropdown.handle_event(&inside, &props), EventResult::Consumed);
    assert!(dropdown.is_open());

    // The "other" row sits right under the field in the flow, but the panel
    // covers it; press below the panel instead.
    let outside = click_at(&root, &result, 5, 15);
    assert_eq!(outside, Event::Click {
        target: None,
        x: 5,
        y: 15,
        button: MouseButton::Left,
    });
    assert_eq!(dropdown.handle_event(&outside, &props), EventResult::Ignored);
    assert!(!dropdown.is_open());
}

#[test]
fn test_overlay_entry_click_picks() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let recorder = Recorder::new();
    let props = recorder.attach(cities());
    dropdown.activate(&props);
    let (root, result) = frame(&dropdown, &props, 40, 20);

    let press = click_at(&root, &result, 10, 7);
    dropdown.handle_event(&press, &props);

    assert_eq!(recorder.events()[0].target.value, "pune");
    assert!(!dropdown.is_open());
}

#[test]
fn test_list_window_scrolls_with_cursor() {
    let viewport = Viewport::new(800);
    let config = DropdownConfig::new().max_visible_entries(2);
    let dropdown = Dropdown::with_config(&viewport, config);
    let props = cities();
    dropdown.activate(&props);

    let (root, _) = frame(&dropdown, &props, 40, 20);
    assert!(find_element(&root, "location-option-0").is_some());
    assert!(find_element(&root, "location-option-2").is_none());

    dropdown.handle_event(
        &Event::Key {
            key: formdom::Key::End,
            modifiers: Default::default(),
        },
        &props,
    );
    let (root, _) = frame(&dropdown, &props, 40, 20);
    assert!(find_element(&root, "location-option-0").is_none());
    assert!(find_element(&root, "location-option-1").is_some());
    assert!(find_element(&root, "location-option-2").is_some());
}

// ============================================================================
// Sheet
// ============================================================================

fn open_sheet() -> (Viewport, Dropdown, Recorder, dropdown::DropdownProps) {
    let viewport = Viewport::new(400);
    let dropdown = Dropdown::mount(&viewport);
    let recorder = Recorder::new();
    let props = recorder.attach(cities());
    dropdown.activate(&props);
    (viewport, dropdown, recorder, props)
}

#[test]
fn test_sheet_pinned_to_bottom() {
    let (_viewport, dropdown, _, props) = open_sheet();

    let (_, result) = frame(&dropdown, &props, 40, 20);

    assert_eq!(result["location-scrim"], Rect::new(0, 0, 40, 20));
    // Border, handle, search row, three entries, border.
    assert_eq!(result["location-panel"], Rect::new(0, 13, 40, 7));
    assert_eq!(result["location-handle"].y, 14);
    assert_eq!(result["location-option-0"].y, 16);
}

#[test]
fn test_sheet_scrim_dismisses() {
    let (_viewport, dropdown, recorder, props) = open_sheet();
    let (root, result) = frame(&dropdown, &props, 40, 20);

    // The trigger is under the scrim; the press must not reach it.
    let press = click_at(&root, &result, 2, 2);
    assert_eq!(press, Event::Click {
        target: Some("location-scrim".to_string()),
        x: 2,
        y: 2,
        button: MouseButton::Left,
    });

    assert_eq!(dropdown.handle_event(&press, &props), EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_sheet_handle_dismisses() {
    let (_viewport, dropdown, recorder, props) = open_sheet();
    let (root, result) = frame(&dropdown, &props, 40, 20);

    let press = click_at(&root, &result, 20, 14);
    assert_eq!(dropdown.handle_event(&press, &props), EventResult::Consumed);

    assert!(!dropdown.is_open());
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_sheet_consumes_unrouted_presses() {
    let (_viewport, dropdown, _, props) = open_sheet();

    let press = Event::Click {
        target: Some("elsewhere".to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };

    assert_eq!(dropdown.handle_event(&press, &props), EventResult::Consumed);
    assert!(!dropdown.is_open());
}

#[test]
fn test_sheet_entry_click_picks() {
    let (_viewport, dropdown, recorder, props) = open_sheet();
    let (root, result) = frame(&dropdown, &props, 40, 20);

    let press = click_at(&root, &result, 5, 18);
    dropdown.handle_event(&press, &props);

    assert_eq!(recorder.events()[0].target.value, "delhi");
}

#[test]
fn test_sheet_dims_form_behind() {
    let (_viewport, dropdown, _, props) = open_sheet();
    let (root, result) = frame(&dropdown, &props, 40, 20);

    let buf = paint(&root, &result, 40, 20);
    let text = screen_text(&buf);

    assert!(text[0].starts_with("Location"));
    let label = buf.get(0, 0).unwrap();
    let undimmed = Theme::default().text.to_rgb();
    assert!(label.fg.r < undimmed.r);
    assert!(text[14].contains("━━━━━━"));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_no_results_placeholder_rendered() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities();
    dropdown.activate(&props);
    dropdown.set_query("x");

    let (root, result) = frame(&dropdown, &props, 40, 20);
    let text = screen_text(&paint(&root, &result, 40, 20));

    assert!(find_element(&root, "location-empty").is_some());
    assert!(find_element(&root, "location-option-0").is_none());
    assert!(text[6].contains("No results found."), "{text:#?}");
    assert!(text[5].contains('x'));
}

#[test]
fn test_custom_no_results_text() {
    let viewport = Viewport::new(800);
    let config = DropdownConfig::new().no_results_text("Nothing here");
    let dropdown = Dropdown::with_config(&viewport, config);
    let props = cities();
    dropdown.activate(&props);
    dropdown.set_query("zz");

    let (root, result) = frame(&dropdown, &props, 40, 20);
    let text = screen_text(&paint(&root, &result, 40, 20));

    assert!(text.iter().any(|row| row.contains("Nothing here")));
}

#[test]
fn test_check_only_on_selected_entries() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities().value("pune");
    dropdown.activate(&props);

    let (root, result) = frame(&dropdown, &props, 40, 20);
    let text = screen_text(&paint(&root, &result, 40, 20));

    assert!(!text[6].contains('✓'), "{}", text[6]);
    assert!(text[7].contains("Pune") && text[7].contains('✓'), "{}", text[7]);
    assert!(!text[8].contains('✓'), "{}", text[8]);
}

#[test]
fn test_search_placeholder_shown_when_query_empty() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities().search_placeholder("Find a city");
    dropdown.activate(&props);

    let (root, result) = frame(&dropdown, &props, 40, 20);
    let text = screen_text(&paint(&root, &result, 40, 20));

    assert!(text[5].contains("Find a city"));
}

#[test]
fn test_list_needs_a_laid_out_trigger() {
    let viewport = Viewport::new(800);
    let dropdown = Dropdown::mount(&viewport);
    let props = cities();
    dropdown.activate(&props);
    dropdown.clear_dirty();

    let element = dropdown.element(&props, false);

    assert!(find_element(&element, "location-panel").is_none());
    assert!(dropdown.is_dirty());
}
