#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dropdown::{ChangeEvent, Dropdown, DropdownProps};
use formdom::{layout, render_to_buffer, Buffer, Element, LayoutResult, Rect, Size};

/// Change events seen by a test handler.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<ChangeEvent>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, props: DropdownProps) -> DropdownProps {
        let events = Arc::clone(&self.events);
        props.on_change(move |event| events.lock().unwrap().push(event.clone()))
    }

    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

pub fn cities() -> DropdownProps {
    DropdownProps::new("location")
        .label("Location")
        .option("mumbai", "Mumbai")
        .option("pune", "Pune")
        .option("delhi", "Delhi")
}

pub fn bhk() -> DropdownProps {
    DropdownProps::new("bhk").options((1..=5).map(|n| (n.to_string(), format!("{n} BHK"))))
}

fn root(dropdown: &Dropdown, props: &DropdownProps, spacer: u16) -> Element {
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("spacer").height(Size::Fixed(spacer)))
        .child(dropdown.element(props, false))
        .child(
            Element::row()
                .id("other")
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .clickable(true),
        )
}

/// Render the dropdown the way a host does: build, lay out, record the
/// trigger position, then build once more with that position known.
pub fn frame_at(
    dropdown: &Dropdown,
    props: &DropdownProps,
    width: u16,
    height: u16,
    spacer: u16,
) -> (Element, LayoutResult) {
    let screen = Rect::from_size(width, height);
    let first = root(dropdown, props, spacer);
    let result = layout(&first, screen);
    dropdown.sync_layout(props, &result, screen);

    let second = root(dropdown, props, spacer);
    let result = layout(&second, screen);
    dropdown.sync_layout(props, &result, screen);
    dropdown.clear_dirty();
    (second, result)
}

pub fn frame(
    dropdown: &Dropdown,
    props: &DropdownProps,
    width: u16,
    height: u16,
) -> (Element, LayoutResult) {
    frame_at(dropdown, props, width, height, 0)
}

pub fn paint(root: &Element, result: &LayoutResult, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, result, &mut buf);
    buf
}

pub fn screen_text(buf: &Buffer) -> Vec<String> {
    (0..buf.height()).map(|y| buf.row_text(y)).collect()
}
