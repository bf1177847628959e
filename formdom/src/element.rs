use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Backdrop, Direction, Edges, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// One node of a frame.
///
/// Elements are plain data rebuilt every frame; identity across frames is
/// carried by `id`, which layout and hit testing key on. Widgets give the
/// elements they need to find again a stable id and leave the rest to the
/// generated ones.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub direction: Direction,
    pub gap: u16,

    // Absolute elements are placed against the screen, not the parent.
    pub position: Position,
    pub top: Option<u16>,
    pub left: Option<u16>,
    pub right: Option<u16>,
    pub bottom: Option<u16>,
    pub z_index: i16,

    pub style: Style,
    pub backdrop: Backdrop,

    pub clickable: bool,
    pub focusable: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            position: Position::Static,
            top: None,
            left: None,
            right: None,
            bottom: None,
            z_index: 0,
            style: Style::default(),
            backdrop: Backdrop::None,
            clickable: false,
            focusable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn width(self, width: Size) -> Self {
        Self { width, ..self }
    }

    pub fn height(self, height: Size) -> Self {
        Self { height, ..self }
    }

    pub fn padding(self, padding: Edges) -> Self {
        Self { padding, ..self }
    }

    pub fn gap(self, gap: u16) -> Self {
        Self { gap, ..self }
    }

    pub fn position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub fn top(self, cells: u16) -> Self {
        Self { top: Some(cells), ..self }
    }

    pub fn left(self, cells: u16) -> Self {
        Self { left: Some(cells), ..self }
    }

    pub fn right(self, cells: u16) -> Self {
        Self { right: Some(cells), ..self }
    }

    pub fn bottom(self, cells: u16) -> Self {
        Self { bottom: Some(cells), ..self }
    }

    pub fn z_index(self, z_index: i16) -> Self {
        Self { z_index, ..self }
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn backdrop(self, backdrop: Backdrop) -> Self {
        Self { backdrop, ..self }
    }

    pub fn clickable(self, clickable: bool) -> Self {
        Self { clickable, ..self }
    }

    pub fn focusable(self, focusable: bool) -> Self {
        Self { focusable, ..self }
    }

    /// Disabled elements never become click targets.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}
