//! Single-pass flex layout.
//!
//! Flow children are stacked along their parent's direction: `Fixed` and
//! `Auto` children take their size first, `Fill` children split what is left.
//! Absolute children leave the flow entirely and are placed against the
//! screen using whichever of `left`/`right` and `top`/`bottom` they set.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(root: &Element, screen: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if root.position == Position::Absolute {
        place_absolute(root, screen, &mut result);
    } else {
        let width = resolve_size(root.width, screen.width, root, true);
        let height = resolve_size(root.height, screen.height, root, false);
        let rect = Rect::new(screen.x, screen.y, width, height);
        result.insert(root.id.clone(), rect);
        layout_children(root, rect, screen, &mut result);
    }
    result
}

fn place_absolute(element: &Element, screen: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, screen.width, element, true);
    let height = resolve_size(element.height, screen.height, element, false);

    let x = match (element.left, element.right) {
        (Some(left), _) => screen.x.saturating_add(left),
        (None, Some(right)) => screen.right().saturating_sub(width.saturating_add(right)),
        (None, None) => screen.x,
    };
    let y = match (element.top, element.bottom) {
        (Some(top), _) => screen.y.saturating_add(top),
        (None, Some(bottom)) => screen.bottom().saturating_sub(height.saturating_add(bottom)),
        (None, None) => screen.y,
    };

    let rect = Rect::new(x, y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, screen, result);
}

fn layout_children(element: &Element, rect: Rect, screen: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let border = element.style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();

    let is_row = element.direction == Direction::Row;
    let main_total = if is_row { inner.width } else { inner.height };
    let cross_total = if is_row { inner.height } else { inner.width };
    let gaps = element.gap * flow.len().saturating_sub(1) as u16;

    let main_size = |child: &Element| if is_row { child.width } else { child.height };

    let mut taken = 0u16;
    let mut fill_count = 0u16;
    for &child in &flow {
        match main_size(child) {
            Size::Fill => fill_count += 1,
            _ => taken = taken.saturating_add(estimate_size(child, is_row)),
        }
    }
    let fill_share = main_total
        .saturating_sub(taken.saturating_add(gaps))
        .checked_div(fill_count)
        .unwrap_or(0);

    let mut offset = 0u16;
    for child in flow {
        let main = match main_size(child) {
            Size::Fill => fill_share,
            _ => estimate_size(child, is_row),
        };
        let main = main.min(main_total.saturating_sub(offset));

        let cross = match if is_row { child.height } else { child.width } {
            Size::Fixed(n) => n.min(cross_total),
            Size::Fill => cross_total,
            Size::Auto => estimate_size(child, !is_row).min(cross_total),
        };

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, screen, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        place_absolute(child, screen, result);
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Natural size of an element along one axis, ignoring the space on offer.
pub fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let declared = if is_width { element.width } else { element.height };
    if let Size::Fixed(n) = declared {
        return n;
    }

    let border = element.style.border.thickness() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                let count = flow.clone().count();
                let gaps = element.gap * count.saturating_sub(1) as u16;
                flow.map(|c| estimate_size(c, is_width)).sum::<u16>() + gaps
            } else {
                flow.map(|c| estimate_size(c, is_width)).max().unwrap_or(0)
            }
        }
    };

    content + padding + border
}
