use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the clickable element painted topmost at the given coordinates.
///
/// Uses the same stacking order as the renderer, so an overlay that covers
/// a sibling's area wins the hit even though it comes earlier in the tree.
/// Disabled elements are skipped.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let mut best: Option<((i16, usize), &Element)> = None;
    let mut order = 0;
    visit(layout, root, root.z_index, x, y, &mut order, &mut best);
    best.map(|(_, element)| element.id.clone())
}

fn visit<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    parent_z: i16,
    x: u16,
    y: u16,
    order: &mut usize,
    best: &mut Option<((i16, usize), &'a Element)>,
) {
    let z_index = parent_z.max(element.z_index);
    let key = (z_index, *order);
    *order += 1;

    let inside = layout.get(&element.id).is_some_and(|r| r.contains(x, y));
    if inside && element.clickable && !element.disabled && best.is_none_or(|(k, _)| key > k) {
        *best = Some((key, element));
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            visit(layout, child, z_index, x, y, order, best);
        }
    }
}
