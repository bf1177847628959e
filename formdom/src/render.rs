use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Backdrop, Border, Rgb};

/// An element queued for painting with the stacking key it inherited.
struct Paint<'a> {
    element: &'a Element,
    z_index: i16,
    order: usize,
}

/// Paint `root` into `buf`.
///
/// Elements are painted in ascending `z_index`, tree order breaking ties.
/// A child never paints below its parent: its effective z is the larger of
/// its own and the parent's.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut queue = Vec::new();
    collect(root, root.z_index, &mut queue);
    queue.sort_by_key(|p| (p.z_index, p.order));

    log::trace!("render_to_buffer: painting {} elements", queue.len());

    for paint in queue {
        if let Some(rect) = layout.get(&paint.element.id) {
            paint_element(paint.element, *rect, buf);
        }
    }
}

fn collect<'a>(element: &'a Element, parent_z: i16, queue: &mut Vec<Paint<'a>>) {
    let z_index = parent_z.max(element.z_index);
    queue.push(Paint {
        element,
        z_index,
        order: queue.len(),
    });
    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, z_index, queue);
        }
    }
}

fn paint_element(element: &Element, rect: Rect, buf: &mut Buffer) {
    if let Backdrop::Dim(amount) = element.backdrop {
        for cell in buf.cells_mut() {
            cell.fg = cell.fg.dim(amount);
            cell.bg = cell.bg.dim(amount);
        }
    }

    if let Some(bg) = element.style.background {
        let bg = bg.to_rgb();
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = buf.get_mut(x, y) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    paint_border(element, rect, buf);

    if let Content::Text(text) = &element.content {
        paint_text(text, element, rect, buf);
    }
}

fn foreground(element: &Element) -> Rgb {
    element
        .style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::WHITE)
}

fn paint_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let border = element.style.border.thickness();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let fg = foreground(element);
    let explicit_bg = element.style.background.map(|c| c.to_rgb());

    for (line_no, line) in text.lines().enumerate().take(inner.height as usize) {
        let y = inner.y + line_no as u16;
        let line = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;
        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x + width > inner.right() {
                break;
            }
            let bg = explicit_bg
                .or_else(|| buf.get(x, y).map(|c| c.bg))
                .unwrap_or(Rgb::BLACK);
            buf.set(
                x,
                y,
                Cell {
                    ch,
                    fg,
                    bg,
                    style: element.style.text_style,
                    wide_continuation: false,
                },
            );
            if width == 2 {
                buf.set(
                    x + 1,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        style: element.style.text_style,
                        wide_continuation: true,
                    },
                );
            }
            x += width;
        }
    }
}

fn paint_border(element: &Element, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = foreground(element);
    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.get_mut(x, y) {
            cell.ch = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    };

    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in (rect.x + 1)..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in (rect.y + 1)..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}
