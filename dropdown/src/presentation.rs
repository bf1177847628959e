//! The two containers a dropdown list can be mounted in.
//!
//! Wide viewports get an [`OverlayHost`]: a panel anchored to the trigger
//! that closes when the pointer is pressed anywhere else. Narrow viewports
//! get a [`SheetHost`]: a modal panel pinned to the bottom of the screen over
//! a dimming scrim. Both receive the same list element; neither knows how
//! entries are filtered or picked.

use formdom::{Backdrop, Border, Edges, Element, Position, Rect, Size, Style};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Overlay,
    Sheet,
}

/// Chooses a presentation mode from the breakpoint.
pub trait BreakpointPolicy: Send + Sync {
    fn mode(&self, is_wide: bool) -> PresentationMode;
}

/// Overlay on wide viewports, sheet on narrow ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideOverlayPolicy;

impl BreakpointPolicy for WideOverlayPolicy {
    fn mode(&self, is_wide: bool) -> PresentationMode {
        if is_wide {
            PresentationMode::Overlay
        } else {
            PresentationMode::Sheet
        }
    }
}

/// Everything a host needs to place the list for one frame.
#[derive(Debug, Clone, Copy)]
pub struct MountContext<'a> {
    /// Field name; element ids are derived from it.
    pub name: &'a str,
    pub screen: Rect,
    /// The trigger's rect.
    pub anchor: Rect,
    /// Rows the list wants, search row included.
    pub content_height: u16,
    /// Fraction of the screen a sheet may cover.
    pub sheet_max_height: f32,
    pub theme: &'a Theme,
}

/// A container the selection list can be mounted in.
pub trait SurfaceHost {
    fn mode(&self) -> PresentationMode;

    /// Whether the container blocks input to everything behind it.
    fn is_modal(&self) -> bool;

    /// Whether a press outside the widget closes the list.
    fn dismiss_on_outside_pointer(&self) -> bool;

    /// Rows available to the list content in this frame.
    fn max_content_rows(&self, cx: &MountContext<'_>) -> u16;

    /// Wrap `list` in the container's chrome.
    fn mount(&self, list: Element, cx: &MountContext<'_>) -> Element;
}

pub fn host_for(mode: PresentationMode) -> &'static dyn SurfaceHost {
    match mode {
        PresentationMode::Overlay => &OverlayHost,
        PresentationMode::Sheet => &SheetHost,
    }
}

pub fn panel_id(name: &str) -> String {
    format!("{name}-panel")
}

pub fn scrim_id(name: &str) -> String {
    format!("{name}-scrim")
}

pub fn handle_id(name: &str) -> String {
    format!("{name}-handle")
}

// ============================================================================
// Overlay
// ============================================================================

pub const OVERLAY_Z_INDEX: i16 = 100;

/// Panel anchored to the trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayHost;

/// Where an overlay of `height` rows goes: below the anchor when it fits,
/// otherwise above, otherwise on the roomier side, shrunk to fit.
pub fn overlay_rect(screen: Rect, anchor: Rect, height: u16) -> Rect {
    let below = screen.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(screen.y);

    let (y, height) = if height <= below {
        (anchor.bottom(), height)
    } else if height <= above {
        (anchor.y - height, height)
    } else if below >= above {
        (anchor.bottom(), below)
    } else {
        (screen.y, above)
    };

    let width = anchor.width.min(screen.right().saturating_sub(anchor.x));
    Rect::new(anchor.x, y, width, height)
}

impl SurfaceHost for OverlayHost {
    fn mode(&self) -> PresentationMode {
        PresentationMode::Overlay
    }

    fn is_modal(&self) -> bool {
        false
    }

    fn dismiss_on_outside_pointer(&self) -> bool {
        true
    }

    fn max_content_rows(&self, cx: &MountContext<'_>) -> u16 {
        let below = cx.screen.bottom().saturating_sub(cx.anchor.bottom());
        let above = cx.anchor.y.saturating_sub(cx.screen.y);
        below.max(above).saturating_sub(Border::Rounded.thickness() * 2)
    }

    fn mount(&self, list: Element, cx: &MountContext<'_>) -> Element {
        let height = cx.content_height + Border::Rounded.thickness() * 2;
        let rect = overlay_rect(cx.screen, cx.anchor, height);

        Element::col()
            .id(panel_id(cx.name))
            .position(Position::Absolute)
            .left(rect.x)
            .top(rect.y)
            .width(Size::Fixed(rect.width))
            .height(Size::Fixed(rect.height))
            .z_index(OVERLAY_Z_INDEX)
            .clickable(true)
            .style(
                Style::new()
                    .background(cx.theme.surface)
                    .foreground(cx.theme.border)
                    .border(Border::Rounded),
            )
            .child(list)
    }
}

// ============================================================================
// Sheet
// ============================================================================

pub const SHEET_Z_INDEX: i16 = 200;
pub const SCRIM_DIM: f32 = 0.5;

const HANDLE_GLYPH: &str = "━━━━━━";

/// Bottom sheet over a dimming scrim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetHost;

impl SheetHost {
    fn handle(cx: &MountContext<'_>) -> Element {
        let inner = cx.screen.width.saturating_sub(Border::Rounded.thickness() * 2);
        let glyph = HANDLE_GLYPH.chars().count() as u16;
        Element::row()
            .id(handle_id(cx.name))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::left(inner.saturating_sub(glyph) / 2))
            .clickable(true)
            .child(Element::text(HANDLE_GLYPH).style(Style::new().foreground(cx.theme.muted)))
    }
}

impl SurfaceHost for SheetHost {
    fn mode(&self) -> PresentationMode {
        PresentationMode::Sheet
    }

    fn is_modal(&self) -> bool {
        true
    }

    fn dismiss_on_outside_pointer(&self) -> bool {
        false
    }

    fn max_content_rows(&self, cx: &MountContext<'_>) -> u16 {
        let cap = (f32::from(cx.screen.height) * cx.sheet_max_height).floor() as u16;
        // Border plus the handle row.
        cap.saturating_sub(Border::Rounded.thickness() * 2 + 1)
    }

    fn mount(&self, list: Element, cx: &MountContext<'_>) -> Element {
        let height = cx.content_height + Border::Rounded.thickness() * 2 + 1;

        let panel = Element::col()
            .id(panel_id(cx.name))
            .position(Position::Absolute)
            .left(0)
            .bottom(0)
            .width(Size::Fill)
            .height(Size::Fixed(height))
            .z_index(SHEET_Z_INDEX + 1)
            .clickable(true)
            .style(
                Style::new()
                    .background(cx.theme.surface)
                    .foreground(cx.theme.border)
                    .border(Border::Rounded),
            )
            .child(Self::handle(cx))
            .child(list);

        Element::box_()
            .id(scrim_id(cx.name))
            .position(Position::Absolute)
            .left(0)
            .top(0)
            .width(Size::Fill)
            .height(Size::Fill)
            .z_index(SHEET_Z_INDEX)
            .backdrop(Backdrop::Dim(SCRIM_DIM))
            .clickable(true)
            .child(panel)
    }
}
