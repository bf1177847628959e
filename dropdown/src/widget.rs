//! The dropdown widget: trigger, list and the container chosen per frame.

use formdom::{Element, Event, Key, LayoutResult, Rect, Size};

use crate::breakpoint::{BreakpointSubscription, MediaQuery, Viewport};
use crate::config::{DropdownConfig, QueryRetention};
use crate::event::EventResult;
use crate::filter::filter_options;
use crate::list::{self, ListView};
use crate::option::DropdownOption;
use crate::presentation::{MountContext, PresentationMode, host_for};
use crate::props::DropdownProps;
use crate::state::{DropdownId, DropdownState};
use crate::theme::Theme;
use crate::trigger;

/// Which part of a dropdown an element id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Trigger,
    Entry(usize),
    Scrim,
    Handle,
    /// Anything else inside the widget: panel, search row, label.
    Inside,
}

fn classify(name: &str, target: &str) -> Option<Part> {
    if target == name {
        return Some(Part::Trigger);
    }
    let rest = target.strip_prefix(name)?.strip_prefix('-')?;
    Some(match rest {
        "scrim" => Part::Scrim,
        "handle" => Part::Handle,
        "field" | "label" | "panel" | "list" | "search" | "empty" => Part::Inside,
        _ => {
            let index = rest.strip_prefix("option-")?.parse().ok()?;
            Part::Entry(index)
        }
    })
}

/// A searchable single-select dropdown.
///
/// The widget owns only transient UI state: whether the list is open, the
/// search query and the active entry. Options, the selected value and the
/// change handler come from [`DropdownProps`] on every call, so the owning
/// form stays the single source of truth for the value.
///
/// The presentation mode is recomputed from the viewport breakpoint each
/// time [`element`](Self::element) runs. A breakpoint flip while the list is
/// open moves the list into the other container and keeps the query and
/// cursor.
///
/// # Example
///
/// ```ignore
/// let viewport = Viewport::new(800);
/// let bhk = Dropdown::mount(&viewport);
///
/// let props = DropdownProps::new("bhk")
///     .options([("1", "1 BHK"), ("2", "2 BHK")])
///     .value("2")
///     .on_change(|e| println!("{} = {}", e.target.name, e.target.value));
///
/// let root = bhk.element(&props, true);
/// ```
#[derive(Debug)]
pub struct Dropdown {
    state: DropdownState,
    breakpoint: BreakpointSubscription,
    config: DropdownConfig,
    theme: Theme,
}

impl Dropdown {
    /// Mount with the default configuration.
    pub fn mount(viewport: &Viewport) -> Self {
        Self::with_config(viewport, DropdownConfig::default())
    }

    pub fn with_config(viewport: &Viewport, config: DropdownConfig) -> Self {
        let breakpoint = viewport.watch(MediaQuery::min_width(config.breakpoint_px));
        let state = DropdownState::new();
        log::debug!(
            "{} mounted (wide: {}, breakpoint: {}px)",
            state.id(),
            breakpoint.matches(),
            config.breakpoint_px
        );
        Self {
            state,
            breakpoint,
            config,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn id(&self) -> DropdownId {
        self.state.id()
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn query(&self) -> String {
        self.state.query()
    }

    /// Active entry, an index into the filtered list.
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Whether the viewport is currently at or above the breakpoint.
    pub fn is_wide(&self) -> bool {
        self.breakpoint.matches()
    }

    /// Container the list opens in right now.
    pub fn mode(&self) -> PresentationMode {
        self.config.policy.mode(self.breakpoint.matches())
    }

    /// Whether the list is open in a container that blocks the rest of the
    /// form.
    pub fn is_modal(&self) -> bool {
        self.is_open() && host_for(self.mode()).is_modal()
    }

    /// The query actually applied to the options.
    fn effective_query(&self, props: &DropdownProps) -> String {
        if props.is_search_shown() {
            self.state.query()
        } else {
            String::new()
        }
    }

    /// Options matching the current query, in order.
    pub fn filtered<'a>(&self, props: &'a DropdownProps) -> Vec<&'a DropdownOption> {
        filter_options(props.get_options(), &self.effective_query(props))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Trigger activation: opens a closed list, closes an open one.
    ///
    /// Does nothing and returns false while `props` is disabled.
    pub fn activate(&self, props: &DropdownProps) -> bool {
        if props.is_disabled() {
            log::debug!("{} activation ignored: disabled", self.id());
            return false;
        }
        if self.is_open() {
            self.close();
        } else {
            self.open(props);
        }
        true
    }

    fn open(&self, props: &DropdownProps) {
        if self.state.set_open(true) {
            return;
        }
        let cursor = self
            .filtered(props)
            .iter()
            .position(|option| props.is_selected(&option.id))
            .unwrap_or(0);
        self.state.reset_navigation(cursor);
        log::debug!("{} opened as {:?}", self.id(), self.mode());
    }

    fn close(&self) -> bool {
        if !self.state.set_open(false) {
            return false;
        }
        if self.config.query_retention == QueryRetention::ResetOnClose {
            self.state.set_query(String::new());
        }
        log::debug!("{} closed", self.id());
        true
    }

    /// Close the list without picking. Returns whether it was open.
    pub fn dismiss(&self) -> bool {
        self.close()
    }

    /// Pick the option with `id`.
    ///
    /// Only an open, enabled list accepts a pick. The list is closed before
    /// the change handler runs, so a second pick in the same batch of input
    /// finds it closed and is dropped.
    pub fn pick(&self, props: &DropdownProps, id: &str) -> bool {
        if props.is_disabled() || !self.is_open() {
            return false;
        }
        if !props.get_options().iter().any(|option| option.id == id) {
            log::debug!("{} pick ignored: unknown id {:?}", self.id(), id);
            return false;
        }
        if !self.close() {
            return false;
        }
        log::debug!("{} picked {:?}", self.id(), id);
        props.emit_change(id);
        true
    }

    /// Pick the entry at `index` in the filtered list.
    pub fn pick_at(&self, props: &DropdownProps, index: usize) -> bool {
        let id = match self.filtered(props).get(index) {
            Some(option) => option.id.clone(),
            None => return false,
        };
        self.pick(props, &id)
    }

    /// Replace the search query. The cursor returns to the first entry.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        log::trace!("{} query {:?}", self.id(), query);
        self.state.set_query(query);
    }

    fn move_cursor(&self, props: &DropdownProps, delta: isize) {
        let len = self.filtered(props).len();
        if len == 0 {
            return;
        }
        let cursor = self.state.cursor().min(len - 1);
        let next = cursor.saturating_add_signed(delta).min(len - 1);
        self.state.set_cursor(next);
    }

    fn move_cursor_to(&self, props: &DropdownProps, index: usize) {
        let len = self.filtered(props).len();
        if len > 0 {
            self.state.set_cursor(index.min(len - 1));
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build this frame's element tree.
    ///
    /// The list is only mounted once a frame has been laid out and
    /// [`sync_layout`](Self::sync_layout) has recorded where the trigger is.
    /// Until then the widget stays dirty so the host renders again.
    pub fn element(&self, props: &DropdownProps, focused: bool) -> Element {
        let name = props.name();
        let mode = self.mode();
        let open = self.is_open() && !props.is_disabled();

        if let Some(previous) = self.state.swap_mode(mode)
            && previous != mode
            && open
        {
            log::debug!("{} moved from {:?} to {:?}", self.id(), previous, mode);
        }

        let mut field = Element::col()
            .id(format!("{name}-field"))
            .width(Size::Fill);
        if let Some(label) = trigger::label_line(props, &self.theme) {
            field = field.child(label);
        }
        field = field.child(trigger::trigger_element(props, focused, open, &self.theme));

        if open {
            match (self.state.anchor(), self.state.screen()) {
                (Some(anchor), Some(screen)) => {
                    field = field.child(self.surface(props, mode, anchor, screen));
                }
                _ => self.state.mark_dirty(),
            }
        }
        field
    }

    fn surface(
        &self,
        props: &DropdownProps,
        mode: PresentationMode,
        anchor: Rect,
        screen: Rect,
    ) -> Element {
        let host = host_for(mode);
        let query = self.effective_query(props);
        let filtered = filter_options(props.get_options(), &query);

        let mut cx = MountContext {
            name: props.name(),
            screen,
            anchor,
            content_height: 0,
            sheet_max_height: self.config.sheet_max_height,
            theme: &self.theme,
        };

        let search_rows = u16::from(props.is_search_shown());
        let budget = host.max_content_rows(&cx).saturating_sub(search_rows).max(1);
        let visible = self.config.max_visible_entries.min(usize::from(budget)).max(1);

        let cursor = self.state.cursor().min(filtered.len().saturating_sub(1));
        let scroll = list::scroll_to_cursor(self.state.scroll(), cursor, visible, filtered.len());
        self.state.set_scroll(scroll);

        cx.content_height = list::content_height(props.is_search_shown(), filtered.len(), visible);
        let view = ListView {
            query: &query,
            cursor,
            scroll,
            visible,
        };
        let list = list::list_element(props, &filtered, view, &self.config, &self.theme);
        host.mount(list, &cx)
    }

    /// Record where the last frame put the trigger. Returns true when that
    /// moved, in which case the widget is dirty.
    pub fn sync_layout(&self, props: &DropdownProps, layout: &LayoutResult, screen: Rect) -> bool {
        let anchor = layout.get(props.name()).copied();
        self.state.set_geometry(anchor, screen)
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty() || self.breakpoint.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.state.clear_dirty();
        self.breakpoint.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Route one input event.
    ///
    /// Pointer events are matched against this widget's element ids. Key
    /// events are assumed to be meant for this widget; the host sends them
    /// when the trigger is focused or the list is open.
    pub fn handle_event(&self, event: &Event, props: &DropdownProps) -> EventResult {
        if props.is_disabled() {
            if self.is_open() {
                self.close();
            }
            return EventResult::Ignored;
        }

        match event {
            Event::Click { target, .. } => self.on_click(target.as_deref(), props),
            Event::MouseMove { target, .. } => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                match target.as_deref().and_then(|t| classify(props.name(), t)) {
                    Some(Part::Entry(index)) => {
                        self.move_cursor_to(props, index);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            Event::Scroll { target, delta, .. } => {
                let inside = target
                    .as_deref()
                    .and_then(|t| classify(props.name(), t))
                    .is_some_and(|part| part != Part::Trigger);
                if self.is_open() && (inside || self.is_modal()) {
                    self.move_cursor(props, isize::from(*delta));
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Key { key, modifiers } => {
                if modifiers.ctrl || modifiers.alt {
                    return EventResult::Ignored;
                }
                if self.is_open() {
                    self.on_key_open(*key, props)
                } else {
                    self.on_key_closed(*key, props)
                }
            }
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn on_click(&self, target: Option<&str>, props: &DropdownProps) -> EventResult {
        let part = target.and_then(|t| classify(props.name(), t));
        match part {
            Some(Part::Trigger) => {
                self.activate(props);
                EventResult::Consumed
            }
            Some(Part::Entry(index)) => {
                self.pick_at(props, index);
                EventResult::Consumed
            }
            Some(Part::Scrim | Part::Handle) => {
                self.dismiss();
                EventResult::Consumed
            }
            Some(Part::Inside) => EventResult::Consumed,
            None if self.is_open() => {
                let host = host_for(self.mode());
                if host.dismiss_on_outside_pointer() || host.is_modal() {
                    self.dismiss();
                }
                if host.is_modal() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            None => EventResult::Ignored,
        }
    }

    fn on_key_closed(&self, key: Key, props: &DropdownProps) -> EventResult {
        match key {
            Key::Enter | Key::Char(' ') | Key::Down => {
                self.activate(props);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_key_open(&self, key: Key, props: &DropdownProps) -> EventResult {
        let page = isize::try_from(self.config.max_visible_entries).unwrap_or(isize::MAX);
        match key {
            Key::Escape => {
                self.dismiss();
            }
            Key::Tab | Key::BackTab => {
                self.dismiss();
                return EventResult::Ignored;
            }
            Key::Up => self.move_cursor(props, -1),
            Key::Down => self.move_cursor(props, 1),
            Key::PageUp => self.move_cursor(props, -page),
            Key::PageDown => self.move_cursor(props, page),
            Key::Home => self.move_cursor_to(props, 0),
            Key::End => self.move_cursor_to(props, usize::MAX),
            Key::Enter => {
                self.pick_at(props, self.state.cursor());
            }
            Key::Char(' ') if !props.is_search_shown() => {
                self.pick_at(props, self.state.cursor());
            }
            Key::Char(c) if props.is_search_shown() => {
                let mut query = self.state.query();
                query.push(c);
                self.set_query(query);
            }
            Key::Backspace if props.is_search_shown() => {
                let mut query = self.state.query();
                if query.pop().is_some() {
                    self.set_query(query);
                }
            }
            _ => {}
        }
        EventResult::Consumed
    }
}
