//! Widget-owned dropdown state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use formdom::Rect;

use crate::presentation::PresentationMode;

/// Unique identifier for a mounted dropdown, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dropdown#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct StateInner {
    query: String,
    /// Index into the filtered list.
    cursor: usize,
    /// First filtered entry in the visible window.
    scroll: usize,
    /// Trigger rect from the last frame.
    anchor: Option<Rect>,
    screen: Option<Rect>,
    last_mode: Option<PresentationMode>,
}

#[derive(Debug)]
pub(crate) struct DropdownState {
    id: DropdownId,
    inner: Arc<RwLock<StateInner>>,
    open: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl DropdownState {
    pub(crate) fn new() -> Self {
        Self {
            id: DropdownId::new(),
            inner: Arc::new(RwLock::new(StateInner::default())),
            open: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn id(&self) -> DropdownId {
        self.id
    }

    fn read<R: Default>(&self, f: impl FnOnce(&StateInner) -> R) -> R {
        self.inner.read().map(|guard| f(&guard)).unwrap_or_default()
    }

    fn write(&self, f: impl FnOnce(&mut StateInner)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Open flag
    // -------------------------------------------------------------------------

    pub(crate) fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Set the open flag, returning the previous value.
    pub(crate) fn set_open(&self, open: bool) -> bool {
        let was = self.open.swap(open, Ordering::SeqCst);
        if was != open {
            self.dirty.store(true, Ordering::SeqCst);
        }
        was
    }

    // -------------------------------------------------------------------------
    // Query and cursor
    // -------------------------------------------------------------------------

    pub(crate) fn query(&self) -> String {
        self.read(|inner| inner.query.clone())
    }

    /// Replace the query; the cursor and scroll go back to the top.
    pub(crate) fn set_query(&self, query: String) {
        self.write(|inner| {
            inner.query = query;
            inner.cursor = 0;
            inner.scroll = 0;
        });
    }

    pub(crate) fn cursor(&self) -> usize {
        self.read(|inner| inner.cursor)
    }

    pub(crate) fn scroll(&self) -> usize {
        self.read(|inner| inner.scroll)
    }

    pub(crate) fn set_cursor(&self, cursor: usize) {
        if self.cursor() != cursor {
            self.write(|inner| inner.cursor = cursor);
        }
    }

    /// Store the window position without marking the widget dirty; it is only
    /// ever adjusted while building a frame.
    pub(crate) fn set_scroll(&self, scroll: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll = scroll;
        }
    }

    pub(crate) fn reset_navigation(&self, cursor: usize) {
        self.write(|inner| {
            inner.cursor = cursor;
            inner.scroll = 0;
        });
    }

    // -------------------------------------------------------------------------
    // Frame geometry
    // -------------------------------------------------------------------------

    pub(crate) fn anchor(&self) -> Option<Rect> {
        self.read(|inner| inner.anchor)
    }

    pub(crate) fn screen(&self) -> Option<Rect> {
        self.read(|inner| inner.screen)
    }

    /// Cache the trigger and screen rects. Returns true when either moved.
    pub(crate) fn set_geometry(&self, anchor: Option<Rect>, screen: Rect) -> bool {
        let changed = self.read(|inner| inner.anchor != anchor || inner.screen != Some(screen));
        if changed {
            self.write(|inner| {
                inner.anchor = anchor;
                inner.screen = Some(screen);
            });
        }
        changed
    }

    /// Record the mode used for this frame, returning the previous one.
    pub(crate) fn swap_mode(&self, mode: PresentationMode) -> Option<PresentationMode> {
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.last_mode.replace(mode))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub(crate) fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
