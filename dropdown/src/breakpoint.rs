//! Viewport width tracking and breakpoint subscriptions.
//!
//! The host owns a [`Viewport`] and reports every resize through
//! [`Viewport::set_width`]. Widgets hold a [`BreakpointSubscription`] for as
//! long as they are mounted; each width change re-evaluates every live
//! subscription immediately, and dropping one removes it from the viewport.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Width in logical pixels at which the wide layout starts.
pub const DEFAULT_BREAKPOINT_PX: u32 = 640;

/// Logical pixels per terminal column when the terminal reports no pixel size.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

/// A `min-width` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery {
    min_width: u32,
}

impl MediaQuery {
    pub const WIDE: MediaQuery = MediaQuery::min_width(DEFAULT_BREAKPOINT_PX);

    pub const fn min_width(px: u32) -> Self {
        Self { min_width: px }
    }

    pub fn matches(&self, width: u32) -> bool {
        width >= self.min_width
    }
}

/// Convert terminal metrics into logical pixels.
///
/// Prefers the pixel width the terminal reports; many report zero, in which
/// case every column counts as `cell_width_px`.
pub fn logical_width(columns: u16, pixel_width: Option<u16>, cell_width_px: u32) -> u32 {
    match pixel_width {
        Some(px) if px > 0 => u32::from(px),
        _ => u32::from(columns) * cell_width_px,
    }
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

struct Watch {
    query: MediaQuery,
    matches: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
    listener: Arc<RwLock<Option<Listener>>>,
}

struct ViewportInner {
    width: u32,
    next_id: u64,
    watches: HashMap<u64, Watch>,
}

/// Shared viewport width plus the registry of live subscriptions.
///
/// Cloning is cheap; all clones observe the same width.
#[derive(Clone)]
pub struct Viewport {
    inner: Arc<RwLock<ViewportInner>>,
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewportInner {
                width,
                next_id: 0,
                watches: HashMap::new(),
            })),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.read().map(|guard| guard.width).unwrap_or(0)
    }

    /// Record a new width and re-evaluate every subscription.
    ///
    /// Listeners run after the registry lock is released, and only for
    /// subscriptions whose result flipped.
    pub fn set_width(&self, width: u32) {
        let mut flipped: Vec<(Listener, bool)> = Vec::new();
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.width == width {
                return;
            }
            log::debug!("Viewport::set_width {} -> {}", guard.width, width);
            guard.width = width;

            for watch in guard.watches.values() {
                let now = watch.query.matches(width);
                if watch.matches.swap(now, Ordering::SeqCst) != now {
                    watch.dirty.store(true, Ordering::SeqCst);
                    if let Some(listener) = watch.listener.read().ok().and_then(|l| l.clone()) {
                        flipped.push((listener, now));
                    }
                }
            }
        }

        for (listener, now) in flipped {
            listener(now);
        }
    }

    /// Start observing `query`. The result is evaluated right away.
    pub fn watch(&self, query: MediaQuery) -> BreakpointSubscription {
        let matches = Arc::new(AtomicBool::new(false));
        let dirty = Arc::new(AtomicBool::new(false));
        let listener = Arc::new(RwLock::new(None));

        let id = match self.inner.write() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                matches.store(query.matches(guard.width), Ordering::SeqCst);
                guard.watches.insert(
                    id,
                    Watch {
                        query,
                        matches: Arc::clone(&matches),
                        dirty: Arc::clone(&dirty),
                        listener: Arc::clone(&listener),
                    },
                );
                log::debug!("Viewport::watch registered #{id} ({query:?})");
                Some(id)
            }
            Err(_) => None,
        };

        BreakpointSubscription {
            id,
            viewport: Arc::downgrade(&self.inner),
            matches,
            dirty,
            listener,
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.read().map(|guard| guard.watches.len()).unwrap_or(0)
    }
}

/// A live breakpoint observation. Deregisters itself when dropped.
pub struct BreakpointSubscription {
    id: Option<u64>,
    viewport: Weak<RwLock<ViewportInner>>,
    matches: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
    listener: Arc<RwLock<Option<Listener>>>,
}

impl fmt::Debug for BreakpointSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointSubscription")
            .field("id", &self.id)
            .field("matches", &self.matches())
            .finish()
    }
}

impl BreakpointSubscription {
    /// Current result of the query.
    pub fn matches(&self) -> bool {
        self.matches.load(Ordering::SeqCst)
    }

    /// Whether the result flipped since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Call `f` with the new result whenever it flips.
    pub fn on_change(&self, f: impl Fn(bool) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.listener.write() {
            *guard = Some(Arc::new(f));
        }
    }
}

impl Drop for BreakpointSubscription {
    fn drop(&mut self) {
        let (Some(id), Some(viewport)) = (self.id, self.viewport.upgrade()) else {
            return;
        };
        if let Ok(mut guard) = viewport.write() {
            guard.watches.remove(&id);
            log::debug!("BreakpointSubscription #{id} released");
        }
    }
}
