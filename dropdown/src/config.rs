use std::fmt;
use std::sync::Arc;

use crate::breakpoint::DEFAULT_BREAKPOINT_PX;
use crate::presentation::{BreakpointPolicy, WideOverlayPolicy};

/// What happens to the search query when the list closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryRetention {
    /// Reopening shows the list filtered by the last query.
    #[default]
    Remember,
    /// Every close clears the query.
    ResetOnClose,
}

/// Per-instance behaviour of a [`Dropdown`](crate::Dropdown).
#[derive(Clone)]
pub struct DropdownConfig {
    /// Viewport width, in logical pixels, from which the viewport counts as wide.
    pub breakpoint_px: u32,

    pub query_retention: QueryRetention,

    /// Entries shown at once before the list scrolls.
    pub max_visible_entries: usize,

    /// Upper bound of the sheet height as a fraction of the screen height.
    pub sheet_max_height: f32,

    /// Shown in place of entries when nothing matches the query.
    pub no_results_text: String,

    /// Maps the breakpoint to a presentation mode.
    pub policy: Arc<dyn BreakpointPolicy>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            query_retention: QueryRetention::default(),
            max_visible_entries: 8,
            sheet_max_height: 0.8,
            no_results_text: "No results found.".to_string(),
            policy: Arc::new(WideOverlayPolicy),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoint_px(mut self, px: u32) -> Self {
        self.breakpoint_px = px;
        self
    }

    pub fn query_retention(mut self, retention: QueryRetention) -> Self {
        self.query_retention = retention;
        self
    }

    /// Set the visible entry count. Zero is raised to one.
    pub fn max_visible_entries(mut self, entries: usize) -> Self {
        self.max_visible_entries = entries.max(1);
        self
    }

    pub fn sheet_max_height(mut self, ratio: f32) -> Self {
        self.sheet_max_height = ratio.clamp(0.1, 1.0);
        self
    }

    pub fn no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    pub fn policy(mut self, policy: impl BreakpointPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }
}

impl fmt::Debug for DropdownConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownConfig")
            .field("breakpoint_px", &self.breakpoint_px)
            .field("query_retention", &self.query_retention)
            .field("max_visible_entries", &self.max_visible_entries)
            .field("sheet_max_height", &self.sheet_max_height)
            .field("no_results_text", &self.no_results_text)
            .finish_non_exhaustive()
    }
}
