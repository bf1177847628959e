//! Responsive, searchable single-select dropdown for terminal forms.
//!
//! A [`Dropdown`] renders a trigger showing the selected option's label.
//! Activating it opens a filterable list of options, mounted as an overlay
//! panel under the trigger on wide viewports and as a bottom sheet on narrow
//! ones. Picking an entry reports a [`ChangeEvent`] to the owning form and
//! closes the list; the form owns the value and passes it back through
//! [`DropdownProps`] on the next frame.
//!
//! ```ignore
//! use dropdown::prelude::*;
//!
//! let viewport = Viewport::new(logical_width(cols, None, DEFAULT_CELL_WIDTH_PX));
//! let location = Dropdown::mount(&viewport);
//!
//! let props = DropdownProps::new("location")
//!     .label("Location")
//!     .required(true)
//!     .options([("mum", "Mumbai"), ("pun", "Pune")])
//!     .maybe_value(form.location.clone())
//!     .on_change_handler(form.handler());
//!
//! let element = location.element(&props, focused);
//! ```

pub mod breakpoint;
pub mod config;
pub mod event;
pub mod filter;
pub mod list;
pub mod option;
pub mod presentation;
pub mod props;
mod state;
pub mod theme;
pub mod trigger;
pub mod widget;

pub use breakpoint::{
    logical_width, BreakpointSubscription, MediaQuery, Viewport, DEFAULT_BREAKPOINT_PX,
    DEFAULT_CELL_WIDTH_PX,
};
pub use config::{DropdownConfig, QueryRetention};
pub use event::{ChangeEvent, ChangeTarget, EventResult, OnChange};
pub use filter::filter_options;
pub use option::{find_option, DropdownOption};
pub use presentation::{
    BreakpointPolicy, MountContext, OverlayHost, PresentationMode, SheetHost, SurfaceHost,
    WideOverlayPolicy,
};
pub use props::DropdownProps;
pub use state::DropdownId;
pub use theme::Theme;
pub use widget::Dropdown;

pub mod prelude {
    pub use crate::{
        logical_width, ChangeEvent, Dropdown, DropdownConfig, DropdownOption, DropdownProps,
        EventResult, OnChange, PresentationMode, QueryRetention, Viewport, DEFAULT_CELL_WIDTH_PX,
    };
}
