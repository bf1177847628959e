//! Cell-grid element tree for terminal forms.
//!
//! Widgets describe a frame as an [`Element`] tree. The tree is laid out into
//! a [`LayoutResult`], painted into a [`Buffer`] and flushed to the terminal
//! by [`Terminal`], which only writes the cells that changed.

pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::{Terminal, ViewportSize};
pub use types::*;
