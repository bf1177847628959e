/// How an element sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Exactly this many cells.
    Fixed(u16),
    /// Share whatever the parent has left.
    Fill,
    /// Size to content.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Flow placement, or placement against the screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Cells consumed on each side.
    pub const fn thickness(&self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }
}

/// Effect applied to everything painted underneath an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Backdrop {
    #[default]
    None,
    /// Darken lower layers by the given fraction.
    Dim(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            underline: false,
        }
    }
}
