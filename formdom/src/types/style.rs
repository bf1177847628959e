use super::{Border, Color, TextStyle};

/// Visual attributes of an element. Every field is optional in effect:
/// unset colours inherit what is already painted underneath.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(self, color: Color) -> Self {
        Self { background: Some(color), ..self }
    }

    pub fn foreground(self, color: Color) -> Self {
        Self { foreground: Some(color), ..self }
    }

    pub fn border(self, border: Border) -> Self {
        Self { border, ..self }
    }

    pub fn bold(self) -> Self {
        self.with_text(|t| t.bold = true)
    }

    pub fn dim(self) -> Self {
        self.with_text(|t| t.dim = true)
    }

    pub fn underline(self) -> Self {
        self.with_text(|t| t.underline = true)
    }

    fn with_text(mut self, f: impl FnOnce(&mut TextStyle)) -> Self {
        f(&mut self.text_style);
        self
    }
}
