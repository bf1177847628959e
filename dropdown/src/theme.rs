use formdom::Color;

/// Colours used by the dropdown's trigger and list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub accent: Color,
    pub destructive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::oklch(0.15, 0.02, 250.0),
            surface: Color::oklch(0.2, 0.02, 250.0),
            border: Color::oklch(0.4, 0.02, 250.0),
            text: Color::oklch(0.9, 0.02, 250.0),
            muted: Color::oklch(0.6, 0.02, 250.0),
            primary: Color::oklch(0.6, 0.15, 250.0),
            primary_foreground: Color::oklch(0.98, 0.01, 250.0),
            accent: Color::oklch(0.3, 0.04, 250.0),
            destructive: Color::oklch(0.6, 0.2, 25.0),
        }
    }
}
