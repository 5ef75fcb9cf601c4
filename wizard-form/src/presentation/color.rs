/// Foreground colors used for the error cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Red,
    Green,

    /// Reset to default
    #[default]
    Reset,
}

impl Color {
    /// ANSI escape sequence selecting this color as foreground.
    pub const fn ansi_fg(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Reset => "\x1b[0m",
        }
    }

    /// Wrap `text` in this color, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.ansi_fg(), text, Self::Reset.ansi_fg())
    }
}
