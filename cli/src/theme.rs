use crossterm::style::{Color, Stylize};

/// The lab's color scheme.
///
/// Passed explicitly into every render call instead of living in process
/// globals, so a single `--no-color` flag (or a test) can switch the whole
/// shell to plain text.
#[derive(Copy, Clone, Debug)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    /// Cyan: hashes, structure, neutral highlights.
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    /// Green: positive outcomes, the defense working.
    pub fn good(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    /// Yellow: prompts and cautions.
    pub fn warn(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    /// Red: collisions, cracked passwords, danger.
    pub fn bad(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    /// Grey: supporting detail that should not compete with the lesson.
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey)
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Magenta bold, used for demo headers.
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.with(Color::Magenta).bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Red bold, used for the attack-succeeded moment.
    pub fn alarm(&self, text: &str) -> String {
        if self.color {
            text.with(Color::Red).bold().to_string()
        } else {
            text.to_owned()
        }
    }
}
