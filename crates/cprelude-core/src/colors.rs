//! ANSI color codes for highlighted C output.
//!
//! Roles:
//! - Keyword: `typedef`, `extern`, preprocessor directives
//! - Name: the identifier a declaration introduces
//! - Comment: banner and section comments
//! - Reset: return to default

/// ANSI palette for terminal output of emitted C.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub keyword: &'static str,
    pub name: &'static str,
    pub comment: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        name: "\x1b[34m",
        comment: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled; every role is the empty string.
    pub const OFF: Self = Self {
        keyword: "",
        name: "",
        comment: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    pub fn keyword(&self, text: &str) -> String {
        format!("{}{}{}", self.keyword, text, self.reset)
    }

    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.name, text, self.reset)
    }

    pub fn comment(&self, text: &str) -> String {
        format!("{}{}{}", self.comment, text, self.reset)
    }
}
