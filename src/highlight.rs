use inksac::prelude::*;

/// Colors diagnostics when they go to a color terminal.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Highlighter {
    /// `enabled` is false for non-interactive sessions, whose output stays plain.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_notice(&self, notice: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return notice.to_string();
        }

        let notice_style = Style::builder()
            .foreground(Color::Yellow)
            .build();

        notice.style(notice_style).to_string()
    }
}
