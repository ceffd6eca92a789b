//! Terminal coloring on top of the plain lines produced by `req_core::render`.

use clap::ColorChoice;
use nu_ansi_term::Color;
use req_core::{render, HttpMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Resolve `--color` for a stream; `auto` colors only terminals.
    pub fn for_stream(choice: ColorChoice, is_terminal: bool) -> Self {
        match choice {
            ColorChoice::Always => Self::new(true),
            ColorChoice::Never => Self::new(false),
            ColorChoice::Auto => Self::new(is_terminal),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn request_line(&self, method: HttpMethod, url: &str) -> String {
        if !self.enabled {
            return render::request_line(method, url);
        }
        format!(
            "{} {}",
            self.paint(Color::Green, method.as_str()),
            self.paint(Color::Blue, url)
        )
    }

    pub fn status_line(&self, status: u16, status_text: &str) -> String {
        let line = render::status_line(status, status_text);
        match line.strip_prefix("Status:") {
            Some(rest) if self.enabled => format!("{}{rest}", self.paint(Color::Yellow, "Status:")),
            _ => line,
        }
    }

    pub fn error_label(&self) -> String {
        self.paint(Color::Red, "Error:")
    }
}
