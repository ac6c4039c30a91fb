//! # TitleBar Component
//!
//! Top status bar showing where the user is in the navigation stack.
//!
//! ## Responsibilities
//!
//! - Display the current destination's title
//! - Display the stack depth (0 = root)
//! - Display the last status message (e.g. a forwarded custom navigation request)
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Counter".to_string(), 0, String::new());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Trapezio (Summary, depth 2) | Custom navigation: go to help"`
//! 2. **Default**: `"Trapezio (Summary, depth 2)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Title of the destination on top of the stack
    pub screen_title: String,
    /// Number of entries pushed above the root
    pub depth: usize,
    /// Transient status text
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, depth: usize, status_message: String) -> Self {
        Self {
            screen_title,
            depth,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Trapezio ({}, depth {})", self.screen_title, self.depth)
        } else {
            format!(
                "Trapezio ({}, depth {}) | {}",
                self.screen_title, self.depth, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    /// Always a single line. A plain `Span` is enough; no borders.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(span, area);
    }
}
