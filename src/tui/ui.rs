use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::tui::component::Component;
use crate::tui::components::TitleBar;
use crate::tui::host::NavigationHost;

const FOOTER: &str = "[Esc] back  [r] root  [q] quit";

pub fn draw_ui(frame: &mut Frame, host: &NavigationHost, status_message: &str) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(host.current_title(), host.depth(), status_message.to_string());
    title_bar.render(frame, title_area);

    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(main_area);
    frame.render_widget(block, main_area);
    host.render(frame, inner);

    frame.render_widget(
        Span::styled(FOOTER, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{self, Dependencies};
    use crate::features::counter::CounterScreen;
    use crate::test_support::FakeDivideUseCase;
    use crate::tui::event::TuiEvent;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::rc::Rc;
    use std::sync::Arc;

    fn host() -> NavigationHost {
        NavigationHost::new(
            Rc::new(CounterScreen { initial_value: 7 }),
            None,
            features::builder(Dependencies {
                divide: Arc::new(FakeDivideUseCase),
            }),
            Rc::new(|| {}),
        )
    }

    fn draw(host: &NavigationHost, status: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| draw_ui(f, host, status)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_root_counter() {
        let text = draw(&host(), "");
        assert!(text.contains("Trapezio (Counter, depth 0)"));
        assert!(text.contains('7'));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_draws_pushed_summary_with_status() {
        let host = host();
        host.handle_event(&TuiEvent::Char('+'));
        host.handle_event(&TuiEvent::Char('s'));

        let text = draw(&host, "hello");
        assert!(text.contains("Trapezio (Summary, depth 1) | hello"));
        assert!(text.contains('8'));
    }
}
