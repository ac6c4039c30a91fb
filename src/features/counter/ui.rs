use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{CounterEvent, CounterState};
use crate::core::{Emitter, Ui};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct CounterUi;

impl Ui for CounterUi {
    type State = CounterState;
    type Event = CounterEvent;
    type View = CounterView;

    fn map(&self, state: &CounterState, emit: Emitter<CounterEvent>) -> CounterView {
        CounterView {
            count: state.count,
            is_dividing: state.is_dividing,
            emit,
        }
    }
}

pub struct CounterView {
    pub count: i64,
    pub is_dividing: bool,
    emit: Emitter<CounterEvent>,
}

impl Component for CounterView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count_style = if self.is_dividing {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        let status = if self.is_dividing { "dividing…" } else { "" };

        let lines = vec![
            Line::from(Span::styled(self.count.to_string(), count_style)),
            Line::from(Span::styled(status, Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from("[-]  [/ ÷2]  [+]"),
            Line::from(Span::styled(
                "[s] Go To Summary   [h] Help",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}

impl EventHandler for CounterView {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        let mapped = match event {
            TuiEvent::Char('+') | TuiEvent::Char('=') => CounterEvent::Increment,
            TuiEvent::Char('-') => CounterEvent::Decrement,
            TuiEvent::Char('/') => CounterEvent::DivideByTwo,
            TuiEvent::Char('s') | TuiEvent::Enter => CounterEvent::GoToSummary,
            TuiEvent::Char('h') => CounterEvent::OpenHelp,
            _ => return false,
        };
        self.emit.emit(mapped);
        true
    }
}
