use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{SummaryEvent, SummaryState};
use crate::core::{Emitter, Ui};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct SummaryUi;

impl Ui for SummaryUi {
    type State = SummaryState;
    type Event = SummaryEvent;
    type View = SummaryView;

    fn map(&self, state: &SummaryState, emit: Emitter<SummaryEvent>) -> SummaryView {
        SummaryView {
            value: state.value,
            emit,
        }
    }
}

pub struct SummaryView {
    pub value: i64,
    emit: Emitter<SummaryEvent>,
}

impl Component for SummaryView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Summary",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.value.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("[b] Back   [p] Print Current Value"),
        ];

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}

impl EventHandler for SummaryView {
    fn handle_event(&mut self, event: &TuiEvent) -> bool {
        let mapped = match event {
            TuiEvent::Char('b') => SummaryEvent::Back,
            TuiEvent::Char('p') | TuiEvent::Enter => SummaryEvent::PrintValue,
            _ => return false,
        };
        self.emit.emit(mapped);
        true
    }
}
