use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Host-level actions
    ForceQuit, // Ctrl+C quits from anywhere
    Escape,    // Pops the stack unless the destination consumes it
    Resize,

    // Forwarded to the current destination first
    Char(char),
    Enter,
}

impl TuiEvent {
    /// Translate a crossterm event. Returns `None` for events the host ignores.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => {
                // Kitty-protocol terminals also report releases
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::Char(c)),
                    (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    }
}
