//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, the crossterm event
//! stream, and the [`host::NavigationHost`] that maps the navigation stack
//! to destinations.
//!
//! Features never see crossterm. They receive [`event::TuiEvent`]s through
//! their views and talk back through stores and the navigator handle.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when something changed:
//!
//! - a terminal event arrived (key press or resize), or
//! - a store or the navigator notified the host (e.g. an async divide
//!   finished while the user was idle).
//!
//! Both paths end in `Notify::notify_one`, and the loop waits on whichever
//! comes first with `tokio::select!`.
//!
//! The loop must run inside a `tokio::task::LocalSet`: feature stores spawn
//! their continuations with `spawn_local`.

pub mod component;
pub mod components;
pub mod event;
pub mod host;
mod ui;

use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use futures::StreamExt;
use log::{info, warn};
use ratatui::DefaultTerminal;
use tokio::sync::Notify;

use crate::core::config::ResolvedConfig;
use crate::core::{CustomNavigationHandler, CustomNavigationRequest};
use crate::features::counter::CounterScreen;
use crate::features::{self, Dependencies};
use crate::tui::event::TuiEvent;
use crate::tui::host::NavigationHost;
use crate::usecases::HalvingUseCase;

const WELCOME: &str = "Welcome to Trapezio!";

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Terminals without the Kitty protocol ignore the flags
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Routes one event. `ForceQuit` always quits; `q` quits only if the
/// current destination didn't consume it.
fn dispatch(host: &NavigationHost, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::ForceQuit => Flow::Quit,
        TuiEvent::Resize => Flow::Continue,
        event => {
            let consumed = host.handle_event(&event);
            if !consumed && event == TuiEvent::Char('q') {
                Flow::Quit
            } else {
                Flow::Continue
            }
        }
    }
}

/// Custom navigation requests have no destination in this app. They are
/// logged and surfaced in the title bar.
fn status_handler(status: Rc<RefCell<String>>, redraw: Rc<Notify>) -> CustomNavigationHandler {
    Box::new(move |request: CustomNavigationRequest| {
        let message = match &request {
            CustomNavigationRequest::GoTo(route) => format!("Custom navigation: go to {route}"),
            CustomNavigationRequest::DismissTo(route) => {
                format!("Custom navigation: dismiss to {route}")
            }
        };
        info!("{}", message);
        *status.borrow_mut() = message;
        redraw.notify_one();
    })
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let status = Rc::new(RefCell::new(WELCOME.to_string()));
    let redraw = Rc::new(Notify::new());

    let deps = Dependencies {
        divide: Arc::new(HalvingUseCase::new(Duration::from_millis(
            config.divide_delay_ms,
        ))),
    };
    let on_change = {
        let redraw = redraw.clone();
        Rc::new(move || redraw.notify_one())
    };
    let host = NavigationHost::new(
        Rc::new(CounterScreen {
            initial_value: config.initial_value,
        }),
        Some(status_handler(status.clone(), redraw.clone())),
        features::builder(deps),
        on_change,
    );
    info!(
        "Starting with initial value {} (divide delay {}ms)",
        config.initial_value, config.divide_delay_ms
    );

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &host, &status, &redraw).await;

    drop(guard);
    ratatui::restore();
    info!("Terminal restored");
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    host: &NavigationHost,
    status: &RefCell<String>,
    redraw: &Notify,
) -> std::io::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| ui::draw_ui(f, host, &status.borrow()))?;

        tokio::select! {
            next = events.next() => match next {
                Some(Ok(raw)) => {
                    let Some(event) = TuiEvent::from_crossterm(raw) else {
                        continue;
                    };
                    if dispatch(host, event) == Flow::Quit {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            _ = redraw.notified() => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Navigator;
    use crate::test_support::FakeDivideUseCase;

    fn host_with_status() -> (NavigationHost, Rc<RefCell<String>>, Rc<Notify>) {
        let status = Rc::new(RefCell::new(WELCOME.to_string()));
        let redraw = Rc::new(Notify::new());
        let host = NavigationHost::new(
            Rc::new(CounterScreen { initial_value: 4 }),
            Some(status_handler(status.clone(), redraw.clone())),
            features::builder(Dependencies {
                divide: Arc::new(FakeDivideUseCase),
            }),
            Rc::new(|| {}),
        );
        (host, status, redraw)
    }

    #[test]
    fn test_force_quit_always_quits() {
        let (host, _, _) = host_with_status();
        assert_eq!(dispatch(&host, TuiEvent::ForceQuit), Flow::Quit);
    }

    #[test]
    fn test_q_quits_when_unconsumed() {
        let (host, _, _) = host_with_status();
        assert_eq!(dispatch(&host, TuiEvent::Char('q')), Flow::Quit);
    }

    #[test]
    fn test_other_keys_continue() {
        let (host, _, _) = host_with_status();
        assert_eq!(dispatch(&host, TuiEvent::Char('+')), Flow::Continue);
        assert_eq!(dispatch(&host, TuiEvent::Resize), Flow::Continue);
        assert_eq!(dispatch(&host, TuiEvent::Char('s')), Flow::Continue);
        assert_eq!(host.depth(), 1);
    }

    #[test]
    fn test_custom_navigation_updates_status() {
        let (host, status, _) = host_with_status();
        dispatch(&host, TuiEvent::Char('h'));
        assert_eq!(*status.borrow(), "Custom navigation: go to help");
        assert_eq!(host.depth(), 0);

        host.navigator().dismiss_to_custom("landing");
        assert_eq!(*status.borrow(), "Custom navigation: dismiss to landing");
    }

    #[tokio::test]
    async fn test_custom_navigation_wakes_redraw() {
        let (host, _, redraw) = host_with_status();
        dispatch(&host, TuiEvent::Char('h'));
        // notify_one stored a permit, so this resolves immediately
        tokio::time::timeout(Duration::from_secs(1), redraw.notified())
            .await
            .unwrap();
    }
}
