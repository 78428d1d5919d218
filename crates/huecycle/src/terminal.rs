//! Terminal implementation of the display surface.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
};
use huecycle_core::{FrameView, Input, Surface};
use huecycle_render::render_frame;
use ratatui::DefaultTerminal;

/// Draws frames with ratatui and reads input from crossterm.
pub struct TerminalSurface {
    terminal: DefaultTerminal,
    /// Quit on mouse button presses; mouse capture is enabled while set.
    mouse_quit: bool,
}

impl TerminalSurface {
    /// Wrap an initialized terminal.
    pub fn new(terminal: DefaultTerminal, mouse_quit: bool) -> io::Result<Self> {
        if mouse_quit {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(Self {
            terminal,
            mouse_quit,
        })
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if self.mouse_quit {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
    }
}

impl Surface for TerminalSurface {
    type Error = io::Error;

    fn present(&mut self, view: &FrameView) -> io::Result<()> {
        self.terminal.draw(|frame| render_frame(frame, view))?;
        Ok(())
    }

    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        wait_for_input(timeout, self.mouse_quit, |remaining| {
            if event::poll(remaining)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }
}

/// Wait until `timeout` has elapsed or an event maps to an [`Input`].
///
/// `next_event` blocks for at most the given duration and returns `None`
/// when nothing arrived. Events that map to nothing are dropped and the
/// wait continues towards the same deadline, so unhandled events (mouse
/// motion, resizes, key releases) never shorten a frame.
fn wait_for_input<F>(
    timeout: Duration,
    mouse_quit: bool,
    mut next_event: F,
) -> io::Result<Option<Input>>
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Some(event) = next_event(remaining)? else {
            return Ok(None);
        };
        if let Some(input) = map_event(&event, mouse_quit) {
            return Ok(Some(input));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
    }
}

/// Translate a crossterm event into an app input.
fn map_event(event: &Event, mouse_quit: bool) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Mouse(mouse) if mouse_quit => match mouse.kind {
            MouseEventKind::Down(_) => Some(Input::Quit),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Input> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Input::Quit),
        (_, KeyCode::Char(' ')) => Some(Input::TogglePause),
        (_, KeyCode::Char('+') | KeyCode::Char('=')) => Some(Input::Faster),
        (_, KeyCode::Char('-') | KeyCode::Char('_')) => Some(Input::Slower),
        (_, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Input::Reverse),
        (_, KeyCode::Char('h') | KeyCode::Char('H')) => Some(Input::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::thread;

    use crossterm::event::{MouseButton, MouseEvent};

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&press(KeyCode::Char('q')), false), Some(Input::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('Q')), false), Some(Input::Quit));
        assert_eq!(map_event(&press(KeyCode::Esc), false), Some(Input::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c, false), Some(Input::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('c')), false), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            map_event(&press(KeyCode::Char(' ')), false),
            Some(Input::TogglePause)
        );
        assert_eq!(map_event(&press(KeyCode::Char('+')), false), Some(Input::Faster));
        assert_eq!(map_event(&press(KeyCode::Char('=')), false), Some(Input::Faster));
        assert_eq!(map_event(&press(KeyCode::Char('-')), false), Some(Input::Slower));
        assert_eq!(map_event(&press(KeyCode::Char('r')), false), Some(Input::Reverse));
        assert_eq!(
            map_event(&press(KeyCode::Char('h')), false),
            Some(Input::ToggleHelp)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(map_event(&release, false), None);
    }

    #[test]
    fn test_mouse_press_quits_when_enabled() {
        let down = click(MouseEventKind::Down(MouseButton::Left));
        assert_eq!(map_event(&down, true), Some(Input::Quit));
        assert_eq!(map_event(&down, false), None);
        assert_eq!(map_event(&click(MouseEventKind::Moved), true), None);
    }

    #[test]
    fn test_letter_keys_ignore_case() {
        assert_eq!(map_event(&press(KeyCode::Char('R')), false), Some(Input::Reverse));
        assert_eq!(
            map_event(&press(KeyCode::Char('H')), false),
            Some(Input::ToggleHelp)
        );
    }

    #[test]
    fn test_wait_skips_unhandled_events_until_input() {
        let mut events = VecDeque::from([
            click(MouseEventKind::Moved),
            Event::Resize(80, 24),
            press(KeyCode::Char('x')),
            press(KeyCode::Char(' ')),
            press(KeyCode::Char('q')),
        ]);
        let mut waits = Vec::new();

        let input = wait_for_input(Duration::from_secs(5), true, |remaining| {
            waits.push(remaining);
            Ok(events.pop_front())
        })
        .unwrap();

        assert_eq!(input, Some(Input::TogglePause));
        assert_eq!(waits.len(), 4);
        assert!(waits.windows(2).all(|pair| pair[1] <= pair[0]));
        assert!(waits.iter().all(|wait| *wait <= Duration::from_secs(5)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_wait_returns_none_when_source_times_out() {
        let mut calls = 0;
        let input = wait_for_input(Duration::from_secs(5), true, |_| {
            calls += 1;
            Ok(if calls < 3 {
                Some(click(MouseEventKind::Moved))
            } else {
                None
            })
        })
        .unwrap();

        assert_eq!(input, None);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_unhandled_event_stream_does_not_shorten_frame() {
        let timeout = Duration::from_millis(30);
        let started = Instant::now();

        let input = wait_for_input(timeout, true, |_| {
            thread::sleep(Duration::from_millis(1));
            Ok(Some(click(MouseEventKind::Moved)))
        })
        .unwrap();

        assert_eq!(input, None);
        assert!(started.elapsed() >= timeout);
    }

    #[test]
    fn test_resize_is_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24), true), None);
    }
}
