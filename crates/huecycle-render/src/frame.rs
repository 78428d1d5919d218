//! Frame rendering.

use huecycle_core::FrameView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::color::{hex, readable_fg, to_terminal_color};

/// Render one animation frame over the whole terminal.
pub fn render_frame(frame: &mut Frame, view: &FrameView) {
    let area = frame.area();
    let background = to_terminal_color(view.color);
    frame.render_widget(Block::new().style(Style::new().bg(background)), area);

    if !view.show_help {
        return;
    }

    let fg = readable_fg(view.color);

    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Top padding
        Constraint::Length(1), // Hue readout
        Constraint::Length(1), // Speed and state
        Constraint::Fill(1),   // Bottom padding
        Constraint::Length(1), // Help text
    ])
    .split(area);

    let readout = Paragraph::new(format!("hue {:5.1}°  {}", view.hue, hex(view.color)))
        .style(Style::new().fg(fg).bold())
        .alignment(Alignment::Center);
    frame.render_widget(readout, chunks[1]);

    let mut status = vec![Span::raw(view.speed.name())];
    if view.reversed {
        status.push(Span::raw("  reversed"));
    }
    if view.paused {
        status.push(Span::raw("  paused").bold());
    }
    frame.render_widget(
        Line::from(status).style(Style::new().fg(fg)).centered(),
        chunks[2],
    );

    let help = Line::from(vec![
        "q".bold(),
        " quit  ".into(),
        "space".bold(),
        " pause  ".into(),
        "+/-".bold(),
        " speed  ".into(),
        "r".bold(),
        " reverse  ".into(),
        "h".bold(),
        " hide".into(),
    ])
    .style(Style::new().fg(fg))
    .centered();
    frame.render_widget(help, chunks[4]);
}

#[cfg(test)]
mod tests {
    use huecycle_core::{AnimationSpeed, Color as EngineColor};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    use super::*;

    fn view(show_help: bool) -> FrameView {
        FrameView {
            color: EngineColor::new(1.0, 0.0, 0.0, 1.0),
            hue: 0.0,
            speed: AnimationSpeed::Normal,
            reversed: false,
            paused: true,
            show_help,
        }
    }

    fn draw(view: &FrameView) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        terminal.draw(|frame| render_frame(frame, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_fills_every_cell_with_frame_color() {
        let buffer = draw(&view(false));
        assert!(
            buffer
                .content()
                .iter()
                .all(|cell| cell.bg == Color::Rgb(255, 0, 0) && cell.symbol() == " ")
        );
    }

    #[test]
    fn test_overlay_keeps_background() {
        let buffer = draw(&view(true));
        assert!(buffer.content().iter().all(|cell| cell.bg == Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_overlay_shows_readout_and_help() {
        let buffer = draw(&view(true));
        let text: Vec<String> = (0..buffer.area.height)
            .map(|y| row_text(&buffer, y))
            .collect();

        assert!(text.iter().any(|row| row.contains("#ff0000")));
        assert!(text.iter().any(|row| row.contains("normal") && row.contains("paused")));
        assert!(text.last().is_some_and(|row| row.contains("quit")));
    }
}
