//! Grid rendering for the terminal client.

use gridnav_runtime::Snapshot;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the full frame: status header on top, field grid below.
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, chunks[0], snapshot);
    render_grid(frame, chunks[1], snapshot);
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let paused_text = if snapshot.paused { " [PAUSED]" } else { "" };
    let text = vec![Line::from(vec![
        Span::raw("Tick: "),
        Span::styled(
            snapshot.ticks.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Agent: "),
        Span::styled(
            snapshot.position.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Priority: "),
        Span::styled(
            snapshot.priority.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            paused_text,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   q: quit | space: pause"),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("gridnav"));
    frame.render_widget(paragraph, area);
}

/// Each cell is two characters wide to stay roughly square in a terminal.
/// The widget border doubles as the field's synthetic obstacle ring.
fn render_grid(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let obstacle = Style::default().fg(Color::Red);
    let agent = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let floor = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(snapshot.field.height() as usize);
    for y in 0..snapshot.field.height() as i32 {
        let mut spans = Vec::with_capacity(snapshot.field.width() as usize);
        for x in 0..snapshot.field.width() as i32 {
            let span = if snapshot.position.x == x && snapshot.position.y == y {
                Span::styled("()", agent)
            } else if snapshot.field.is_obstacle(x, y) {
                Span::styled("██", obstacle)
            } else {
                Span::styled("· ", floor)
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("field"));
    frame.render_widget(paragraph, area);
}
