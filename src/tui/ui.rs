//! Stateless UI rendering for grid games.

use super::app::App;
use crate::games::{Cell, Coord, Ruleset, Seed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title, the board with cursor highlight, and the status bar.
pub fn draw<R: Ruleset>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Min(R::ROWS as u16 + 2),     // Board
            Constraint::Length(3),                   // Status
            Constraint::Length(1),                   // Help
        ])
        .split(area);

    let title = Paragraph::new(R::NAME)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(status_color(app)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move | enter select | 1-9 pick | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn status_color<R: Ruleset>(app: &App<R>) -> Color {
    if app.game().is_over() {
        Color::Red
    } else {
        Color::Yellow
    }
}

fn draw_board<R: Ruleset>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let board = app.game().board();
    let width = (board.cols() * 3 + 2) as u16;
    let height = (board.rows() + 2) as u16;

    let lines: Vec<Line> = (0..board.rows())
        .map(|row| {
            let spans: Vec<Span> = (0..board.cols())
                .map(|col| {
                    let at = Coord::new(row, col);
                    cell_span::<R>(board.get(at).unwrap_or_default(), at == app.cursor())
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, width, height));
}

/// Colour of a seed in the given game.
fn seed_color<R: Ruleset>(seed: Seed) -> Color {
    let (r, g, b) = match seed {
        Seed::Cross => R::CROSS_RGB,
        Seed::Nought => R::NOUGHT_RGB,
    };
    Color::Rgb(r, g, b)
}

fn cell_span<R: Ruleset>(cell: Cell, highlighted: bool) -> Span<'static> {
    let base_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(seed) => Style::default()
            .fg(seed_color::<R>(seed))
            .add_modifier(Modifier::BOLD),
    };

    let style = if highlighted {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    Span::styled(format!(" {} ", cell.glyph()), style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
