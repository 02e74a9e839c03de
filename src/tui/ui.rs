//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_scoreboard::{Cell, Marker, Position};

use super::app::{App, NameForm, Screen};

const KEY_HELP: &str =
    "arrows/1-9 move  enter/space play  r restart  n new players  s reset scores  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = Paragraph::new("Strictly Scoreboard - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let keys = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[4]);

    if let Screen::NameEntry(form) = app.screen() {
        draw_name_form(frame, area, form);
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let [first, second] = app.names();
    let [first_score, second_score] = app.scores();

    let line = Line::from(vec![
        Span::styled(
            format!("{} (X): {}", first, first_score),
            marker_style(Marker::X, app.turn() == Some(Marker::X)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Ties: {}", app.ties()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} (O): {}", second, second_score),
            marker_style(Marker::O, app.turn() == Some(Marker::O)),
        ),
    ]);

    let scores = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scores, area);
}

fn marker_style(marker: Marker, to_move: bool) -> Style {
    let color = match marker {
        Marker::X => Color::Blue,
        Marker::O => Color::Red,
    };
    let style = Style::default().fg(color);
    if to_move {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let index = pos.to_index();

    let (symbol, base_style) = match app.cells()[index] {
        Cell::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Marked(marker) => (format!(" {} ", marker), marker_style(marker, false)),
    };

    let winning = app
        .winning_line()
        .is_some_and(|line| line.contains(&index));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_name_form(frame: &mut Frame, area: Rect, form: &NameForm) {
    let popup = center_rect(area, 44, 8);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .zip(["Player 1 (X)", "Player 2 (O)"])
        .enumerate()
        .map(|(i, (value, label))| {
            let focused = i == form.focus();
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{:<14}", label), style),
                Span::raw(format!("{}{}", value, cursor)),
            ])
        })
        .chain([
            Line::from(""),
            Line::from(Span::styled(
                "tab switch  enter start  esc cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New game"),
    );
    frame.render_widget(paragraph, popup);
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
