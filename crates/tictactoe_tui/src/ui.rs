//! Stateless UI rendering.
//!
//! A pure projection of [`App`] into widgets: nothing here mutates state,
//! and every piece of display-only information (status text, disabled
//! fields, highlighted cells) is re-derived from the aggregate on each
//! frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line as TextLine,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{
    Cell, Mark, Outcome, Square, accepts_name_edit, accepts_start, status_line,
};

use crate::app::App;
use crate::theme::Palette;

/// Draws the whole interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();

    // Paint the themed background before anything else.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Name form
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], app, palette);
    draw_name_form(frame, chunks[1], app, palette);
    draw_board(frame, chunks[2], app, palette);
    draw_status(frame, chunks[3], app, palette);
    draw_help(frame, chunks[4], app, palette);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = Paragraph::new(format!("Tic Tac Toe  [{}]", app.theme().label()))
        .style(
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_name_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    draw_name_field(frame, cols[0], app, palette, Mark::X);
    draw_name_field(frame, cols[1], app, palette, Mark::O);

    // Start control: enabled only while the gate accepts it.
    let start_style = if accepts_start(app.state()) {
        Style::default()
            .fg(palette.o_mark)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let start = Paragraph::new("Start ⏎")
        .style(start_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(start, cols[2]);
}

fn draw_name_field(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, mark: Mark) {
    let unlocked = accepts_name_edit(app.state());
    let focused = unlocked && *app.focus() == mark;

    // Once started, show the confirmed (trimmed) name; before that, the
    // raw draft text being edited.
    let text = match app.state().roster() {
        Some(roster) => roster.name(mark).to_string(),
        None => app.state().draft().get(mark).to_string(),
    };

    let mark_color = match mark {
        Mark::X => palette.x_mark,
        Mark::O => palette.o_mark,
    };
    let style = if focused {
        Style::default().fg(palette.text)
    } else if unlocked {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(mark_color)
    };
    let border_style = if focused {
        Style::default().fg(mark_color)
    } else {
        Style::default().fg(palette.dim)
    };

    let cursor_marker = if focused { "_" } else { "" };
    let field = Paragraph::new(format!("{}{}", text, cursor_marker))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Player {}", mark)),
        );
    frame.render_widget(field, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, 29, 11);

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

    draw_row(frame, rows[0], app, palette, 0);
    draw_separator(frame, rows[1], palette);
    draw_row(frame, rows[2], app, palette, 3);
    draw_separator(frame, rows[3], palette);
    draw_row(frame, rows[4], app, palette, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (slot, offset) in [(0, 0), (2, 1), (4, 2)] {
        if let Some(cell) = Cell::from_index(start + offset) {
            draw_cell(frame, cols[slot], app, palette, cell);
        }
    }
    draw_vertical_separator(frame, cols[1], palette);
    draw_vertical_separator(frame, cols[3], palette);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, cell: Cell) {
    let state = app.state();

    let (text, base_style) = match state.board().get(cell) {
        Square::Empty => (
            (cell.to_index() + 1).to_string(),
            Style::default().fg(palette.dim),
        ),
        Square::Taken(Mark::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Taken(Mark::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let winning = state
        .outcome()
        .win()
        .is_some_and(|win| win.line.contains(&cell));
    let under_cursor = state.started() && !state.outcome().is_resolved() && *app.cursor() == cell;

    let style = if winning {
        base_style.bg(palette.win_bg).add_modifier(Modifier::BOLD)
    } else if under_cursor {
        base_style.bg(palette.cursor_bg)
    } else {
        base_style
    };

    // Middle line of the 3-line cell keeps the mark vertically centered.
    let lines = vec![
        TextLine::raw(""),
        TextLine::styled(text, style),
        TextLine::raw(""),
    ];
    let cell_widget = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell_widget, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.dim));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![TextLine::raw("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(palette.dim));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let state = app.state();

    let color = match state.outcome() {
        Outcome::Won(_) => palette.o_mark,
        Outcome::Draw => palette.dim,
        Outcome::InProgress => match state.turn() {
            _ if !state.started() => palette.dim,
            Mark::X => palette.x_mark,
            Mark::O => palette.o_mark,
        },
    };

    let status = Paragraph::new(status_line(state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let state = app.state();
    let text = if !state.started() {
        "Type name | Tab: Switch field | Enter: Start | Ctrl+T: Theme | Ctrl+R: Restart | Esc: Quit"
    } else if state.outcome().is_resolved() {
        "R: Restart | T: Theme | Q: Quit"
    } else {
        "←↑↓→: Move | Enter/Space: Place | 1-9: Cell | R: Restart | T: Theme | Q: Quit"
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
