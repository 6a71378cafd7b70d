use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::github::types::Record;
use crate::tui::app::App;
use crate::tui::theme::ThemeColors;

const HEADER_HEIGHT: u16 = 2; // header + blank
const FOOTER_HEIGHT: u16 = 2; // blank + hints

pub fn draw(frame: &mut Frame, app: &App) {
    let mut lines = frame_lines(app);

    // Nothing left to show once the session is over
    if lines.is_empty() {
        return;
    }

    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + 1 || area.width < 20 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    // Header and footer stay pinned, only the rows in between scroll
    let footer = lines.split_off(lines.len() - FOOTER_HEIGHT as usize);
    let rows = lines.split_off(HEADER_HEIGHT as usize);
    let header = lines;

    let body = chunks[1];
    let offset = app
        .cursor()
        .map(|cursor| scroll_offset(cursor, rows.len(), body.height as usize))
        .unwrap_or(0);
    let visible: Vec<Line> = rows
        .into_iter()
        .skip(offset)
        .take(body.height as usize)
        .collect();

    frame.render_widget(Paragraph::new(header), chunks[0]);
    frame.render_widget(Paragraph::new(visible), body);
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}

/// The whole frame as lines, without scrolling.
///
/// Depends only on the state passed in; a terminated session yields nothing.
pub fn frame_lines(app: &App) -> Vec<Line<'static>> {
    if app.is_terminated() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(app.records().len() + 4);
    lines.push(header_line(app));
    lines.push(Line::default());
    for (idx, record) in app.records().iter().enumerate() {
        lines.push(row_line(record, app.cursor() == Some(idx), &app.theme));
    }
    lines.push(Line::default());
    lines.push(hint_line(&app.theme));
    lines
}

/// First visible row so that `cursor` stays on screen.
///
/// Computed from the cursor alone, so the same state always scrolls the same way.
pub fn scroll_offset(cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_offset = len - height;
    cursor.saturating_sub(height - 1).min(max_offset)
}

fn header_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("Select a PR {}", app.label), app.theme.header_style),
        Span::styled(
            format!(" ({} found)", app.records().len()),
            Style::default().fg(app.theme.count_color),
        ),
        Span::styled(":", app.theme.header_style),
    ])
}

fn row_line(record: &Record, is_cursor: bool, theme: &ThemeColors) -> Line<'static> {
    if is_cursor {
        // Highlight the whole row
        let text = format!(
            "> [{}] #{} - {}",
            record.group(),
            record.number,
            record.title
        );
        return Line::from(Span::styled(text, theme.row_selected));
    }

    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("[{}]", record.group()),
            theme.row_style.fg(theme.group_color),
        ),
        Span::styled(
            format!(" #{}", record.number),
            theme.row_style.fg(theme.number_color),
        ),
        Span::styled(format!(" - {}", record.title), theme.row_style),
    ])
}

fn hint_line(theme: &ThemeColors) -> Line<'static> {
    let muted = Style::default().fg(theme.muted);
    let key = Style::default().fg(theme.key_color);
    Line::from(vec![
        Span::styled("(Press ", muted),
        Span::styled("'q'", key),
        Span::styled(" or ", muted),
        Span::styled("'esc'", key),
        Span::styled(" to quit, ", muted),
        Span::styled("'enter'", key),
        Span::styled(" to select)", muted),
    ])
}
