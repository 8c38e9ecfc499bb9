// Draw-result cards
//
// One card per draw: cleaned game title in the border, date/time meta line,
// then either the winning numbers as cells or a pending placeholder. The
// card body is built as plain lines first so it stays a pure function of
// the record.

use crate::feed::{DrawRecord, Token};
use crate::pipeline::{dates, GameKind};
use crate::theme::{BRAND_INDIGO, BRAND_VIOLET, GOLD, MUTED, SIGN_PINK};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows one card occupies, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Narrower than this and the cells wrap; cards per row derives from it
pub const CARD_MIN_WIDTH: u16 = 30;

const WINNING_CAPTION: &str = "NÚMEROS GANADORES";
const DIARIA_CAPTION: &str = "NÚMERO · SIGNO · MULTIPLICADOR";
const PENDING: &str = "⏳ Pendiente";
const UPCOMING_BADGE: &str = "⏳ Próximamente";

/// Time labels the feed embeds in game names, stripped for display
const TIME_LABELS: [&str; 5] = ["11:00 AM", "3:00 PM", "9:00 PM", "10:00 AM", "2:00 PM"];

/// Remove embedded time-slot labels (and the whitespace before them) from a
/// game name. Matching is ASCII case-insensitive, like the legacy display.
pub fn clean_game_name(name: &str) -> String {
    let mut out = name.to_string();
    for label in TIME_LABELS {
        let mut i = 0;
        while i + label.len() <= out.len() {
            if out.as_bytes()[i..i + label.len()].eq_ignore_ascii_case(label.as_bytes()) {
                let mut start = i;
                while start > 0 && out.as_bytes()[start - 1].is_ascii_whitespace() {
                    start -= 1;
                }
                out.replace_range(start..i + label.len(), "");
                i = start;
            } else {
                i += 1;
            }
        }
    }
    out.trim().to_string()
}

fn cell_span(token: &Token) -> Span<'static> {
    let bg = if token.is_numeric() { BRAND_INDIGO } else { SIGN_PINK };
    Span::styled(
        format!(" {} ", token.display()),
        Style::default()
            .bg(bg)
            .fg(ratatui::style::Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn cells_line(tokens: &[Token]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        spans.push(cell_span(token));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn caption_line(caption: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        caption,
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    ))
}

fn pending_line() -> Line<'static> {
    Line::from(Span::styled(PENDING, Style::default().fg(MUTED)))
}

/// Build the card body for one draw. Pure: same record, same lines.
pub fn card_lines(key: &str, record: &DrawRecord, today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(4);

    // Meta line: resolved date, plus the time label when the draw has one
    let mut meta = vec![Span::styled(
        format!("📅 {}", dates::format_with_year(&record.draw_date, today)),
        Style::default().fg(MUTED),
    )];
    if let Some(time) = &record.draw_time {
        meta.push(Span::styled(
            format!("  🕐 {}", time),
            Style::default().fg(MUTED),
        ));
    }
    lines.push(Line::from(meta));

    if GameKind::from_key(key) == Some(GameKind::Juga3) {
        // Single-number game: the digits render individually
        if record.winning_number.is_some() {
            lines.push(caption_line(WINNING_CAPTION));
            lines.push(cells_line(&record.individual_numbers));
        } else {
            lines.push(pending_line());
        }
    } else if !record.additional_numbers.is_empty() {
        let caption = if GameKind::from_key(key) == Some(GameKind::Diaria) {
            DIARIA_CAPTION
        } else {
            WINNING_CAPTION
        };
        lines.push(caption_line(caption));
        lines.push(cells_line(&record.additional_numbers));
    } else {
        lines.push(pending_line());
    }

    if record.is_pending() {
        lines.push(Line::from(Span::styled(
            UPCOMING_BADGE,
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

pub fn render_card(f: &mut Frame, area: Rect, key: &str, record: &DrawRecord, today: NaiveDate) {
    let title = clean_game_name(&record.game_name);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_VIOLET))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let body = Paragraph::new(card_lines(key, record, today)).block(block);
    f.render_widget(body, area);
}
