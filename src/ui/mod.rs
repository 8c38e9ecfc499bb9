// UI rendering
//
// draw() lays out banner, content and status bar, then the roulette overlay
// on top. The content area renders the grouped sections: a header line per
// time slot followed by rows of cards.

pub mod banner;
pub mod cards;
pub mod roulette;
pub mod status_bar;

use crate::app::{AppState, ContentState};
use crate::clock;
use crate::pipeline::{Grouped, TimeSlot};
use crate::theme::{BRAND_VIOLET, ERROR_CORAL, GOLD, MUTED};
use cards::{CARD_HEIGHT, CARD_MIN_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(f: &mut Frame, app: &AppState) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    banner::render_banner(f, chunks[0], app);
    render_content(f, chunks[1], app);
    status_bar::render_status_bar(f, chunks[2], app);

    // Overlay last so it sits above everything
    roulette::render_roulette(f, size, &app.roulette);
}

fn render_content(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.content {
        ContentState::Loading => {
            render_notice(f, area, "⏳ Cargando resultados…", MUTED);
        }
        ContentState::Empty => {
            render_notice(
                f,
                area,
                "ℹ No hay resultados disponibles para este juego todavía.",
                MUTED,
            );
        }
        ContentState::Failed(reason) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "⚠ Error al cargar los resultados",
                    Style::default().fg(ERROR_CORAL).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(reason.clone(), Style::default().fg(MUTED))),
            ];
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        }
        ContentState::Ready(grouped) => {
            render_sections(f, area, grouped, app.scroll);
        }
    }
}

fn render_notice(f: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn section_title(slot: TimeSlot) -> &'static str {
    match slot {
        TimeSlot::Morning => "🌅 SORTEO DE LA MAÑANA - 11:00 AM",
        TimeSlot::Afternoon => "☀ SORTEO DE LA TARDE - 3:00 PM",
        TimeSlot::Evening => "🌙 SORTEO DE LA NOCHE - 9:00 PM",
        TimeSlot::Special => "🏆 SÚPER PREMIO",
    }
}

fn render_sections(f: &mut Frame, area: Rect, grouped: &Grouped, scroll: usize) {
    let today = clock::local_now().date_naive();
    let cards_per_row = (area.width / CARD_MIN_WIDTH).max(1) as usize;
    let mut y = area.y;

    let sections = grouped
        .slots()
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty());

    'sections: for (slot, entries) in sections.skip(scroll) {
        if y >= area.bottom() {
            break;
        }

        let header_color = if slot == TimeSlot::Special { GOLD } else { BRAND_VIOLET };
        let header = Paragraph::new(Line::from(Span::styled(
            section_title(slot),
            Style::default().fg(header_color).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(header, Rect::new(area.x, y, area.width, 1));
        y += 1;

        for row in entries.chunks(cards_per_row) {
            if y + CARD_HEIGHT > area.bottom() {
                break 'sections;
            }
            let row_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            let constraints: Vec<Constraint> = (0..cards_per_row)
                .map(|_| Constraint::Ratio(1, cards_per_row as u32))
                .collect();
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(row_area);

            for ((key, record), cell) in row.iter().zip(cells.iter()) {
                cards::render_card(f, *cell, key, record, today);
            }
            y += CARD_HEIGHT;
        }

        // Gap between sections
        y += 1;
    }
}
