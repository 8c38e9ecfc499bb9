// Top banner: brand block on the left, clock and feed status on the right.

use crate::app::{AppState, ContentState};
use crate::pipeline::{Category, GameKind};
use crate::theme::{BRAND_INDIGO, BRAND_VIOLET, ERROR_CORAL, GOLD, LIVE_MINT, MUTED};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

fn category_label(category: Category) -> &'static str {
    match category {
        Category::All => "Todos los juegos",
        Category::Game(GameKind::Juga3) => "Jugá 3",
        Category::Game(GameKind::Pega3) => "Pega 3",
        Category::Game(GameKind::Premia2) => "Premia 2",
        Category::Game(GameKind::Diaria) => "La Diaria",
        Category::Game(GameKind::Super) => "Súper Premio",
    }
}

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(BRAND_VIOLET));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let brand = vec![
        Line::from(Span::styled(
            "🎰 RESULTADOS DE LOTERÍA",
            Style::default()
                .fg(GOLD)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("   {}", category_label(app.category)),
            Style::default().fg(BRAND_INDIGO).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("   {}", app.date_text),
            Style::default().fg(MUTED),
        )),
    ];
    f.render_widget(Paragraph::new(brand).alignment(Alignment::Left), halves[0]);

    let state_span = if app.paused {
        Span::styled("⏸ PAUSADO", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    } else {
        match &app.content {
            ContentState::Failed(_) => {
                Span::styled("⚠ SIN CONEXIÓN", Style::default().fg(ERROR_CORAL))
            }
            ContentState::Loading => Span::styled("… CARGANDO", Style::default().fg(MUTED)),
            _ => Span::styled("● EN VIVO", Style::default().fg(LIVE_MINT)),
        }
    };

    let updated = app
        .last_updated
        .as_deref()
        .map(|stamp| format!("Actualizado: {}", stamp))
        .unwrap_or_default();

    let status = vec![
        Line::from(Span::styled(
            format!("🕐 {} ", app.clock_text),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(state_span),
        Line::from(Span::styled(updated, Style::default().fg(MUTED))),
    ];
    f.render_widget(Paragraph::new(status).alignment(Alignment::Right), halves[1]);
}
