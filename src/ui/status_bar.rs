// Bottom status bar with keyboard shortcuts and the pause indicator.

use crate::app::AppState;
use crate::theme::{BRAND_VIOLET, GOLD, LIVE_MINT, MUTED};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let key_style = Style::default().fg(BRAND_VIOLET).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(MUTED);

    let pause_hint = if app.paused { "Reanudar | " } else { "Pausar | " };

    let mut spans = vec![
        Span::styled(" Q:", key_style),
        Span::styled("Salir | ", desc_style),
        Span::styled("P:", key_style),
        Span::styled(pause_hint, desc_style),
        Span::styled("R:", key_style),
        Span::styled("Ruleta | ", desc_style),
        Span::styled("↑↓:", key_style),
        Span::styled("Secciones ", desc_style),
    ];

    let (state, color) = if app.paused {
        ("[PAUSADO]", GOLD)
    } else {
        ("[EN VIVO]", LIVE_MINT)
    };
    spans.push(Span::styled(
        state,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(BRAND_VIOLET)),
        )
        .alignment(Alignment::Left);

    f.render_widget(bar, area);
}
