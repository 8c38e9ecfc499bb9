// Roulette overlay
//
// Centered modal over the dashboard. Confetti positions are derived from
// particle age at render time, painted straight into the frame buffer.

use crate::app::roulette::{Confetti, Roulette, RoulettePhase};
use crate::theme::{BRAND_VIOLET, CONFETTI_COLORS, GOLD, MUTED, SIGN_PINK};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render_roulette(f: &mut Frame, area: Rect, roulette: &Roulette) {
    if !roulette.open {
        return;
    }

    let overlay = centered_rect(48, 14, area);
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(BRAND_VIOLET))
        .title(Span::styled(
            " 🎰 Ruleta de la Suerte ",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let lines = match &roulette.phase {
        RoulettePhase::Idle => vec![
            Line::from(""),
            face_line(0),
            Line::from(""),
            Line::from(Span::styled(
                "Presiona Enter para descubrir tus números",
                Style::default().fg(MUTED),
            )),
        ],
        RoulettePhase::Spinning { face, .. } => vec![
            Line::from(""),
            face_line(*face),
            Line::from(""),
            Line::from(Span::styled("Girando…", Style::default().fg(MUTED))),
        ],
        RoulettePhase::Revealed {
            numbers, message, ..
        } => vec![
            Line::from(""),
            numbers_line(&numbers[..2]),
            Line::from(""),
            numbers_line(&numbers[2..]),
            Line::from(""),
            Line::from(Span::styled(
                format!("✨ {} ✨", message),
                Style::default().fg(SIGN_PINK).add_modifier(Modifier::BOLD),
            )),
        ],
    };

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    if let RoulettePhase::Revealed {
        revealed_at,
        confetti,
        ..
    } = &roulette.phase
    {
        paint_confetti(f, inner, *revealed_at, confetti);
    }
}

fn face_line(face: u32) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {:03} ", face),
        Style::default()
            .bg(BRAND_VIOLET)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn numbers_line(numbers: &[u8]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("  {:02}  ", n),
            Style::default()
                .bg(BRAND_VIOLET)
                .fg(GOLD)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn paint_confetti(f: &mut Frame, area: Rect, revealed_at: Instant, confetti: &[Confetti]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let since_reveal = Instant::now().saturating_duration_since(revealed_at);
    let buf = f.buffer_mut();

    for particle in confetti {
        if since_reveal < particle.spawn_delay {
            continue;
        }
        let age = since_reveal - particle.spawn_delay;
        if age >= particle.fall_time {
            continue;
        }

        let progress = age.as_secs_f32() / particle.fall_time.as_secs_f32();
        let y = area.top() + (progress * area.height as f32) as u16;
        let x = area.left() + (particle.column * (area.width - 1) as f32) as u16;
        if x < area.right() && y < area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('•').set_fg(CONFETTI_COLORS[particle.color]);
            }
        }
    }
}

/// Rect of the given size centered inside `r`, clipped to fit
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
