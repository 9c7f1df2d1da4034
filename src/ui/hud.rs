use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::collision::DeathReason;
use crate::config::PALETTE;
use crate::game::{GameState, GameStatus};
use crate::renderer::border_color;

/// Renders the one-line status bar under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    frame.render_widget(Paragraph::new(status_line(state)), area);
}

fn status_line(state: &GameState) -> Line<'static> {
    let label_style = Style::new()
        .fg(border_color(&PALETTE, state.status))
        .add_modifier(Modifier::BOLD);
    let text_style = Style::new().fg(PALETTE.hud_text);

    Line::from(vec![
        Span::styled(status_label(state.status, state.death_reason), label_style),
        Span::styled(
            format!(
                "  length {}  speed {}ms  ",
                state.body.len(),
                state.body.speed()
            ),
            text_style,
        ),
        Span::styled(key_hint(state.status), text_style),
    ])
}

fn status_label(status: GameStatus, death_reason: Option<DeathReason>) -> &'static str {
    match (status, death_reason) {
        (GameStatus::Running, _) => "RUNNING",
        (GameStatus::Paused, _) => "PAUSED",
        (GameStatus::Lost, Some(DeathReason::WallCollision)) => "LOST: hit wall",
        (GameStatus::Lost, Some(DeathReason::SelfCollision)) => "LOST: hit yourself",
        (GameStatus::Lost, None) => "LOST",
        (GameStatus::QuitRequested, _) => "BYE",
    }
}

fn key_hint(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Running => "[Space] pause  [Esc] quit",
        GameStatus::Paused => "[Space] start  [Esc] quit",
        GameStatus::Lost => "[Space] restart  [Esc] quit",
        GameStatus::QuitRequested => "",
    }
}
