use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::body::Cell;
use crate::config::{GridSize, Palette, GLYPH_TILE, PALETTE};
use crate::game::{GameState, GameStatus};
use crate::ui::hud::render_hud;

/// Terminal columns drawn per grid cell.
const TILE_COLUMNS: u16 = 2;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let board = board_rect(board_area, state.bounds());
    frame.render_widget(
        Block::new().style(Style::new().bg(PALETTE.background)),
        board,
    );

    render_walls(frame, board, state.bounds(), border_color(&PALETTE, state.status));
    render_body(frame, board, state);
    draw_tile(frame, board, state.pickup.position, PALETTE.pickup);

    render_hud(frame, hud_area, state);
}

/// Picks the wall color for the current game state.
#[must_use]
pub fn border_color(palette: &Palette, status: GameStatus) -> Color {
    match status {
        GameStatus::Running => palette.border_running,
        GameStatus::Lost => palette.border_lost,
        GameStatus::Paused | GameStatus::QuitRequested => palette.border_paused,
    }
}

fn board_rect(area: Rect, grid: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: grid.width.saturating_mul(TILE_COLUMNS).min(area.width),
        height: grid.height.min(area.height),
    }
}

fn render_walls(frame: &mut Frame<'_>, board: Rect, grid: GridSize, color: Color) {
    let last_column = grid.last_column();
    let last_row = grid.last_row();

    for x in 0..=last_column {
        draw_tile(frame, board, Cell::new(x, 0), color);
        draw_tile(frame, board, Cell::new(x, last_row), color);
    }

    for y in 1..last_row {
        draw_tile(frame, board, Cell::new(0, y), color);
        draw_tile(frame, board, Cell::new(last_column, y), color);
    }
}

fn render_body(frame: &mut Frame<'_>, board: Rect, state: &GameState) {
    for (index, segment) in state.body.segments().enumerate() {
        let color = if index == 0 { PALETTE.head } else { PALETTE.body };
        draw_tile(frame, board, *segment, color);
    }
}

fn draw_tile(frame: &mut Frame<'_>, board: Rect, cell: Cell, color: Color) {
    let Some((x, y)) = cell_to_terminal(board, cell) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_TILE, Style::new().fg(color).bg(PALETTE.background));
}

fn cell_to_terminal(board: Rect, cell: Cell) -> Option<(u16, u16)> {
    let column = u16::try_from(cell.x).ok()?.checked_mul(TILE_COLUMNS)?;
    let row = u16::try_from(cell.y).ok()?;

    let x = board.x.checked_add(column)?;
    let y = board.y.checked_add(row)?;
    if x.saturating_add(TILE_COLUMNS) > board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
