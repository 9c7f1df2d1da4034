//! Pure collision predicates over a [`Body`].

use crate::body::{Body, Cell};
use crate::config::GridSize;

/// Why a tick ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Returns true when the head sits on the one-cell wall ring.
///
/// Uses exact equality against the border indices; the head never gets past
/// the ring because the round ends as soon as it reaches it.
#[must_use]
pub fn has_wall_collision(body: &Body, grid: GridSize) -> bool {
    let head = body.head();
    head.x == 0 || head.x == grid.last_column() || head.y == 0 || head.y == grid.last_row()
}

/// Returns true when any non-head segment shares the head's cell.
#[must_use]
pub fn has_self_collision(body: &Body) -> bool {
    let head = body.head();
    body.segments().skip(1).any(|segment| *segment == head)
}

#[must_use]
pub fn collides_with_pickup(body: &Body, pickup: Cell) -> bool {
    body.head() == pickup
}

/// Checks both deadly collisions, wall first.
#[must_use]
pub fn deadly_collision(body: &Body, grid: GridSize) -> Option<DeathReason> {
    if has_wall_collision(body, grid) {
        Some(DeathReason::WallCollision)
    } else if has_self_collision(body) {
        Some(DeathReason::SelfCollision)
    } else {
        None
    }
}
