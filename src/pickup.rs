use rand::Rng;

use crate::body::Cell;
use crate::config::GridSize;

/// The single consumable cell that makes the body grow.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pickup {
    pub position: Cell,
}

impl Pickup {
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates a pickup at a random inner cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        Self::at(random_inner_cell(rng, grid))
    }

    /// Moves the pickup to a random inner cell.
    ///
    /// Placement does not look at the body, so the new cell may lie under a
    /// segment.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridSize) {
        self.position = random_inner_cell(rng, grid);
    }
}

/// Draws x from `[1, inner_width]` and y from `[1, inner_height]` uniformly.
#[must_use]
pub fn random_inner_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Cell {
    let max_x = i32::from(grid.inner_width()).max(1);
    let max_y = i32::from(grid.inner_height()).max(1);

    Cell {
        x: rng.gen_range(1..=max_x),
        y: rng.gen_range(1..=max_y),
    }
}
