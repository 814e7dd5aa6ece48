use super::types::{Cell, Direction};

/// Square board of `tile_count` x `tile_count` cells whose edges wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    tile_count: usize,
}

impl Grid {
    pub fn new(tile_count: usize) -> Self {
        Self { tile_count }
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn cell_count(&self) -> usize {
        self.tile_count * self.tile_count
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.tile_count && cell.y < self.tile_count
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.tile_count / 2, self.tile_count / 2)
    }

    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            wrap_axis(cell.x, dx, self.tile_count),
            wrap_axis(cell.y, dy, self.tile_count),
        )
    }

    /// Centers the board on the origin: cell `(x, y)` maps to `(x, z)` in the scene.
    pub fn to_render_space(&self, cell: Cell) -> (f32, f32) {
        let offset = (self.tile_count as f32 - 1.0) / 2.0;
        (cell.x as f32 - offset, cell.y as f32 - offset)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.tile_count;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
    }
}

fn wrap_axis(value: usize, delta: isize, size: usize) -> usize {
    (value as isize + delta).rem_euclid(size as isize) as usize
}
