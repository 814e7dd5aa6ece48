use crate::games::SessionRng;

use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;

const MAX_REJECTION_ATTEMPTS: usize = 100;

/// Picks a uniformly random cell not covered by `snake`, or `None` when the board is full.
///
/// Sparse boards use rejection sampling. Once occupancy passes `dense_threshold`
/// (or sampling keeps hitting the body) the free cells are enumerated instead.
pub fn place_food(
    grid: &Grid,
    snake: &Snake,
    rng: &mut SessionRng,
    dense_threshold: f32,
) -> Option<Cell> {
    let total = grid.cell_count();
    if snake.len() >= total {
        return None;
    }

    let occupancy = snake.len() as f32 / total as f32;
    if occupancy <= dense_threshold {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let cell = Cell::new(
                rng.random_range(0..grid.tile_count()),
                rng.random_range(0..grid.tile_count()),
            );
            if !snake.contains(&cell) {
                return Some(cell);
            }
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|cell| !snake.contains(cell)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Direction;

    fn fill_except(grid: &Grid, free: &[Cell]) -> Snake {
        let cells: Vec<Cell> = grid.cells().filter(|c| !free.contains(c)).collect();
        Snake::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_food_never_on_snake() {
        let grid = Grid::new(20);
        let snake = Snake::new(Cell::new(10, 10), Direction::Right, 3, &grid);
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let food = place_food(&grid, &snake, &mut rng, 0.7).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_dense_board_finds_last_free_cell() {
        let grid = Grid::new(5);
        let last = Cell::new(3, 1);
        let snake = fill_except(&grid, &[last]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(place_food(&grid, &snake, &mut rng, 0.7), Some(last));
        }
    }

    #[test]
    fn test_sampling_path_on_nearly_full_board_returns_free_cell() {
        let grid = Grid::new(5);
        let last = Cell::new(0, 4);
        let snake = fill_except(&grid, &[last]);
        let mut rng = SessionRng::new(3);
        assert_eq!(place_food(&grid, &snake, &mut rng, 1.0), Some(last));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let grid = Grid::new(5);
        let snake = fill_except(&grid, &[]);
        let mut rng = SessionRng::new(1);
        assert_eq!(place_food(&grid, &snake, &mut rng, 0.7), None);
    }
}
