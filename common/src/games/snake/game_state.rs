use std::time::Duration;

use crate::games::SessionRng;
use super::food::place_food;
use super::grid::Grid;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, EndReason, GamePhase};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub(super) grid: Grid,
    pub(super) snake: Snake,
    pub(super) direction: Direction,
    pub(super) pending_direction: Direction,
    pub(super) food: Option<Cell>,
    pub(super) score: u32,
    pub(super) speed_interval_ms: u64,
    pub(super) phase: GamePhase,
    pub(super) min_speed_ms: u64,
    pub(super) speed_step_ms: u64,
    pub(super) dense_board_threshold: f32,
}

impl SnakeGameState {
    /// Fresh idle game: snake centered and heading right, food placed, initial speed.
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let grid = Grid::new(settings.tile_count);
        let direction = Direction::Right;
        let snake = Snake::new(grid.center(), direction, settings.initial_length, &grid);
        let food = place_food(&grid, &snake, rng, settings.dense_board_threshold);

        Self {
            grid,
            snake,
            direction,
            pending_direction: direction,
            food,
            score: 0,
            speed_interval_ms: settings.initial_speed_ms,
            phase: GamePhase::Idle,
            min_speed_ms: settings.min_speed_ms,
            speed_step_ms: settings.speed_step_ms,
            dense_board_threshold: settings.dense_board_threshold,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_interval_ms(&self) -> u64 {
        self.speed_interval_ms
    }

    pub fn speed_interval(&self) -> Duration {
        Duration::from_millis(self.speed_interval_ms)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            GamePhase::Over(reason) => Some(reason),
            _ => None,
        }
    }

    pub(super) fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    pub fn snapshot(&self, best_score: u32) -> GameSnapshot {
        GameSnapshot {
            tile_count: self.grid.tile_count(),
            snake: self.snake.segments().copied().collect(),
            direction: self.direction,
            food: self.food,
            score: self.score,
            best_score,
            speed_interval_ms: self.speed_interval_ms,
            phase: self.phase,
        }
    }

    #[cfg(test)]
    pub(super) fn with_layout(
        settings: &SnakeSettings,
        body: &[Cell],
        direction: Direction,
        food: Cell,
    ) -> Self {
        let mut rng = SessionRng::new(0);
        let mut state = Self::new(settings, &mut rng);
        state.snake = Snake::from_cells(body).unwrap();
        state.direction = direction;
        state.pending_direction = direction;
        state.food = Some(food);
        state
    }
}

/// Read-only copy of the game handed to rendering and other collaborators.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub tile_count: usize,
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub best_score: u32,
    pub speed_interval_ms: u64,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn grid(&self) -> Grid {
        Grid::new(self.tile_count)
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_matches_defaults() {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&SnakeSettings::default(), &mut rng);

        let body: Vec<Cell> = state.snake().segments().copied().collect();
        assert_eq!(body, vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.speed_interval_ms(), 130);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert!(!state.is_running());
        assert!(!state.is_game_over());

        let food = state.food().unwrap();
        assert!(!state.snake().contains(&food));
    }

    #[test]
    fn test_start_only_leaves_idle() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new(&SnakeSettings::default(), &mut rng);
        state.start();
        assert!(state.is_running());

        state.phase = GamePhase::Over(EndReason::SelfCollision);
        state.start();
        assert_eq!(state.end_reason(), Some(EndReason::SelfCollision));
    }

    #[test]
    fn test_snapshot_copies_visible_state() {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&SnakeSettings::default(), &mut rng);
        let snapshot = state.snapshot(7);

        assert_eq!(snapshot.best_score, 7);
        assert_eq!(snapshot.head(), Some(Cell::new(10, 10)));
        assert_eq!(snapshot.snake.len(), 3);
        assert_eq!(snapshot.food, state.food());
        assert_eq!(snapshot.grid(), *state.grid());
    }
}
