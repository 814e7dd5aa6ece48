use crate::games::SessionRng;
use crate::log;
use super::food::place_food;
use super::game_state::SnakeGameState;
use super::types::{EndReason, GamePhase};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub speed_changed: bool,
    pub ended: Option<EndReason>,
}

/// Advances a running game by one tick. Does nothing unless the game is running.
pub fn advance(state: &mut SnakeGameState, rng: &mut SessionRng) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !state.is_running() {
        return outcome;
    }

    state.direction = state.pending_direction;
    let Some(head) = state.snake.head() else {
        return outcome;
    };
    let new_head = state.grid.wrap(head, state.direction);

    // Checked against the body before the tail moves, so following the tail is fatal too.
    if state.snake.contains(&new_head) {
        state.phase = GamePhase::Over(EndReason::SelfCollision);
        outcome.ended = Some(EndReason::SelfCollision);
        log!(
            "Self collision at ({}, {}), final score {}",
            new_head.x,
            new_head.y,
            state.score
        );
        return outcome;
    }

    state.snake.push_head(new_head);

    if state.food != Some(new_head) {
        state.snake.pop_tail();
        return outcome;
    }

    state.score += 1;
    outcome.ate_food = true;
    state.food = place_food(&state.grid, &state.snake, rng, state.dense_board_threshold);
    log!(
        "Ate food at ({}, {}), score {}, length {}",
        new_head.x,
        new_head.y,
        state.score,
        state.snake.len()
    );

    if state.food.is_none() {
        state.phase = GamePhase::Over(EndReason::BoardFull);
        outcome.ended = Some(EndReason::BoardFull);
        log!("Board full, final score {}", state.score);
        return outcome;
    }

    if state.speed_interval_ms > state.min_speed_ms {
        let previous = state.speed_interval_ms;
        state.speed_interval_ms = previous
            .saturating_sub(state.speed_step_ms)
            .max(state.min_speed_ms);
        outcome.speed_changed = state.speed_interval_ms != previous;
    }

    outcome
}
