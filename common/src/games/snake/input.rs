use super::game_state::SnakeGameState;
use super::types::{Direction, GamePhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionChange {
    Accepted { started: bool },
    Rejected(RejectReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    GameOver,
    Reversal,
}

/// Records `candidate` as the direction for the next tick.
///
/// The reversal guard compares against the committed direction, not the pending one:
/// whatever is pending when the tick fires is never the opposite of the way the snake
/// is actually moving.
pub fn propose_direction(state: &mut SnakeGameState, candidate: Direction) -> DirectionChange {
    if state.is_game_over() {
        return DirectionChange::Rejected(RejectReason::GameOver);
    }
    if candidate.is_opposite(&state.direction) {
        return DirectionChange::Rejected(RejectReason::Reversal);
    }

    state.pending_direction = candidate;

    let started = state.phase == GamePhase::Idle;
    if started {
        state.start();
    }
    DirectionChange::Accepted { started }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{EndReason, SnakeSettings};

    fn idle_state() -> SnakeGameState {
        let mut rng = SessionRng::new(11);
        SnakeGameState::new(&SnakeSettings::default(), &mut rng)
    }

    #[test]
    fn test_first_valid_direction_starts_game() {
        let mut state = idle_state();
        let change = propose_direction(&mut state, Direction::Up);
        assert_eq!(change, DirectionChange::Accepted { started: true });
        assert!(state.is_running());
        assert_eq!(state.pending_direction(), Direction::Up);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn test_same_direction_also_starts_game() {
        let mut state = idle_state();
        let change = propose_direction(&mut state, Direction::Right);
        assert_eq!(change, DirectionChange::Accepted { started: true });
    }

    #[test]
    fn test_reversal_is_rejected_and_pending_unchanged() {
        let mut state = idle_state();
        let change = propose_direction(&mut state, Direction::Left);
        assert_eq!(change, DirectionChange::Rejected(RejectReason::Reversal));
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_running_game_accepts_without_restarting() {
        let mut state = idle_state();
        propose_direction(&mut state, Direction::Down);
        let change = propose_direction(&mut state, Direction::Up);
        assert_eq!(change, DirectionChange::Accepted { started: false });
        assert_eq!(state.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_second_input_in_same_tick_is_guarded_by_current_direction() {
        let mut state = idle_state();
        propose_direction(&mut state, Direction::Up);
        let change = propose_direction(&mut state, Direction::Left);
        assert_eq!(change, DirectionChange::Rejected(RejectReason::Reversal));
        assert_eq!(state.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut state = idle_state();
        state.phase = GamePhase::Over(EndReason::SelfCollision);
        for direction in [Direction::Up, Direction::Down, Direction::Right] {
            let change = propose_direction(&mut state, direction);
            assert_eq!(change, DirectionChange::Rejected(RejectReason::GameOver));
        }
        assert_eq!(state.pending_direction(), Direction::Right);
    }
}
