use std::time::Duration;

use super::game_state::GameSnapshot;
use super::types::EndReason;

/// Outbound signals of a session. Calls are fire-and-forget; the session never waits on them.
pub trait GameObserver: Send + 'static {
    fn render_frame(&self, snapshot: &GameSnapshot);

    fn on_food_eaten(&self) {}

    fn on_new_best(&self, _best_score: u32) {}

    fn on_speed_changed(&self, _interval: Duration) {}

    fn on_game_over(&self, _reason: EndReason, _final_score: u32) {}
}
