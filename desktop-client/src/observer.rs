use snake3d_common::games::snake::{EndReason, GameObserver, GameSnapshot};
use snake3d_common::log;

use crate::state::{GameOverInfo, SharedState};

/// Forwards session signals to the UI thread.
#[derive(Clone)]
pub struct UiObserver {
    shared_state: SharedState,
}

impl UiObserver {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameObserver for UiObserver {
    fn render_frame(&self, snapshot: &GameSnapshot) {
        self.shared_state.set_snapshot(snapshot.clone());
        self.shared_state.request_repaint();
    }

    fn on_food_eaten(&self) {
        self.shared_state.mark_food_eaten();
    }

    fn on_new_best(&self, best_score: u32) {
        log!("New best score: {}", best_score);
        self.shared_state.mark_new_best();
    }

    fn on_game_over(&self, reason: EndReason, final_score: u32) {
        self.shared_state.set_game_over(GameOverInfo { reason, final_score });
        self.shared_state.request_repaint();
    }
}
