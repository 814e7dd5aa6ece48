use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use eframe::egui;
use snake3d_common::games::snake::{EndReason, GameSnapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverInfo {
    pub reason: EndReason,
    pub final_score: u32,
}

#[derive(Default)]
struct Inner {
    snapshot: Option<GameSnapshot>,
    game_over: Option<GameOverInfo>,
    food_eaten_at: Option<Instant>,
    new_best_at: Option<Instant>,
    context: Option<egui::Context>,
}

/// State shared between the session thread and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<Inner>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn has_context(&self) -> bool {
        self.lock().context.is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        self.lock().context = Some(ctx);
    }

    pub fn request_repaint(&self) {
        if let Some(ctx) = self.lock().context.as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        let mut inner = self.lock();
        if !snapshot.is_game_over() {
            inner.game_over = None;
        }
        inner.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.lock().snapshot.clone()
    }

    pub fn set_game_over(&self, info: GameOverInfo) {
        self.lock().game_over = Some(info);
    }

    pub fn game_over(&self) -> Option<GameOverInfo> {
        self.lock().game_over
    }

    pub fn mark_food_eaten(&self) {
        self.lock().food_eaten_at = Some(Instant::now());
    }

    pub fn food_eaten_at(&self) -> Option<Instant> {
        self.lock().food_eaten_at
    }

    pub fn mark_new_best(&self) {
        self.lock().new_best_at = Some(Instant::now());
    }

    pub fn new_best_at(&self) -> Option<Instant> {
        self.lock().new_best_at
    }
}
