use std::time::{Duration, Instant};

use eframe::egui;
use snake3d_common::games::snake::{Direction, EndReason, SessionHandle};

use super::board::BoardView;
use super::hud::render_hud;
use crate::state::{GameOverInfo, SharedState};

const FOOD_FLASH: Duration = Duration::from_millis(250);
const NEW_BEST_HIGHLIGHT: Duration = Duration::from_millis(1500);

pub struct SnakeApp {
    shared_state: SharedState,
    handle: SessionHandle,
    board: BoardView,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, handle: SessionHandle) -> Self {
        Self {
            shared_state,
            handle,
            board: BoardView::new(),
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let (start, reset, direction) = ctx.input(|i| {
            let direction = if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            };
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
                direction,
            )
        });

        if reset {
            self.handle.on_reset_requested();
        }
        if start {
            self.handle.on_start_or_resume();
        }
        if let Some(direction) = direction {
            self.handle.on_directional_input(direction);
        }
    }

    fn render_game_over(ui: &egui::Ui, board_rect: egui::Rect, info: GameOverInfo) {
        let title = match info.reason {
            EndReason::SelfCollision => "GAME OVER",
            EndReason::BoardFull => "BOARD FULL",
        };
        ui.painter().text(
            board_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}\n{}", title, info.final_score),
            egui::FontId::proportional(40.0),
            egui::Color32::from_white_alpha(220),
        );
    }
}

fn remaining_fraction(since: Option<Instant>, window: Duration) -> f32 {
    match since {
        Some(at) if at.elapsed() < window => 1.0 - at.elapsed().as_secs_f32() / window.as_secs_f32(),
        _ => 0.0,
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.handle_input(ctx);

        let flash = remaining_fraction(self.shared_state.food_eaten_at(), FOOD_FLASH);
        let new_best_age = self
            .shared_state
            .new_best_at()
            .map(|at| at.elapsed().as_secs_f32());

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = self.shared_state.snapshot() else {
                ui.centered_and_justified(|ui| ui.label("Starting..."));
                return;
            };

            if render_hud(ui, &snapshot, new_best_age) {
                self.handle.on_reset_requested();
            }
            ui.separator();

            let board_rect = ui.available_rect_before_wrap();
            self.board.render(ui, &snapshot, flash);

            if let Some(info) = self.shared_state.game_over() {
                Self::render_game_over(ui, board_rect, info);
            }
        });

        let highlight_active = new_best_age.is_some_and(|age| age < NEW_BEST_HIGHLIGHT.as_secs_f32());
        if flash > 0.0 || highlight_active {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
