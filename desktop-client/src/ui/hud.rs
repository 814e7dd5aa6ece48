use eframe::egui;
use snake3d_common::games::snake::{EndReason, GamePhase, GameSnapshot};

const NEW_BEST_HIGHLIGHT_SECS: f32 = 1.5;

pub fn status_text(snapshot: &GameSnapshot) -> String {
    match snapshot.phase {
        GamePhase::Idle => "Press SPACE or any direction key to start".to_string(),
        GamePhase::Running => String::new(),
        GamePhase::Over(EndReason::SelfCollision) => format!(
            "Game over. Final score: {}. Press SPACE or Restart to play again.",
            snapshot.score
        ),
        GamePhase::Over(EndReason::BoardFull) => format!(
            "Board full! Final score: {}. Press SPACE or Restart to play again.",
            snapshot.score
        ),
    }
}

/// Score line, best score line and the status message. Returns true when Restart was clicked.
pub fn render_hud(ui: &mut egui::Ui, snapshot: &GameSnapshot, new_best_age: Option<f32>) -> bool {
    let mut restart_clicked = false;

    ui.horizontal(|ui| {
        ui.heading(format!("Score: {}", snapshot.score));
        ui.add_space(24.0);

        let best = egui::RichText::new(format!("Best: {}", snapshot.best_score)).size(18.0);
        let best = match new_best_age {
            Some(age) if age < NEW_BEST_HIGHLIGHT_SECS => best.color(egui::Color32::GOLD),
            _ => best,
        };
        ui.label(best);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Restart").clicked() {
                restart_clicked = true;
            }
            ui.label(
                egui::RichText::new(format!("{} ms/step", snapshot.speed_interval_ms))
                    .color(egui::Color32::GRAY),
            );
        });
    });

    let status = status_text(snapshot);
    if !status.is_empty() {
        let color = if snapshot.is_game_over() {
            egui::Color32::from_rgb(255, 107, 107)
        } else {
            egui::Color32::LIGHT_GRAY
        };
        ui.label(egui::RichText::new(status).color(color).size(16.0));
    }

    restart_clicked
}
