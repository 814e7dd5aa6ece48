mod best_score_config;
mod main_config;
mod window_config;

pub use best_score_config::BestScoreConfig;
pub use main_config::{get_config_manager, Config};
pub use window_config::WindowConfig;
