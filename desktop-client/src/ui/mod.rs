mod app;
mod board;
mod hud;

pub use app::SnakeApp;
