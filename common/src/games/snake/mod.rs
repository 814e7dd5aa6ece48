mod food;
mod game_state;
mod grid;
mod input;
mod observer;
mod rules;
mod runner;
mod scheduler;
mod session;
mod settings;
mod snake;
mod types;

pub use food::place_food;
pub use game_state::{GameSnapshot, SnakeGameState};
pub use grid::Grid;
pub use input::{propose_direction, DirectionChange, RejectReason};
pub use observer::GameObserver;
pub use rules::{advance, TickOutcome};
pub use runner::{SessionEvent, SessionHandle, SessionRunner};
pub use scheduler::TickScheduler;
pub use session::{GameSession, SchedulerCommand};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Cell, Direction, EndReason, GamePhase};
