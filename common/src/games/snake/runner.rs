use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::log;
use super::observer::GameObserver;
use super::scheduler::TickScheduler;
use super::session::{GameSession, SchedulerCommand};
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Direction(Direction),
    StartOrResume,
    Reset,
    Tick(u64),
    Shutdown,
}

/// Input side of a running session. Cheap to clone; events sent after the runner
/// stopped are dropped.
#[derive(Clone)]
pub struct SessionHandle {
    events: UnboundedSender<SessionEvent>,
}

impl SessionHandle {
    pub fn on_directional_input(&self, direction: Direction) {
        let _ = self.events.send(SessionEvent::Direction(direction));
    }

    pub fn on_start_or_resume(&self) {
        let _ = self.events.send(SessionEvent::StartOrResume);
    }

    pub fn on_reset_requested(&self) {
        let _ = self.events.send(SessionEvent::Reset);
    }

    pub fn shutdown(&self) {
        let _ = self.events.send(SessionEvent::Shutdown);
    }

    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}

/// Owns a `GameSession` and serializes input and ticks through one queue,
/// so exactly one step is ever in flight.
pub struct SessionRunner<O: GameObserver> {
    session: GameSession<O>,
    scheduler: TickScheduler,
    events: UnboundedReceiver<SessionEvent>,
}

impl<O: GameObserver> SessionRunner<O> {
    pub fn new(session: GameSession<O>) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = Self {
            session,
            scheduler: TickScheduler::new(&tx),
            events: rx,
        };
        (runner, SessionHandle { events: tx })
    }

    /// Processes events until `Shutdown` or until every handle is dropped.
    pub async fn run(mut self) -> GameSession<O> {
        while let Some(event) = self.events.recv().await {
            let command = match event {
                SessionEvent::Direction(direction) => self.session.on_directional_input(direction),
                SessionEvent::StartOrResume => self.session.on_start_or_resume(),
                SessionEvent::Reset => self.session.on_reset_requested(),
                SessionEvent::Tick(generation) if self.scheduler.is_current(generation) => {
                    self.session.tick()
                }
                SessionEvent::Tick(_) => SchedulerCommand::Keep,
                SessionEvent::Shutdown => break,
            };
            self.scheduler.apply(command);
        }

        self.scheduler.stop();
        log!("Session stopped, best score {}", self.session.best_score());
        self.session
    }
}
