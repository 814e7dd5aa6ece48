use std::time::Duration;

use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::runner::SessionEvent;
use super::session::SchedulerCommand;

struct TickTask {
    handle: JoinHandle<()>,
    generation: u64,
    interval: Duration,
}

/// Periodic tick source for a session.
///
/// Each start spawns a fresh task tagged with a new generation; changing the interval
/// replaces the task instead of waiting out the old period. Ticks missed while the host
/// is stalled are skipped, never replayed.
pub struct TickScheduler {
    events: WeakUnboundedSender<SessionEvent>,
    task: Option<TickTask>,
    generation: u64,
}

impl TickScheduler {
    pub fn new(events: &UnboundedSender<SessionEvent>) -> Self {
        Self {
            events: events.downgrade(),
            task: None,
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    #[cfg(test)]
    fn interval(&self) -> Option<Duration> {
        self.task.as_ref().map(|task| task.interval)
    }

    /// True when `generation` belongs to the task that is currently running.
    pub fn is_current(&self, generation: u64) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| task.generation == generation)
    }

    pub fn start(&mut self, period: Duration) {
        if self.task.is_some() {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let events = self.events.clone();

        let handle = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                timer.tick().await;
                let Some(sender) = events.upgrade() else {
                    break;
                };
                if sender.send(SessionEvent::Tick(generation)).is_err() {
                    break;
                }
            }
        });

        self.task = Some(TickTask {
            handle,
            generation,
            interval: period,
        });
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.handle.abort();
        }
    }

    pub fn restart(&mut self, period: Duration) {
        self.stop();
        self.start(period);
    }

    pub fn apply(&mut self, command: SchedulerCommand) {
        match command {
            SchedulerCommand::Keep => {}
            SchedulerCommand::Start(period) => self.start(period),
            SchedulerCommand::Stop => self.stop(),
            SchedulerCommand::Restart(period) => self.restart(period),
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
