//! Event-stream driver
//!
//! Merges two asynchronous sources into one ordered event channel — a
//! fixed-rate clock emitting `Tick`s and a keyboard adapter emitting `Move`
//! edges — and folds the reducer over it in a single task. Every resulting
//! `State` snapshot is published for the view layer. The fold task is the
//! only consumer; events are applied strictly sequentially and the loop
//! tears itself down exactly once when the state reports game over.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::consts::PADDLE_SPEED;
use crate::sim::{reduce, Event, State};

/// Interval between clock ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Events buffered ahead of the fold task
const EVENT_BUFFER: usize = 64;
/// State snapshots buffered for slow views
const STATE_BUFFER: usize = 64;

/// Keys driving the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// Keyboard edge adapter for the human paddle.
///
/// Tracks held keys so OS key repeat collapses to a single leading edge:
/// only genuine press/release transitions become `Move` events.
pub struct InputHandle {
    tx: mpsc::Sender<Event>,
    up_held: bool,
    down_held: bool,
}

impl InputHandle {
    fn new(tx: mpsc::Sender<Event>) -> Self {
        Self {
            tx,
            up_held: false,
            down_held: false,
        }
    }

    fn held_mut(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up => &mut self.up_held,
            Key::Down => &mut self.down_held,
        }
    }

    /// Leading edge of a key press. Repeats while held are dropped.
    pub fn press(&mut self, key: Key) {
        let held = self.held_mut(key);
        if *held {
            return;
        }
        *held = true;
        let direction = match key {
            Key::Up => -PADDLE_SPEED,
            Key::Down => PADDLE_SPEED,
        };
        self.send(Event::Move { direction });
    }

    /// Leading edge of a key release. Ignored unless the key was held.
    pub fn release(&mut self, key: Key) {
        let held = self.held_mut(key);
        if !*held {
            return;
        }
        *held = false;
        self.send(Event::Move { direction: 0.0 });
    }

    fn send(&self, event: Event) {
        // A closed channel just means the subscription already tore down
        let _ = self.tx.try_send(event);
    }
}

/// A running game: the fold task plus the channels feeding it.
///
/// Restarting after game over is simply calling [`Subscription::start`]
/// again — fresh initial state, fresh channels.
pub struct Subscription {
    task: JoinHandle<State>,
}

impl Subscription {
    /// Start a fresh game folding from `State::initial()`.
    ///
    /// Returns the subscription, the keyboard handle, and the snapshot
    /// stream the view layer renders from.
    pub fn start(tick_interval: Duration) -> (Self, InputHandle, broadcast::Receiver<State>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let (state_tx, state_rx) = broadcast::channel(STATE_BUFFER);
        let task = tokio::spawn(run_loop(event_rx, state_tx, tick_interval));
        (Self { task }, InputHandle::new(event_tx), state_rx)
    }

    /// Wait for the game to finish and return the terminal state.
    ///
    /// `None` if the subscription was stopped before game over.
    pub async fn finished(self) -> Option<State> {
        self.task.await.ok()
    }

    /// Tear the game down before game over.
    pub fn stop(&self) {
        self.task.abort();
    }
}

/// The fold loop. Owns the only live `State` value.
async fn run_loop(
    mut events: mpsc::Receiver<Event>,
    states: broadcast::Sender<State>,
    tick_interval: Duration,
) -> State {
    let mut state = State::initial();
    let mut elapsed: f64 = 0.0;

    let mut clock = tokio::time::interval(tick_interval);
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::info!("game started");

    loop {
        let event = tokio::select! {
            _ = clock.tick() => {
                let tick = Event::Tick { elapsed };
                elapsed += 1.0;
                tick
            }
            Some(event) = events.recv() => event,
        };

        state = reduce(state, event);
        let _ = states.send(state);

        if state.game_over {
            log::info!(
                "game over: {} - {}",
                state.score.player1,
                state.score.player2
            );
            break;
        }
    }

    state
}
